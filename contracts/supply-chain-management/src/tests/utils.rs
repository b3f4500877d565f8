#![cfg(test)]

use crate::{SupplyChainManagement, SupplyChainManagementClient};
use soroban_sdk::{
    testutils::{Address as _, Events},
    token, Address, Env, String, Symbol, TryFromVal,
};

/// One token unit with seven decimals
pub const UNIT: i128 = 10_000_000;

pub struct TestSetup {
    pub env: Env,
    pub client: SupplyChainManagementClient<'static>,
    pub admin: Address,
    pub token_contract: Address,
    pub manufacturer: Address,
    pub logistics: Address,
    pub retailer: Address,
    pub consumer: Address,
}

impl TestSetup {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let token_contract = create_test_token(&env, &admin);
        let manufacturer = Address::generate(&env);
        let logistics = Address::generate(&env);
        let retailer = Address::generate(&env);
        let consumer = Address::generate(&env);

        let contract_id = env.register(SupplyChainManagement, ());
        let client = SupplyChainManagementClient::new(&env, &contract_id);

        client.initialize(
            &admin,
            &token_contract,
            &manufacturer,
            &logistics,
            &retailer,
            &consumer,
        );

        mint_tokens(&env, &token_contract, &retailer, 1_000 * UNIT);
        mint_tokens(&env, &token_contract, &consumer, 1_000 * UNIT);

        Self {
            env,
            client,
            admin,
            token_contract,
            manufacturer,
            logistics,
            retailer,
            consumer,
        }
    }

    pub fn create_product(&self, product_id: u64, name: &str, price: i128, quantity: u64) {
        self.client.create_product(
            &self.manufacturer,
            &product_id,
            &String::from_str(&self.env, name),
            &price,
            &quantity,
        );
    }

    pub fn order(&self, product_id: u64, quantity: u64, payment: i128) {
        self.client
            .order_product(&self.retailer, &product_id, &quantity, &payment);
    }

    /// Create, order, release, ship and receive `quantity` units of a product
    /// priced at one unit, leaving them in retailer inventory.
    pub fn stock_retailer(&self, product_id: u64, initial: u64, quantity: u64) {
        self.create_product(product_id, "Coke", UNIT, initial);
        self.order(product_id, quantity, UNIT * quantity as i128);
        self.client
            .request_distribution(&self.manufacturer, &product_id, &quantity);
        self.client
            .ship_product(&self.logistics, &product_id, &quantity);
        self.client.receive_product(&self.retailer, &product_id);
    }

    pub fn balance(&self, account: &Address) -> i128 {
        get_token_balance(&self.env, &self.token_contract, account)
    }

    /// Most recent event published by the ledger under `name`, decoded.
    pub fn last_event<T>(&self, name: &str) -> Option<T>
    where
        T: TryFromVal<Env, soroban_sdk::Val>,
    {
        let wanted = Symbol::new(&self.env, name);
        let mut found = None;
        for (contract, topics, data) in self.env.events().all().iter() {
            if contract != self.client.address {
                continue;
            }
            let topic = match topics.get(0) {
                Some(t) => t,
                None => continue,
            };
            match Symbol::try_from_val(&self.env, &topic) {
                Ok(sym) if sym == wanted => {
                    found = T::try_from_val(&self.env, &data).ok();
                }
                _ => {}
            }
        }
        found
    }
}

pub fn create_test_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone())
        .address()
}

pub fn mint_tokens(env: &Env, token_address: &Address, to: &Address, amount: i128) {
    let token = token::StellarAssetClient::new(env, token_address);
    token.mint(to, &amount);
}

pub fn get_token_balance(env: &Env, token_address: &Address, account: &Address) -> i128 {
    let token = token::Client::new(env, token_address);
    token.balance(account)
}
