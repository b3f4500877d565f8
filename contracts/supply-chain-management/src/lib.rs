#![no_std]

mod access;
mod consumer;
mod error;
mod events;
mod logistics;
mod manufacturer;
mod payment;
mod queries;
mod retailer;
mod storage;
mod types;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use error::*;
pub use events::*;
pub use types::*;

#[contract]
pub struct SupplyChainManagement;

#[contractimpl]
impl SupplyChainManagement {
    /// Initialize the contract: grant the admin role and the four operational
    /// roles, and configure the payment token and payees.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        manufacturer: Address,
        logistics: Address,
        retailer: Address,
        consumer: Address,
    ) -> Result<(), SupplyChainError> {
        if storage::is_initialized(&env) {
            return Err(SupplyChainError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_initialized(&env);
        storage::set_config(
            &env,
            &Config {
                token,
                manufacturer: manufacturer.clone(),
                retailer: retailer.clone(),
            },
        );

        access::grant(&env, &admin, Role::Admin, &admin)?;
        access::grant(&env, &admin, Role::Manufacturer, &manufacturer)?;
        access::grant(&env, &admin, Role::Logistics, &logistics)?;
        access::grant(&env, &admin, Role::Retailer, &retailer)?;
        access::grant(&env, &admin, Role::Consumer, &consumer)?;
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<Config, SupplyChainError> {
        storage::get_config(&env)
    }

    /// Redirect order and purchase payments (admin only)
    pub fn update_payees(
        env: Env,
        admin: Address,
        manufacturer: Address,
        retailer: Address,
    ) -> Result<(), SupplyChainError> {
        storage::require_initialized(&env)?;
        admin.require_auth();
        access::require_role(&env, Role::Admin, &admin)?;

        let mut config = storage::get_config(&env)?;
        config.manufacturer = manufacturer.clone();
        config.retailer = retailer.clone();
        storage::set_config(&env, &config);

        events::emit_payees_updated(&env, manufacturer, retailer, admin);
        Ok(())
    }

    // Role administration

    pub fn grant_role(
        env: Env,
        admin: Address,
        role: Role,
        account: Address,
    ) -> Result<(), SupplyChainError> {
        storage::require_initialized(&env)?;
        admin.require_auth();
        access::grant_role(&env, &admin, role, &account)
    }

    pub fn revoke_role(
        env: Env,
        admin: Address,
        role: Role,
        account: Address,
    ) -> Result<(), SupplyChainError> {
        storage::require_initialized(&env)?;
        admin.require_auth();
        access::revoke_role(&env, &admin, role, &account)
    }

    /// Give up a role held by the caller
    pub fn renounce_role(env: Env, account: Address, role: Role) -> Result<(), SupplyChainError> {
        storage::require_initialized(&env)?;
        account.require_auth();
        access::renounce_role(&env, &account, role);
        Ok(())
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        access::has_role(&env, role, &account)
    }

    pub fn get_role_admin(_env: Env, role: Role) -> Role {
        access::get_role_admin(role)
    }

    // Manufacturer

    pub fn create_product(
        env: Env,
        caller: Address,
        product_id: u64,
        name: String,
        price: i128,
        quantity: u64,
    ) -> Result<(), SupplyChainError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        manufacturer::create_product(&env, &caller, product_id, name, price, quantity)
    }

    pub fn request_distribution(
        env: Env,
        caller: Address,
        product_id: u64,
        quantity: u64,
    ) -> Result<(), SupplyChainError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        manufacturer::request_distribution(&env, &caller, product_id, quantity)
    }

    // Logistics

    pub fn ship_product(
        env: Env,
        caller: Address,
        product_id: u64,
        quantity: u64,
    ) -> Result<(), SupplyChainError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        logistics::ship_product(&env, &caller, product_id, quantity)
    }

    // Retailer

    /// Order stock from the manufacturer. `payment` is transferred in full to
    /// the manufacturer payee.
    pub fn order_product(
        env: Env,
        caller: Address,
        product_id: u64,
        quantity: u64,
        payment: i128,
    ) -> Result<(), SupplyChainError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        retailer::order_product(&env, &caller, product_id, quantity, payment)
    }

    pub fn receive_product(
        env: Env,
        caller: Address,
        product_id: u64,
    ) -> Result<(), SupplyChainError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        retailer::receive_product(&env, &caller, product_id)
    }

    pub fn list_product_for_sale(
        env: Env,
        caller: Address,
        product_id: u64,
        price: i128,
    ) -> Result<(), SupplyChainError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        retailer::list_product_for_sale(&env, &caller, product_id, price)
    }

    // Consumer

    /// Buy listed stock. `payment` is transferred in full to the retailer
    /// payee.
    pub fn purchase_product(
        env: Env,
        caller: Address,
        product_id: u64,
        quantity: u64,
        payment: i128,
    ) -> Result<(), SupplyChainError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        consumer::purchase_product(&env, &caller, product_id, quantity, payment)
    }

    // Queries

    pub fn verify_product_authenticity(env: Env, product_id: u64) -> Authenticity {
        queries::verify_product_authenticity(&env, product_id)
    }

    pub fn get_manufacturer_product(env: Env, product_id: u64) -> Option<Product> {
        storage::get_product(&env, product_id)
    }

    pub fn get_delivery(env: Env, product_id: u64) -> Option<Delivery> {
        storage::get_delivery(&env, product_id)
    }

    pub fn get_retailer_product(env: Env, product_id: u64) -> Option<Product> {
        storage::get_retailer_product(&env, product_id)
    }

    pub fn get_consumer_purchase(env: Env, consumer: Address, product_id: u64) -> Option<Product> {
        storage::get_purchase(&env, &consumer, product_id)
    }

    pub fn get_all_manufacturer_products(env: Env) -> Vec<Product> {
        queries::get_all_manufacturer_products(&env)
    }

    pub fn get_all_deliveries(env: Env) -> Vec<Delivery> {
        queries::get_all_deliveries(&env)
    }

    pub fn get_all_retailer_products(env: Env) -> Vec<Product> {
        queries::get_all_retailer_products(&env)
    }

    pub fn get_all_consumer_purchases(env: Env, consumer: Address) -> Vec<Product> {
        queries::get_all_consumer_purchases(&env, &consumer)
    }
}
