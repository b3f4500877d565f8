use soroban_sdk::{Address, Env};

use crate::access;
use crate::error::SupplyChainError;
use crate::events;
use crate::payment;
use crate::storage;
use crate::types::{Product, Role};

/// Buy listed stock from the retailer
pub fn purchase_product(
    env: &Env,
    caller: &Address,
    product_id: u64,
    quantity: u64,
    payment: i128,
) -> Result<(), SupplyChainError> {
    access::require_role(env, Role::Consumer, caller)?;

    let mut stock = storage::get_retailer_product(env, product_id)
        .filter(|p| p.buyable)
        .ok_or(SupplyChainError::NotForSale)?;
    if quantity > stock.quantity {
        return Err(SupplyChainError::InsufficientInventory);
    }
    payment::require_payment(env, payment, stock.price, quantity)?;

    stock.quantity -= quantity;
    storage::set_retailer_product(env, &stock);

    let owned = storage::get_purchase(env, caller, product_id)
        .map(|p| p.quantity)
        .unwrap_or(0);
    let purchase = Product {
        id: product_id,
        name: stock.name.clone(),
        price: stock.price,
        quantity: owned
            .checked_add(quantity)
            .ok_or(SupplyChainError::InvalidInput)?,
        buyable: stock.buyable,
    };
    storage::set_purchase(env, caller, &purchase);

    let config = storage::get_config(env)?;
    payment::forward_payment(env, &config.token, caller, &config.retailer, payment)?;

    events::emit_product_purchased(env, product_id, quantity, caller.clone());
    Ok(())
}
