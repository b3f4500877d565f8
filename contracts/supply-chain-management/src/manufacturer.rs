use soroban_sdk::{Address, Env, String};

use crate::access;
use crate::error::SupplyChainError;
use crate::events;
use crate::storage;
use crate::types::{DeliveryStatus, Product, Role};

/// Add a product to the manufacturer catalog
pub fn create_product(
    env: &Env,
    caller: &Address,
    product_id: u64,
    name: String,
    price: i128,
    quantity: u64,
) -> Result<(), SupplyChainError> {
    access::require_role(env, Role::Manufacturer, caller)?;

    if price < 0 {
        return Err(SupplyChainError::InvalidInput);
    }
    if storage::has_product(env, product_id) {
        return Err(SupplyChainError::DuplicateEntity);
    }

    let product = Product {
        id: product_id,
        name: name.clone(),
        price,
        quantity,
        buyable: false,
    };
    storage::set_product(env, &product);

    events::emit_product_created(env, product_id, name, price, quantity);
    Ok(())
}

/// Mark an ordered delivery as ready for the logistics provider
pub fn request_distribution(
    env: &Env,
    caller: &Address,
    product_id: u64,
    quantity: u64,
) -> Result<(), SupplyChainError> {
    access::require_role(env, Role::Manufacturer, caller)?;

    let mut delivery = storage::get_delivery(env, product_id)
        .filter(|d| d.status == DeliveryStatus::Ordered)
        .ok_or(SupplyChainError::NoOrderPending)?;

    let on_hand = storage::get_product(env, product_id)
        .map(|p| p.quantity)
        .unwrap_or(0);
    if quantity > on_hand {
        return Err(SupplyChainError::InsufficientInventory);
    }

    delivery.status = DeliveryStatus::ReadyForShipment;
    delivery.quantity = quantity;
    storage::set_delivery(env, &delivery);

    events::emit_distribution_requested(env, product_id);
    events::emit_shipping_status_updated(env, product_id, delivery.status);
    Ok(())
}
