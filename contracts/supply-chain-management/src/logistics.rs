use soroban_sdk::{Address, Env};

use crate::access;
use crate::error::SupplyChainError;
use crate::events;
use crate::storage;
use crate::types::{DeliveryStatus, Role};

/// Ship a delivery that the manufacturer released for distribution.
///
/// Stock leaves the manufacturer catalog here, not at order time. The
/// delivery records the shipped quantity so receipt credits the retailer
/// with exactly what was taken out.
pub fn ship_product(
    env: &Env,
    caller: &Address,
    product_id: u64,
    quantity: u64,
) -> Result<(), SupplyChainError> {
    access::require_role(env, Role::Logistics, caller)?;

    let mut delivery = storage::get_delivery(env, product_id)
        .filter(|d| d.status == DeliveryStatus::ReadyForShipment)
        .ok_or(SupplyChainError::NotReadyForShipment)?;

    let mut product = storage::get_product(env, product_id)
        .ok_or(SupplyChainError::InsufficientInventory)?;
    product.quantity = product
        .quantity
        .checked_sub(quantity)
        .ok_or(SupplyChainError::InsufficientInventory)?;
    storage::set_product(env, &product);

    delivery.status = DeliveryStatus::Shipped;
    delivery.quantity = quantity;
    storage::set_delivery(env, &delivery);

    events::emit_product_shipped(env, product_id);
    events::emit_shipping_status_updated(env, product_id, delivery.status);
    Ok(())
}
