use soroban_sdk::{log, Address, Env};

use crate::access;
use crate::error::SupplyChainError;
use crate::events;
use crate::payment;
use crate::storage;
use crate::types::{Delivery, DeliveryStatus, Product, Role};

/// Order stock from the manufacturer, paying `payment` up front
pub fn order_product(
    env: &Env,
    caller: &Address,
    product_id: u64,
    quantity: u64,
    payment: i128,
) -> Result<(), SupplyChainError> {
    access::require_role(env, Role::Retailer, caller)?;

    let product = storage::get_product(env, product_id)
        .filter(|p| p.quantity > 0)
        .ok_or(SupplyChainError::OutOfStock)?;
    if quantity > product.quantity {
        return Err(SupplyChainError::InsufficientInventory);
    }
    payment::require_payment(env, payment, product.price, quantity)?;

    // One delivery per product; a paid order is never overwritten
    if let Some(existing) = storage::get_delivery(env, product_id) {
        if existing.status.in_flight() {
            log!(env, "delivery for product {} already in flight", product_id);
            return Err(SupplyChainError::DeliveryInProgress);
        }
    }

    let delivery = Delivery {
        id: product_id,
        status: DeliveryStatus::Ordered,
        quantity,
    };
    storage::set_delivery(env, &delivery);

    let config = storage::get_config(env)?;
    payment::forward_payment(env, &config.token, caller, &config.manufacturer, payment)?;

    events::emit_product_ordered(env, product_id, caller.clone());
    events::emit_shipping_status_updated(env, product_id, delivery.status);
    Ok(())
}

/// Take a shipped delivery into retailer inventory
pub fn receive_product(
    env: &Env,
    caller: &Address,
    product_id: u64,
) -> Result<(), SupplyChainError> {
    access::require_role(env, Role::Retailer, caller)?;

    let mut delivery = storage::get_delivery(env, product_id)
        .filter(|d| d.status == DeliveryStatus::Shipped)
        .ok_or(SupplyChainError::NotShipped)?;

    let stock = match storage::get_retailer_product(env, product_id) {
        Some(mut existing) => {
            existing.quantity = existing
                .quantity
                .checked_add(delivery.quantity)
                .ok_or(SupplyChainError::InvalidInput)?;
            existing
        }
        None => {
            // A shipped delivery always has a catalog entry behind it
            let source = storage::get_product(env, product_id)
                .ok_or(SupplyChainError::NotShipped)?;
            Product {
                id: product_id,
                name: source.name,
                price: source.price,
                quantity: delivery.quantity,
                buyable: false,
            }
        }
    };
    storage::set_retailer_product(env, &stock);

    delivery.status = DeliveryStatus::None;
    delivery.quantity = 0;
    storage::set_delivery(env, &delivery);

    events::emit_product_received(env, product_id, caller.clone());
    events::emit_shipping_status_updated(env, product_id, delivery.status);
    Ok(())
}

/// Put received stock up for sale at the retailer's own price
pub fn list_product_for_sale(
    env: &Env,
    caller: &Address,
    product_id: u64,
    price: i128,
) -> Result<(), SupplyChainError> {
    access::require_role(env, Role::Retailer, caller)?;

    if price < 0 {
        return Err(SupplyChainError::InvalidInput);
    }
    let mut stock = storage::get_retailer_product(env, product_id)
        .filter(|p| p.quantity > 0)
        .ok_or(SupplyChainError::NothingToList)?;

    stock.price = price;
    stock.buyable = true;
    storage::set_retailer_product(env, &stock);

    events::emit_product_listed_for_sale(env, product_id, price, caller.clone());
    Ok(())
}
