use soroban_sdk::{Address, Env, Vec};

use crate::error::SupplyChainError;
use crate::types::{Config, DataKey, Delivery, Product};

// Initialization and configuration
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn require_initialized(env: &Env) -> Result<(), SupplyChainError> {
    if !is_initialized(env) {
        return Err(SupplyChainError::NotInitialized);
    }
    Ok(())
}

pub fn get_config(env: &Env) -> Result<Config, SupplyChainError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(SupplyChainError::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

// Manufacturer catalog
pub fn get_product(env: &Env, product_id: u64) -> Option<Product> {
    env.storage().persistent().get(&DataKey::Product(product_id))
}

pub fn has_product(env: &Env, product_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Product(product_id))
}

pub fn set_product(env: &Env, product: &Product) {
    let key = DataKey::Product(product.id);
    if !env.storage().persistent().has(&key) {
        append_id(env, &DataKey::ProductIds, product.id);
    }
    env.storage().persistent().set(&key, product);
}

// Deliveries
pub fn get_delivery(env: &Env, product_id: u64) -> Option<Delivery> {
    env.storage().persistent().get(&DataKey::Delivery(product_id))
}

pub fn set_delivery(env: &Env, delivery: &Delivery) {
    let key = DataKey::Delivery(delivery.id);
    if !env.storage().persistent().has(&key) {
        append_id(env, &DataKey::DeliveryIds, delivery.id);
    }
    env.storage().persistent().set(&key, delivery);
}

// Retailer inventory
pub fn get_retailer_product(env: &Env, product_id: u64) -> Option<Product> {
    env.storage()
        .persistent()
        .get(&DataKey::RetailerProduct(product_id))
}

pub fn set_retailer_product(env: &Env, product: &Product) {
    let key = DataKey::RetailerProduct(product.id);
    if !env.storage().persistent().has(&key) {
        append_id(env, &DataKey::RetailerProductIds, product.id);
    }
    env.storage().persistent().set(&key, product);
}

// Consumer purchases
pub fn get_purchase(env: &Env, consumer: &Address, product_id: u64) -> Option<Product> {
    env.storage()
        .persistent()
        .get(&DataKey::Purchase(consumer.clone(), product_id))
}

pub fn set_purchase(env: &Env, consumer: &Address, purchase: &Product) {
    let key = DataKey::Purchase(consumer.clone(), purchase.id);
    if !env.storage().persistent().has(&key) {
        append_id(env, &DataKey::PurchaseIds(consumer.clone()), purchase.id);
    }
    env.storage().persistent().set(&key, purchase);
}

// Insertion-order indexes
pub fn get_ids(env: &Env, index: &DataKey) -> Vec<u64> {
    env.storage().persistent().get(index).unwrap_or(Vec::new(env))
}

fn append_id(env: &Env, index: &DataKey, id: u64) {
    let mut ids = get_ids(env, index);
    ids.push_back(id);
    env.storage().persistent().set(index, &ids);
}
