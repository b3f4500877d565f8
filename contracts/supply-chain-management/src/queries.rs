use soroban_sdk::{Address, Env, Vec};

use crate::storage;
use crate::types::{Authenticity, DataKey, Delivery, Product};

/// A product is authentic when the manufacturer catalog knows its id. The
/// quoted price is the retail price once the retailer stocks the product.
pub fn verify_product_authenticity(env: &Env, product_id: u64) -> Authenticity {
    let product = match storage::get_product(env, product_id) {
        Some(p) => p,
        None => {
            return Authenticity {
                is_authentic: false,
                is_available_for_purchase: false,
                price: 0,
            }
        }
    };

    match storage::get_retailer_product(env, product_id) {
        Some(stock) => Authenticity {
            is_authentic: true,
            is_available_for_purchase: stock.buyable,
            price: stock.price,
        },
        None => Authenticity {
            is_authentic: true,
            is_available_for_purchase: false,
            price: product.price,
        },
    }
}

pub fn get_all_manufacturer_products(env: &Env) -> Vec<Product> {
    let mut products = Vec::new(env);
    for id in storage::get_ids(env, &DataKey::ProductIds).iter() {
        if let Some(product) = storage::get_product(env, id) {
            products.push_back(product);
        }
    }
    products
}

pub fn get_all_deliveries(env: &Env) -> Vec<Delivery> {
    let mut deliveries = Vec::new(env);
    for id in storage::get_ids(env, &DataKey::DeliveryIds).iter() {
        if let Some(delivery) = storage::get_delivery(env, id) {
            deliveries.push_back(delivery);
        }
    }
    deliveries
}

pub fn get_all_retailer_products(env: &Env) -> Vec<Product> {
    let mut products = Vec::new(env);
    for id in storage::get_ids(env, &DataKey::RetailerProductIds).iter() {
        if let Some(product) = storage::get_retailer_product(env, id) {
            products.push_back(product);
        }
    }
    products
}

pub fn get_all_consumer_purchases(env: &Env, consumer: &Address) -> Vec<Product> {
    let mut purchases = Vec::new(env);
    let index = DataKey::PurchaseIds(consumer.clone());
    for id in storage::get_ids(env, &index).iter() {
        if let Some(purchase) = storage::get_purchase(env, consumer, id) {
            purchases.push_back(purchase);
        }
    }
    purchases
}
