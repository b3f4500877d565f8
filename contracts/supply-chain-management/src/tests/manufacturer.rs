#![cfg(test)]

use super::utils::*;
use crate::{DeliveryStatus, SupplyChainError};
use soroban_sdk::String;

#[test]
fn test_create_product_sets_inventory() {
    let setup = TestSetup::new();
    setup.create_product(1, "Test Product", UNIT, 100);

    let product = setup.client.get_manufacturer_product(&1).unwrap();
    assert_eq!(product.id, 1);
    assert_eq!(product.name, String::from_str(&setup.env, "Test Product"));
    assert_eq!(product.price, UNIT);
    assert_eq!(product.quantity, 100);
    assert!(!product.buyable);
}

#[test]
fn test_create_product_requires_manufacturer_role() {
    let setup = TestSetup::new();
    let name = String::from_str(&setup.env, "Counterfeit");

    let result = setup
        .client
        .try_create_product(&setup.retailer, &1, &name, &UNIT, &10);
    assert_eq!(result, Err(Ok(SupplyChainError::Unauthorized)));
    assert!(setup.client.get_manufacturer_product(&1).is_none());
}

#[test]
fn test_create_product_rejects_duplicate_id() {
    let setup = TestSetup::new();
    setup.create_product(1, "Original", UNIT, 100);

    let name = String::from_str(&setup.env, "Replacement");
    let result = setup
        .client
        .try_create_product(&setup.manufacturer, &1, &name, &(2 * UNIT), &5);
    assert_eq!(result, Err(Ok(SupplyChainError::DuplicateEntity)));

    // The original entry is untouched
    let product = setup.client.get_manufacturer_product(&1).unwrap();
    assert_eq!(product.name, String::from_str(&setup.env, "Original"));
    assert_eq!(product.quantity, 100);
}

#[test]
fn test_create_product_rejects_negative_price() {
    let setup = TestSetup::new();
    let name = String::from_str(&setup.env, "Broken");

    let result = setup
        .client
        .try_create_product(&setup.manufacturer, &1, &name, &-1, &10);
    assert_eq!(result, Err(Ok(SupplyChainError::InvalidInput)));
}

#[test]
fn test_create_product_allows_zero_price_and_quantity() {
    let setup = TestSetup::new();
    setup.create_product(7, "Sample", 0, 0);

    let product = setup.client.get_manufacturer_product(&7).unwrap();
    assert_eq!(product.price, 0);
    assert_eq!(product.quantity, 0);
}

#[test]
fn test_request_distribution_without_order_fails() {
    let setup = TestSetup::new();
    setup.create_product(1, "Product for Retail", UNIT, 100);

    let result = setup
        .client
        .try_request_distribution(&setup.manufacturer, &1, &100);
    assert_eq!(result, Err(Ok(SupplyChainError::NoOrderPending)));
}

#[test]
fn test_request_distribution_exceeding_inventory_fails() {
    let setup = TestSetup::new();
    setup.create_product(1, "Product for Retail", UNIT, 100);
    setup.order(1, 10, 10 * UNIT);

    let result = setup
        .client
        .try_request_distribution(&setup.manufacturer, &1, &101);
    assert_eq!(result, Err(Ok(SupplyChainError::InsufficientInventory)));

    let delivery = setup.client.get_delivery(&1).unwrap();
    assert_eq!(delivery.status, DeliveryStatus::Ordered);
    assert_eq!(delivery.quantity, 10);
}

#[test]
fn test_request_distribution_marks_ready() {
    let setup = TestSetup::new();
    setup.create_product(1, "Product for Retail", UNIT, 100);
    setup.order(1, 10, 10 * UNIT);

    setup
        .client
        .request_distribution(&setup.manufacturer, &1, &10);

    let delivery = setup.client.get_delivery(&1).unwrap();
    assert_eq!(delivery.status, DeliveryStatus::ReadyForShipment);
    assert_eq!(delivery.quantity, 10);

    // Inventory only moves at ship time
    assert_eq!(
        setup.client.get_manufacturer_product(&1).unwrap().quantity,
        100
    );
}

#[test]
fn test_request_distribution_requires_manufacturer_role() {
    let setup = TestSetup::new();
    setup.create_product(1, "Product for Retail", UNIT, 100);
    setup.order(1, 10, 10 * UNIT);

    let result = setup
        .client
        .try_request_distribution(&setup.logistics, &1, &10);
    assert_eq!(result, Err(Ok(SupplyChainError::Unauthorized)));
}

#[test]
fn test_request_distribution_twice_fails() {
    let setup = TestSetup::new();
    setup.create_product(1, "Product for Retail", UNIT, 100);
    setup.order(1, 10, 10 * UNIT);
    setup
        .client
        .request_distribution(&setup.manufacturer, &1, &10);

    let result = setup
        .client
        .try_request_distribution(&setup.manufacturer, &1, &10);
    assert_eq!(result, Err(Ok(SupplyChainError::NoOrderPending)));
}
