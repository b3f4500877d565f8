use soroban_sdk::{contracttype, Address, Env, String};

use crate::types::{DeliveryStatus, Role};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductCreatedEvent {
    pub product_id: u64,
    pub name: String,
    pub price: i128,
    pub quantity: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductOrderedEvent {
    pub product_id: u64,
    pub ordered_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistributionRequestedEvent {
    pub product_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductShippedEvent {
    pub product_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductReceivedEvent {
    pub product_id: u64,
    pub received_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductListedForSaleEvent {
    pub product_id: u64,
    pub price: i128,
    pub listed_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductPurchasedEvent {
    pub product_id: u64,
    pub quantity: u64,
    pub purchased_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShippingStatusUpdatedEvent {
    pub product_id: u64,
    pub new_status: DeliveryStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleChangedEvent {
    pub role: Role,
    pub account: Address,
    pub sender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayeesUpdatedEvent {
    pub manufacturer: Address,
    pub retailer: Address,
    pub updated_by: Address,
}

pub fn emit_product_created(env: &Env, product_id: u64, name: String, price: i128, quantity: u64) {
    let event = ProductCreatedEvent {
        product_id,
        name,
        price,
        quantity,
    };
    env.events().publish(("product_created",), event);
}

pub fn emit_product_ordered(env: &Env, product_id: u64, ordered_by: Address) {
    let event = ProductOrderedEvent {
        product_id,
        ordered_by,
    };
    env.events().publish(("product_ordered",), event);
}

pub fn emit_distribution_requested(env: &Env, product_id: u64) {
    let event = DistributionRequestedEvent { product_id };
    env.events().publish(("distribution_requested",), event);
}

pub fn emit_product_shipped(env: &Env, product_id: u64) {
    let event = ProductShippedEvent { product_id };
    env.events().publish(("product_shipped",), event);
}

pub fn emit_product_received(env: &Env, product_id: u64, received_by: Address) {
    let event = ProductReceivedEvent {
        product_id,
        received_by,
    };
    env.events().publish(("product_received",), event);
}

pub fn emit_product_listed_for_sale(env: &Env, product_id: u64, price: i128, listed_by: Address) {
    let event = ProductListedForSaleEvent {
        product_id,
        price,
        listed_by,
    };
    env.events().publish(("product_listed_for_sale",), event);
}

pub fn emit_product_purchased(env: &Env, product_id: u64, quantity: u64, purchased_by: Address) {
    let event = ProductPurchasedEvent {
        product_id,
        quantity,
        purchased_by,
    };
    env.events().publish(("product_purchased",), event);
}

pub fn emit_shipping_status_updated(env: &Env, product_id: u64, new_status: DeliveryStatus) {
    let event = ShippingStatusUpdatedEvent {
        product_id,
        new_status,
    };
    env.events().publish(("shipping_status_updated",), event);
}

pub fn emit_role_granted(env: &Env, role: Role, account: Address, sender: Address) {
    let event = RoleChangedEvent {
        role,
        account,
        sender,
    };
    env.events().publish(("role_granted",), event);
}

pub fn emit_role_revoked(env: &Env, role: Role, account: Address, sender: Address) {
    let event = RoleChangedEvent {
        role,
        account,
        sender,
    };
    env.events().publish(("role_revoked",), event);
}

pub fn emit_payees_updated(
    env: &Env,
    manufacturer: Address,
    retailer: Address,
    updated_by: Address,
) {
    let event = PayeesUpdatedEvent {
        manufacturer,
        retailer,
        updated_by,
    };
    env.events().publish(("payees_updated",), event);
}
