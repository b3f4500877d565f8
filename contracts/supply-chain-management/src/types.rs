use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Admin = 0,
    Manufacturer = 1,
    Logistics = 2,
    Retailer = 3,
    Consumer = 4,
}

impl Role {
    pub const OPERATIONAL: [Role; 4] = [
        Role::Manufacturer,
        Role::Logistics,
        Role::Retailer,
        Role::Consumer,
    ];
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum DeliveryStatus {
    None = 0,
    Ordered = 1,
    ReadyForShipment = 2,
    Shipped = 3,
}

impl DeliveryStatus {
    /// A delivery is in flight from the moment it is ordered until the
    /// retailer receives it.
    pub fn in_flight(&self) -> bool {
        !matches!(self, DeliveryStatus::None)
    }
}

/// Catalog entry. Used for the manufacturer catalog, the retailer inventory
/// and consumer purchase records alike.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: i128,
    pub quantity: u64,
    pub buyable: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Delivery {
    pub id: u64,
    pub status: DeliveryStatus,
    pub quantity: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Authenticity {
    pub is_authentic: bool,
    pub is_available_for_purchase: bool,
    pub price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Token contract used to settle orders and purchases
    pub token: Address,
    /// Receives retailer payments for manufacturer orders
    pub manufacturer: Address,
    /// Receives consumer payments for retail purchases
    pub retailer: Address,
}

// Storage key types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Initialized,
    Config,
    HasRole(Role, Address),
    Product(u64),                 // manufacturer catalog
    Delivery(u64),                // product_id -> delivery
    RetailerProduct(u64),         // retailer inventory
    Purchase(Address, u64),       // (consumer, product_id)
    ProductIds,
    DeliveryIds,
    RetailerProductIds,
    PurchaseIds(Address),         // consumer -> Vec<product_id>
}
