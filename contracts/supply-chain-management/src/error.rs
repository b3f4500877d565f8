use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SupplyChainError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    Unauthorized = 3,

    // Validation errors
    InvalidInput = 4,
    DuplicateEntity = 5,

    // Inventory errors
    OutOfStock = 6,
    InsufficientInventory = 7,
    InsufficientPayment = 8,

    // Delivery errors
    NoOrderPending = 9,
    NotReadyForShipment = 10,
    NotShipped = 11,

    // Retail errors
    NothingToList = 12,
    NotForSale = 13,

    DeliveryInProgress = 14,
    PaymentFailed = 15,
    RoleConflict = 16,
}
