pub mod choices;

// Accounts
pub mod user;

// Parties
pub mod customer;
pub mod supplier;

// Catalog and stock
pub mod category;
pub mod inventory;
pub mod product;
pub mod warehouse;

// Sales
pub mod order;
pub mod order_item;

// Fleet and delivery
pub mod driver;
pub mod shipment;
pub mod shipment_tracking;
pub mod vehicle;

pub use choices::{Choice, OrderStatus, ShipmentStatus, UserType, VehicleType};
