//! Enumerated value sets for choice-restricted columns.
//!
//! Choice columns are stored as plain strings. Inserting an out-of-set value
//! is accepted by the database; only an explicit
//! [`full_clean`](crate::validation::FullClean::full_clean) pass rejects it.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::errors::SchemaError;

/// A closed set of stored string values with human-readable labels.
pub trait Choice: Copy + std::str::FromStr + IntoEnumIterator + Into<&'static str> {
    /// Display label shown next to the stored value.
    fn label(&self) -> &'static str;

    /// Stored value of every member, in declaration order.
    fn values() -> Vec<&'static str> {
        Self::iter().map(Into::into).collect()
    }

    /// Parses a stored value.
    fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Admin,
    Manager,
    #[default]
    Staff,
    Driver,
    Customer,
}

impl Choice for UserType {
    fn label(&self) -> &'static str {
        match self {
            UserType::Admin => "Admin",
            UserType::Manager => "Manager",
            UserType::Staff => "Staff",
            UserType::Driver => "Driver",
            UserType::Customer => "Customer",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl Choice for OrderStatus {
    fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Returned => "Returned",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Truck,
    Van,
    Car,
    Motorcycle,
}

impl Choice for VehicleType {
    fn label(&self) -> &'static str {
        match self {
            VehicleType::Truck => "Truck",
            VehicleType::Van => "Van",
            VehicleType::Car => "Car",
            VehicleType::Motorcycle => "Motorcycle",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    #[default]
    Pending,
    InTransit,
    Delivered,
    Failed,
}

impl Choice for ShipmentStatus {
    fn label(&self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "Pending",
            ShipmentStatus::InTransit => "In Transit",
            ShipmentStatus::Delivered => "Delivered",
            ShipmentStatus::Failed => "Failed",
        }
    }
}

/// Vehicles are created with this status; the column is free text.
pub const DEFAULT_VEHICLE_STATUS: &str = "available";

/// Parses a stored choice value, naming the column in the error.
pub fn parse_choice<C: Choice>(field: &str, value: &str) -> Result<C, SchemaError> {
    C::parse(value).ok_or_else(|| {
        SchemaError::InvalidInput(format!("{} has unknown value '{}'", field, value))
    })
}
