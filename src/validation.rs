//! Field validators and the explicit full-validation pass.
//!
//! Inserts never run these checks. Callers that want the stricter behaviour
//! invoke [`FullClean::full_clean`] before saving.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::entities::choices::{Choice, OrderStatus, ShipmentStatus, UserType, VehicleType};
use crate::errors::SchemaError;

static DIMENSIONS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+(\.\d+)?x\d+(\.\d+)?x\d+(\.\d+)?$").expect("dimensions pattern is valid")
});

/// Runs every declared field validator of a model.
pub trait FullClean {
    fn full_clean(&self) -> Result<(), SchemaError>;
}

impl<T: Validate> FullClean for T {
    fn full_clean(&self) -> Result<(), SchemaError> {
        self.validate().map_err(SchemaError::Validation)
    }
}

/// Checks membership of a stored value in the choice set `C`.
pub fn choice<C: Choice>(value: &str) -> Result<(), ValidationError> {
    if C::parse(value).is_some() {
        return Ok(());
    }
    let mut err = ValidationError::new("invalid_choice");
    err.message = Some(Cow::Owned(format!(
        "'{}' is not a valid choice (expected one of: {})",
        value,
        C::values().join(", ")
    )));
    err.add_param(Cow::Borrowed("value"), &value);
    Err(err)
}

pub fn validate_user_type(value: &str) -> Result<(), ValidationError> {
    choice::<UserType>(value)
}

pub fn validate_order_status(value: &str) -> Result<(), ValidationError> {
    choice::<OrderStatus>(value)
}

pub fn validate_vehicle_type(value: &str) -> Result<(), ValidationError> {
    choice::<VehicleType>(value)
}

pub fn validate_shipment_status(value: &str) -> Result<(), ValidationError> {
    choice::<ShipmentStatus>(value)
}

/// Lower bound of zero for money, weight and capacity columns.
pub fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut err = ValidationError::new("min_value");
        err.message = Some(Cow::Borrowed("Ensure this value is greater than or equal to 0."));
        err.add_param(Cow::Borrowed("min_value"), &0);
        return Err(err);
    }
    Ok(())
}

/// Email columns that allow a blank value.
pub fn blank_or_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || validator::validate_email(value) {
        return Ok(());
    }
    let mut err = ValidationError::new("email");
    err.message = Some(Cow::Borrowed("Enter a valid email address."));
    Err(err)
}

/// Product dimensions are either blank or `LxWxH`.
pub fn validate_dimensions(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || DIMENSIONS_RE.is_match(value) {
        return Ok(());
    }
    let mut err = ValidationError::new("dimensions_format");
    err.message = Some(Cow::Borrowed("Dimensions must be formatted as LxWxH"));
    Err(err)
}

/// Names of the fields that failed, sorted; handy for assertions and logs.
pub fn failed_fields(err: &SchemaError) -> Vec<String> {
    match err {
        SchemaError::Validation(errors) => {
            let mut fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|k| k.to_string())
                .collect();
            fields.sort();
            fields
        }
        _ => Vec::new(),
    }
}
