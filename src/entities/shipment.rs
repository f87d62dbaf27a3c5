use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::choices::{parse_choice, ShipmentStatus};
use crate::errors::SchemaError;
use crate::validation::validate_shipment_status;

/// Physical movement of (part of) an order.
///
/// Owned by its order. Driver and vehicle are borrowed: deleting either
/// clears the reference and keeps the shipment.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "shipments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    #[validate(length(min = 1, max = 20))]
    pub shipment_number: String,

    pub order_id: Uuid,

    pub driver_id: Option<i32>,

    pub vehicle_id: Option<Uuid>,

    pub departure_time: Option<DateTime<Utc>>,

    pub estimated_arrival: Option<DateTime<Utc>>,

    pub actual_arrival: Option<DateTime<Utc>>,

    #[validate(custom = "validate_shipment_status")]
    pub status: String,

    #[sea_orm(column_type = "Text")]
    pub notes: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_delete = "Cascade"
    )]
    Order,

    #[sea_orm(
        belongs_to = "super::driver::Entity",
        from = "Column::DriverId",
        to = "super::driver::Column::Id",
        on_delete = "SetNull"
    )]
    Driver,

    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::Id",
        on_delete = "SetNull"
    )]
    Vehicle,

    #[sea_orm(has_many = "super::shipment_tracking::Entity")]
    TrackingUpdates,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::driver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Driver.def()
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::shipment_tracking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrackingUpdates.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;
        let now = Utc::now();
        if insert {
            if active_model.id.is_not_set() {
                active_model.id = Set(Uuid::new_v4());
            }
            if active_model.status.is_not_set() {
                active_model.status = Set(ShipmentStatus::default().to_string());
            }
            if active_model.notes.is_not_set() {
                active_model.notes = Set(String::new());
            }
            for field in [
                &mut active_model.departure_time,
                &mut active_model.estimated_arrival,
                &mut active_model.actual_arrival,
            ] {
                if field.is_not_set() {
                    *field = Set(None);
                }
            }
            if active_model.driver_id.is_not_set() {
                active_model.driver_id = Set(None);
            }
            if active_model.vehicle_id.is_not_set() {
                active_model.vehicle_id = Set(None);
            }
            active_model.created_at = Set(now);
        }
        active_model.updated_at = Set(now);
        Ok(active_model)
    }
}

impl Model {
    pub fn status(&self) -> Result<ShipmentStatus, SchemaError> {
        parse_choice("status", &self.status)
    }

    /// Arrived, and later than estimated.
    pub fn arrived_late(&self) -> bool {
        match (self.actual_arrival, self.estimated_arrival) {
            (Some(actual), Some(estimated)) => actual > estimated,
            _ => false,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shipment_number)
    }
}
