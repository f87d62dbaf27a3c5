use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::choices::{parse_choice, VehicleType, DEFAULT_VEHICLE_STATUS};
use crate::errors::SchemaError;
use crate::validation::{non_negative, validate_vehicle_type};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    #[validate(length(min = 1, max = 20))]
    pub vehicle_number: String,

    #[validate(custom = "validate_vehicle_type")]
    pub vehicle_type: String,

    #[validate(length(min = 1, max = 50))]
    pub make: String,

    #[sea_orm(column_name = "model")]
    #[validate(length(min = 1, max = 50))]
    pub model_name: String,

    #[validate(range(min = 0))]
    pub year: i32,

    #[validate(length(min = 1, max = 20))]
    pub license_plate: String,

    /// Load capacity, in the same unit as product weight.
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[validate(custom = "non_negative")]
    pub capacity: Decimal,

    /// Free text, `available` on creation.
    #[validate(length(max = 20))]
    pub status: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shipment::Entity")]
    Shipments,
}

impl Related<super::shipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shipments.def()
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
                active_model.status = Set(DEFAULT_VEHICLE_STATUS.to_string());
            }
            active_model.created_at = Set(now);
        }
        active_model.updated_at = Set(now);
        Ok(active_model)
    }
}

impl Model {
    pub fn vehicle_type(&self) -> Result<VehicleType, SchemaError> {
        parse_choice("vehicle_type", &self.vehicle_type)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} {}", self.vehicle_number, self.make, self.model_name)
    }
}
