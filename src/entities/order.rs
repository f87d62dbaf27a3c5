use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::choices::{parse_choice, OrderStatus};
use crate::errors::SchemaError;
use crate::validation::{non_negative, validate_order_status};

/// Customer order. Line items and shipments are owned and cascade with it.
///
/// `status` is stored as text; any value may follow any other.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    #[validate(length(min = 1, max = 20))]
    pub order_number: String,

    pub customer_id: Uuid,

    pub order_date: DateTime<Utc>,

    #[validate(custom = "validate_order_status")]
    pub status: String,

    #[sea_orm(column_type = "Text")]
    #[validate(length(min = 1))]
    pub shipping_address: String,

    #[validate(length(min = 1, max = 50))]
    pub shipping_city: String,

    #[validate(length(min = 1, max = 50))]
    pub shipping_state: String,

    #[validate(length(min = 1, max = 10))]
    pub shipping_zip_code: String,

    #[validate(length(min = 1, max = 50))]
    pub shipping_country: String,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[validate(custom = "non_negative")]
    pub total_amount: Decimal,

    #[validate(length(max = 50))]
    pub tracking_number: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub notes: String,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_delete = "Cascade"
    )]
    Customer,

    #[sea_orm(has_many = "super::order_item::Entity")]
    Items,

    #[sea_orm(has_many = "super::shipment::Entity")]
    Shipments,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
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
                active_model.status = Set(OrderStatus::default().to_string());
            }
            if active_model.tracking_number.is_not_set() {
                active_model.tracking_number = Set(None);
            }
            if active_model.notes.is_not_set() {
                active_model.notes = Set(String::new());
            }
            active_model.order_date = Set(now);
        }
        active_model.updated_at = Set(now);
        Ok(active_model)
    }
}

impl Model {
    pub fn status(&self) -> Result<OrderStatus, SchemaError> {
        parse_choice("status", &self.status)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.order_number)
    }
}
