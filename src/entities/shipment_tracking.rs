use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Tracking event for a shipment. `status` here is free text
/// ("Out for delivery"), not the shipment's choice status.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "shipment_tracking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub shipment_id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub location: String,
    #[validate(length(min = 1, max = 100))]
    pub status: String,
    pub timestamp: DateTime<Utc>,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shipment::Entity",
        from = "Column::ShipmentId",
        to = "super::shipment::Column::Id",
        on_delete = "Cascade"
    )]
    Shipment,
}

impl Related<super::shipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shipment.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;
        if insert {
            active_model.timestamp = Set(Utc::now());
            if active_model.notes.is_not_set() {
                active_model.notes = Set(String::new());
            }
        }
        Ok(active_model)
    }
}

impl Model {
    /// "{shipment_number} - {timestamp}"
    pub fn label(&self, shipment: &super::shipment::Model) -> String {
        format!("{} - {}", shipment.shipment_number, self.timestamp)
    }
}
