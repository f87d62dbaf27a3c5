use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stock of one product in one warehouse. The `(product_id, warehouse_id)`
/// pair is unique; both parents cascade.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: Uuid,
    pub warehouse_id: Uuid,
    #[validate(range(min = 0))]
    pub quantity: i32,
    pub last_restock_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "Cascade"
    )]
    Product,

    #[sea_orm(
        belongs_to = "super::warehouse::Entity",
        from = "Column::WarehouseId",
        to = "super::warehouse::Column::Id",
        on_delete = "Cascade"
    )]
    Warehouse,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::warehouse::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warehouse.def()
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
            if active_model.quantity.is_not_set() {
                active_model.quantity = Set(0);
            }
            if active_model.last_restock_date.is_not_set() {
                active_model.last_restock_date = Set(None);
            }
        }
        Ok(active_model)
    }
}

impl Model {
    /// "{product} - {warehouse} - {quantity}"
    pub fn label(&self, product: &super::product::Model, warehouse: &super::warehouse::Model) -> String {
        format!("{} - {} - {}", product.name, warehouse.name, self.quantity)
    }

    /// At or below the product's reorder threshold.
    pub fn needs_reorder(&self, product: &super::product::Model) -> bool {
        self.quantity <= product.reorder_level
    }
}
