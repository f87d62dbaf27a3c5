use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::validation::{non_negative, validate_dimensions};

/// Reorder threshold applied when none is supplied.
pub const DEFAULT_REORDER_LEVEL: i32 = 10;

/// Catalog product. Stock levels live in [`super::inventory`].
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[sea_orm(unique)]
    #[validate(length(min = 1, max = 20))]
    pub sku: String,

    /// Nulled when the category is deleted.
    pub category_id: Option<i32>,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[validate(custom = "non_negative")]
    pub weight: Decimal,

    /// `LxWxH`, or blank.
    #[validate(length(max = 50), custom = "validate_dimensions")]
    pub dimensions: String,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[validate(custom = "non_negative")]
    pub price: Decimal,

    #[validate(range(min = 0))]
    pub reorder_level: i32,

    pub image: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_delete = "SetNull"
    )]
    Category,

    #[sea_orm(has_many = "super::inventory::Entity")]
    Inventory,

    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inventory.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

/// Warehouses holding this product, through the inventory table.
impl Related<super::warehouse::Entity> for Entity {
    fn to() -> RelationDef {
        super::inventory::Relation::Warehouse.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::inventory::Relation::Product.def().rev())
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
            if active_model.category_id.is_not_set() {
                active_model.category_id = Set(None);
            }
            if active_model.description.is_not_set() {
                active_model.description = Set(String::new());
            }
            if active_model.dimensions.is_not_set() {
                active_model.dimensions = Set(String::new());
            }
            if active_model.reorder_level.is_not_set() {
                active_model.reorder_level = Set(DEFAULT_REORDER_LEVEL);
            }
            if active_model.image.is_not_set() {
                active_model.image = Set(None);
            }
            active_model.created_at = Set(now);
        }
        active_model.updated_at = Set(now);
        Ok(active_model)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
