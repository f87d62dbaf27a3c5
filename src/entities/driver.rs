use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Driver profile of a [`super::user`] account (one-to-one, cascades with
/// the user). Shipments keep a nullable reference that is cleared when the
/// driver goes away.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "drivers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    #[sea_orm(unique)]
    #[validate(length(min = 1, max = 20))]
    pub license_number: String,
    pub license_expiry_date: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(has_many = "super::shipment::Entity")]
    Shipments,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::shipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shipments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// The user's full name, falling back to the username.
    pub fn display_name(&self, user: &super::user::Model) -> String {
        let full_name = user.full_name();
        if full_name.is_empty() {
            user.username.clone()
        } else {
            full_name
        }
    }

    pub fn license_expired_on(&self, date: NaiveDate) -> bool {
        self.license_expiry_date < date
    }
}
