use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::choices::{parse_choice, UserType};
use crate::errors::SchemaError;
use crate::validation::{blank_or_email, validate_user_type};

/// Application account. Drivers hang off a user through a one-to-one profile.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    #[validate(length(min = 1, max = 150))]
    pub username: String,

    #[validate(custom = "blank_or_email")]
    pub email: String,

    #[sea_orm(column_type = "Text")]
    #[serde(skip_serializing)]
    pub password_hash: String,

    #[validate(length(max = 150))]
    pub first_name: String,

    #[validate(length(max = 150))]
    pub last_name: String,

    #[validate(custom = "validate_user_type")]
    pub user_type: String,

    #[validate(length(max = 15))]
    pub phone: String,

    #[sea_orm(column_type = "Text")]
    pub address: String,

    pub profile_picture: Option<String>,

    pub is_active: bool,

    pub date_joined: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::driver::Entity")]
    DriverProfile,
}

impl Related<super::driver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DriverProfile.def()
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
            active_model.date_joined = Set(Utc::now());
            if active_model.user_type.is_not_set() {
                active_model.user_type = Set(UserType::default().to_string());
            }
            if active_model.is_active.is_not_set() {
                active_model.is_active = Set(true);
            }
            for field in [
                &mut active_model.email,
                &mut active_model.first_name,
                &mut active_model.last_name,
                &mut active_model.phone,
                &mut active_model.address,
            ] {
                if field.is_not_set() {
                    *field = Set(String::new());
                }
            }
        }
        Ok(active_model)
    }
}

impl Model {
    pub fn user_type(&self) -> Result<UserType, SchemaError> {
        parse_choice("user_type", &self.user_type)
    }

    /// "First Last", trimmed; empty when neither name is set.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.username)
    }
}
