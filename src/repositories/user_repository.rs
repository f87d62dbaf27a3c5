use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::entities::choices::UserType;
use crate::entities::user::{self, Entity as User, Model as UserModel};
use crate::errors::{SchemaError, SchemaResult};
use crate::password::{hash_password, verify_password};
use crate::repositories::{ensure_deleted, Repository};

use super::BaseRepository;

/// Input for creating a user account
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub user_type: UserType,
}

/// Repository for user accounts
#[derive(Debug)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a user, storing only the argon2 hash of the password
    #[instrument(skip(self, new_user), fields(username = %new_user.username))]
    pub async fn create_user(&self, new_user: NewUser) -> SchemaResult<UserModel> {
        let password_hash = hash_password(&new_user.password)?;
        let user = user::ActiveModel {
            username: Set(new_user.username),
            email: Set(new_user.email),
            password_hash: Set(password_hash),
            first_name: Set(new_user.first_name),
            last_name: Set(new_user.last_name),
            user_type: Set(new_user.user_type.to_string()),
            ..Default::default()
        };

        let created = user.insert(self.base.get_db()).await?;
        info!(user_id = created.id, "user created");
        Ok(created)
    }

    pub async fn find_by_id(&self, id: i32) -> SchemaResult<Option<UserModel>> {
        Ok(User::find_by_id(id).one(self.base.get_db()).await?)
    }

    pub async fn find_by_username(&self, username: &str) -> SchemaResult<Option<UserModel>> {
        Ok(User::find()
            .filter(user::Column::Username.eq(username))
            .one(self.base.get_db())
            .await?)
    }

    /// True when the user exists, is active and the password matches
    #[instrument(skip(self, password))]
    pub async fn check_password(&self, username: &str, password: &str) -> SchemaResult<bool> {
        let Some(user) = self.find_by_username(username).await? else {
            return Ok(false);
        };
        Ok(user.is_active && verify_password(password, &user.password_hash))
    }

    /// Replace the stored password hash
    pub async fn set_password(&self, id: i32, password: &str) -> SchemaResult<UserModel> {
        let user = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| SchemaError::not_found("User", id))?;
        let mut active: user::ActiveModel = user.into();
        active.password_hash = Set(hash_password(password)?);
        Ok(active.update(self.base.get_db()).await?)
    }

    /// Delete a user; its driver profile goes with it
    pub async fn delete(&self, id: i32) -> SchemaResult<()> {
        let result = User::delete_by_id(id).exec(self.base.get_db()).await?;
        ensure_deleted(result.rows_affected, "User", id)
    }
}

impl Repository for UserRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
