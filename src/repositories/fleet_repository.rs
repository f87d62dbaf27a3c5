use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::entities::driver::{self, Entity as Driver, Model as DriverModel};
use crate::entities::user;
use crate::entities::vehicle::{
    self, ActiveModel as VehicleActiveModel, Entity as Vehicle, Model as VehicleModel,
};
use crate::errors::{SchemaError, SchemaResult};
use crate::repositories::{ensure_deleted, Repository};

use super::BaseRepository;

/// Repository for vehicles and drivers
#[derive(Debug)]
pub struct FleetRepository {
    base: BaseRepository,
}

impl FleetRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create_vehicle(&self, vehicle: VehicleActiveModel) -> SchemaResult<VehicleModel> {
        Ok(vehicle.insert(self.base.get_db()).await?)
    }

    pub async fn find_vehicle(&self, id: Uuid) -> SchemaResult<Option<VehicleModel>> {
        Ok(Vehicle::find_by_id(id).one(self.base.get_db()).await?)
    }

    pub async fn find_vehicle_by_number(
        &self,
        vehicle_number: &str,
    ) -> SchemaResult<Option<VehicleModel>> {
        Ok(Vehicle::find()
            .filter(vehicle::Column::VehicleNumber.eq(vehicle_number))
            .one(self.base.get_db())
            .await?)
    }

    /// Delete a vehicle; shipments that used it keep existing unassigned
    #[instrument(skip(self))]
    pub async fn delete_vehicle(&self, id: Uuid) -> SchemaResult<()> {
        let result = Vehicle::delete_by_id(id).exec(self.base.get_db()).await?;
        ensure_deleted(result.rows_affected, "Vehicle", id)?;
        info!(vehicle_id = %id, "vehicle deleted");
        Ok(())
    }

    /// Attach a driver profile to an existing user
    pub async fn create_driver(
        &self,
        user_id: i32,
        license_number: &str,
        license_expiry_date: NaiveDate,
    ) -> SchemaResult<DriverModel> {
        let driver = driver::ActiveModel {
            user_id: Set(user_id),
            license_number: Set(license_number.to_string()),
            license_expiry_date: Set(license_expiry_date),
            ..Default::default()
        };
        Ok(driver.insert(self.base.get_db()).await?)
    }

    pub async fn find_driver(&self, id: i32) -> SchemaResult<Option<DriverModel>> {
        Ok(Driver::find_by_id(id).one(self.base.get_db()).await?)
    }

    /// Full name of the driver's user, or the username when no name is set
    pub async fn driver_display_name(&self, id: i32) -> SchemaResult<String> {
        let (driver, user) = Driver::find_by_id(id)
            .find_also_related(user::Entity)
            .one(self.base.get_db())
            .await?
            .ok_or_else(|| SchemaError::not_found("Driver", id))?;
        let user = user.ok_or_else(|| SchemaError::not_found("User", driver.user_id))?;
        Ok(driver.display_name(&user))
    }

    /// Drivers whose license expires before `date`
    pub async fn drivers_with_license_expiring_before(
        &self,
        date: NaiveDate,
    ) -> SchemaResult<Vec<DriverModel>> {
        Ok(Driver::find()
            .filter(driver::Column::LicenseExpiryDate.lt(date))
            .all(self.base.get_db())
            .await?)
    }

    /// Delete a driver profile; the user account stays, shipments lose the
    /// driver reference
    #[instrument(skip(self))]
    pub async fn delete_driver(&self, id: i32) -> SchemaResult<()> {
        let result = Driver::delete_by_id(id).exec(self.base.get_db()).await?;
        ensure_deleted(result.rows_affected, "Driver", id)?;
        info!(driver_id = id, "driver deleted");
        Ok(())
    }
}

impl Repository for FleetRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
