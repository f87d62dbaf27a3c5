use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::entities::choices::ShipmentStatus;
use crate::entities::shipment::{
    ActiveModel as ShipmentActiveModel, Column, Entity as Shipment, Model as ShipmentModel,
};
use crate::entities::shipment_tracking::{
    self, Entity as ShipmentTracking, Model as ShipmentTrackingModel,
};
use crate::errors::SchemaResult;
use crate::repositories::{ensure_deleted, update_error, Repository};

use super::BaseRepository;

/// Repository for shipments and their tracking history
#[derive(Debug)]
pub struct ShipmentRepository {
    base: BaseRepository,
}

impl ShipmentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, shipment: ShipmentActiveModel) -> SchemaResult<ShipmentModel> {
        Ok(shipment.insert(self.base.get_db()).await?)
    }

    pub async fn find_by_id(&self, id: Uuid) -> SchemaResult<Option<ShipmentModel>> {
        Ok(Shipment::find_by_id(id).one(self.base.get_db()).await?)
    }

    pub async fn find_by_number(
        &self,
        shipment_number: &str,
    ) -> SchemaResult<Option<ShipmentModel>> {
        Ok(Shipment::find()
            .filter(Column::ShipmentNumber.eq(shipment_number))
            .one(self.base.get_db())
            .await?)
    }

    pub async fn for_order(&self, order_id: Uuid) -> SchemaResult<Vec<ShipmentModel>> {
        Ok(Shipment::find()
            .filter(Column::OrderId.eq(order_id))
            .order_by_asc(Column::CreatedAt)
            .all(self.base.get_db())
            .await?)
    }

    /// Record a tracking event; the timestamp is set on insert
    #[instrument(skip(self, notes))]
    pub async fn add_tracking(
        &self,
        shipment_id: Uuid,
        location: &str,
        status: &str,
        notes: &str,
    ) -> SchemaResult<ShipmentTrackingModel> {
        let update = shipment_tracking::ActiveModel {
            shipment_id: Set(shipment_id),
            location: Set(location.to_string()),
            status: Set(status.to_string()),
            notes: Set(notes.to_string()),
            ..Default::default()
        };
        Ok(update.insert(self.base.get_db()).await?)
    }

    /// Tracking history in creation order
    pub async fn tracking_updates(
        &self,
        shipment_id: Uuid,
    ) -> SchemaResult<Vec<ShipmentTrackingModel>> {
        Ok(ShipmentTracking::find()
            .filter(shipment_tracking::Column::ShipmentId.eq(shipment_id))
            .order_by_asc(shipment_tracking::Column::Timestamp)
            .order_by_asc(shipment_tracking::Column::Id)
            .all(self.base.get_db())
            .await?)
    }

    /// Most recent tracking event, if any
    pub async fn latest_tracking(
        &self,
        shipment_id: Uuid,
    ) -> SchemaResult<Option<ShipmentTrackingModel>> {
        Ok(ShipmentTracking::find()
            .filter(shipment_tracking::Column::ShipmentId.eq(shipment_id))
            .order_by_desc(shipment_tracking::Column::Timestamp)
            .order_by_desc(shipment_tracking::Column::Id)
            .one(self.base.get_db())
            .await?)
    }

    /// Shipments still in the `pending` state, oldest first
    pub async fn pending(&self) -> SchemaResult<Vec<ShipmentModel>> {
        Ok(Shipment::find()
            .filter(Column::Status.eq(ShipmentStatus::Pending.to_string()))
            .order_by_asc(Column::CreatedAt)
            .all(self.base.get_db())
            .await?)
    }

    /// Overwrite the status. No transition rules apply.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: Uuid, status: &str) -> SchemaResult<ShipmentModel> {
        let shipment = ShipmentActiveModel {
            id: ActiveValue::Unchanged(id),
            status: Set(status.to_string()),
            ..Default::default()
        };
        let updated = shipment
            .update(self.base.get_db())
            .await
            .map_err(|e| update_error("Shipment", id, e))?;
        info!(shipment_id = %id, status, "shipment status updated");
        Ok(updated)
    }

    /// Delete a shipment with its tracking history
    pub async fn delete(&self, id: Uuid) -> SchemaResult<()> {
        let result = Shipment::delete_by_id(id).exec(self.base.get_db()).await?;
        ensure_deleted(result.rows_affected, "Shipment", id)
    }
}

impl Repository for ShipmentRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
