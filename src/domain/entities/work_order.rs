//! WorkOrder entity - one client job moving through the status lifecycle

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EntityId, Photo, Status};
use crate::error::{PaintshopError, PaintshopResult};

/// A tracked unit of paid work for one client item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: EntityId,
    pub client_name: String,
    pub item_description: String,
    /// Weak reference into the service catalog; may dangle after a delete
    pub service_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paint_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Create/edit payload for a work order
///
/// Carries no id, status or timestamps: those belong to the store and the
/// transition logic. Unknown fields (including `status` and `createdAt`)
/// are ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkOrder {
    pub client_name: String,
    pub item_description: String,
    pub service_id: EntityId,
    #[serde(default)]
    pub paint_color: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub scheduled_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl NewWorkOrder {
    pub fn new(
        client_name: impl Into<String>,
        item_description: impl Into<String>,
        service_id: impl Into<EntityId>,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            item_description: item_description.into(),
            service_id: service_id.into(),
            ..Self::default()
        }
    }

    pub fn paint_color(mut self, color: impl Into<String>) -> Self {
        self.paint_color = Some(color.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn scheduled_start_date(mut self, date: NaiveDate) -> Self {
        self.scheduled_start_date = Some(date);
        self
    }

    pub fn photos(mut self, photos: Vec<Photo>) -> Self {
        self.photos = photos;
        self
    }

    /// Required-field check performed before the payload reaches the store
    pub fn validate(&self) -> PaintshopResult<()> {
        if self.client_name.trim().is_empty() {
            return Err(PaintshopError::MissingField {
                field: "client_name",
            });
        }
        if self.item_description.trim().is_empty() {
            return Err(PaintshopError::MissingField {
                field: "item_description",
            });
        }
        if self.service_id.is_empty() {
            return Err(PaintshopError::MissingField {
                field: "service_id",
            });
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(PaintshopError::InvalidField {
                    field: "price",
                    message: format!("{} is not a non-negative amount", price),
                });
            }
        }
        Ok(())
    }

    /// Blank paint color means no color
    fn normalized_paint_color(&self) -> Option<String> {
        self.paint_color
            .as_ref()
            .filter(|c| !c.trim().is_empty())
            .cloned()
    }

    /// Build a fresh order: status is always Pending, creation time is `now`
    pub fn into_work_order(self, id: EntityId, now: DateTime<Utc>) -> WorkOrder {
        let paint_color = self.normalized_paint_color();
        WorkOrder {
            id,
            client_name: self.client_name,
            item_description: self.item_description,
            service_id: self.service_id,
            paint_color,
            price: self.price,
            photos: self.photos,
            status: Status::Pending,
            created_at: now,
            scheduled_start_date: self.scheduled_start_date,
            started_at: None,
            completed_at: None,
        }
    }
}

impl From<&WorkOrder> for NewWorkOrder {
    fn from(order: &WorkOrder) -> Self {
        Self {
            client_name: order.client_name.clone(),
            item_description: order.item_description.clone(),
            service_id: order.service_id.clone(),
            paint_color: order.paint_color.clone(),
            price: order.price,
            scheduled_start_date: order.scheduled_start_date,
            photos: order.photos.clone(),
        }
    }
}

impl WorkOrder {
    /// Replace the editable fields, keeping id, status and timestamps
    pub fn with_draft(&self, draft: NewWorkOrder) -> WorkOrder {
        let paint_color = draft.normalized_paint_color();
        WorkOrder {
            client_name: draft.client_name,
            item_description: draft.item_description,
            service_id: draft.service_id,
            paint_color,
            price: draft.price,
            scheduled_start_date: draft.scheduled_start_date,
            photos: draft.photos,
            ..self.clone()
        }
    }
}
