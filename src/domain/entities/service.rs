//! Service entity - a catalog entry of offered work

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EntityId, Photo};
use crate::error::{PaintshopError, PaintshopResult};

/// A type of work the shop offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub estimated_duration_hours: u32,
    /// Display order is insertion order
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// Create/edit payload for a service (everything but the id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub estimated_duration_hours: u32,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl NewService {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        estimated_duration_hours: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            estimated_duration_hours,
            photos: Vec::new(),
        }
    }

    pub fn with_photos(mut self, photos: Vec<Photo>) -> Self {
        self.photos = photos;
        self
    }

    /// Required-field check performed before the payload reaches the store
    pub fn validate(&self) -> PaintshopResult<()> {
        if self.name.trim().is_empty() {
            return Err(PaintshopError::MissingField { field: "name" });
        }
        if self.description.trim().is_empty() {
            return Err(PaintshopError::MissingField {
                field: "description",
            });
        }
        if self.estimated_duration_hours == 0 {
            return Err(PaintshopError::InvalidField {
                field: "estimated_duration_hours",
                message: "must be at least 1 hour".to_string(),
            });
        }
        Ok(())
    }

    /// Attach an id, producing the stored entity
    pub fn into_service(self, id: EntityId) -> Service {
        Service {
            id,
            name: self.name,
            description: self.description,
            estimated_duration_hours: self.estimated_duration_hours,
            photos: self.photos,
        }
    }
}

impl From<&Service> for NewService {
    fn from(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            description: service.description.clone(),
            estimated_duration_hours: service.estimated_duration_hours,
            photos: service.photos.clone(),
        }
    }
}
