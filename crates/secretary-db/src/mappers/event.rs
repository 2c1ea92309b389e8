//! LabEvent entity <-> model mapper

use secretary_core::entities::LabEvent;
use secretary_core::error::DomainError;

use crate::models::LabEventModel;

/// Convert LabEventModel to LabEvent entity
impl TryFrom<LabEventModel> for LabEvent {
    type Error = DomainError;

    fn try_from(model: LabEventModel) -> Result<Self, Self::Error> {
        Ok(LabEvent {
            id: model.id,
            username: model.username,
            event_type: model.event_type.parse()?,
            created_at: model.created_at,
        })
    }
}
