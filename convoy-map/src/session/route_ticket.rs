use convoy_core::{model::EntityId, wire::SmartRouteRequest, ValidationError};

/// a validated route request tagged with the session that issued it. a
/// response is only applied while its ticket's session is still current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTicket {
    pub session: u64,
    pub origin: EntityId,
    pub destination: EntityId,
}

impl RouteTicket {
    /// checks the selection before any request is made.
    ///
    /// # Arguments
    ///
    /// * `session` - session number the ticket will carry
    /// * `origin` - selected origin checkpoint id, possibly empty
    /// * `destination` - selected destination checkpoint id, possibly empty
    ///
    /// # Returns
    ///
    /// * a ticket, or the first validation rule the selection breaks
    pub fn new(session: u64, origin: &str, destination: &str) -> Result<Self, ValidationError> {
        let origin = EntityId::new(origin.trim());
        let destination = EntityId::new(destination.trim());
        if origin.is_empty() {
            return Err(ValidationError::EmptyOrigin);
        }
        if destination.is_empty() {
            return Err(ValidationError::EmptyDestination);
        }
        if origin == destination {
            return Err(ValidationError::SameOriginAndDestination(origin));
        }
        Ok(Self {
            session,
            origin,
            destination,
        })
    }

    pub fn request(&self) -> SmartRouteRequest {
        SmartRouteRequest {
            start_checkpoint_id: self.origin.clone(),
            end_checkpoint_id: self.destination.clone(),
        }
    }
}
