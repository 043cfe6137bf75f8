use std::sync::Arc;

use common::{Clock, ClockZone, SystemClock};

/// Shared application state accessible from all handlers.
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// State backed by the wall clock in the given zone.
    pub fn system(zone: ClockZone) -> Self {
        Self::new(Arc::new(SystemClock::new(zone)))
    }
}
