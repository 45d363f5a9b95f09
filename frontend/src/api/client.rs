use async_trait::async_trait;
use std::time::Duration;

use crate::{api::types::*, config, utils::time};

/// Boundary to the contact-intake service.
#[async_trait(?Send)]
pub trait ContactIntake {
    async fn submit_contact(&self, request: ContactMessageRequest) -> Result<(), ApiError>;
}

/// Placeholder for the intake service: waits a fixed delay and always succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandInClient {
    delay: Duration,
}

impl StandInClient {
    pub fn new() -> Self {
        Self::with_delay(config::current().submit_delay)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for StandInClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ContactIntake for StandInClient {
    async fn submit_contact(&self, request: ContactMessageRequest) -> Result<(), ApiError> {
        log::debug!(
            "stand-in intake holding contact from @{} for {:?}",
            request.email_domain(),
            self.delay
        );
        time::sleep(self.delay).await;
        Ok(())
    }
}
