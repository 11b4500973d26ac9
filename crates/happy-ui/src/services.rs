//! Browser-side gateways.

use crate::core::submit::{LoginGateway, LoginPayload, SubmitError};
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

/// Stand-in for a sign-in service: waits, then accepts everything.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SimulatedGateway {
    latency_ms: u32,
}

impl SimulatedGateway {
    pub(crate) const fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }
}

#[async_trait(?Send)]
impl LoginGateway for SimulatedGateway {
    async fn submit(&self, _payload: &LoginPayload) -> Result<(), SubmitError> {
        TimeoutFuture::new(self.latency_ms).await;
        Ok(())
    }
}
