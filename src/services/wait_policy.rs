// src/services/wait_policy.rs
// DOCUMENTATION: Wait before following a continuation token
// PURPOSE: Make the token activation delay injectable so tests can skip it

use std::time::Duration;

/// Delay the Places API needs before a fresh next_page_token becomes valid
pub const TOKEN_ACTIVATION_DELAY: Duration = Duration::from_secs(2);

/// Decides how long to wait before a continuation request
pub trait WaitPolicy: Send + Sync {
    fn page_token_delay(&self) -> Duration;
}

/// Always wait the same amount of time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        FixedDelay(TOKEN_ACTIVATION_DELAY)
    }
}

impl WaitPolicy for FixedDelay {
    fn page_token_delay(&self) -> Duration {
        self.0
    }
}

/// Never wait; only useful against a local or mocked service
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl WaitPolicy for NoDelay {
    fn page_token_delay(&self) -> Duration {
        Duration::ZERO
    }
}

/// Sleep for the policy's delay (returns immediately for a zero delay)
pub async fn wait_for_token(policy: &dyn WaitPolicy) {
    let delay = policy.page_token_delay();
    if delay.is_zero() {
        return;
    }
    log::debug!("Waiting {:?} for the continuation token to activate", delay);
    tokio::time::sleep(delay).await;
}
