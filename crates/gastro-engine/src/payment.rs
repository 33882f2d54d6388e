//! # Payment Processing Simulation
//!
//! The one asynchronous boundary in the system. A real deployment would put
//! a terminal/gateway integration here; this simulation reproduces only the
//! timing contract the operator experiences:
//!
//! - an artificial delay between invoking payment and the "processing"
//!   indicator clearing
//! - the delay never blocks other tables' state transitions (it is plain
//!   `await`ed time, no lock is held)
//! - once invoked it always resolves; there are no cancellation semantics
//!
//! Settling the order itself stays synchronous in the registry; callers
//! typically `process(...)` first and then dispatch `complete_order` with
//! the externally produced signature reference.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::time::Duration;
use tracing::debug;
use ts_rs::TS;

use gastro_core::{Money, PaymentMethod};

/// Outcome of a simulated payment round-trip.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub method: PaymentMethod,
    pub amount: Money,
    #[ts(as = "String")]
    pub processed_at: DateTime<Utc>,
}

/// Simulated payment terminal.
#[derive(Debug, Clone)]
pub struct PaymentProcessor {
    delay: Duration,
}

impl PaymentProcessor {
    /// Terminal round-trip observed in the reference deployment.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

    pub fn new(delay: Duration) -> Self {
        PaymentProcessor { delay }
    }

    /// Runs one payment through the simulated terminal.
    ///
    /// Always resolves; a declined payment is not part of the simulation.
    pub async fn process(&self, method: PaymentMethod, amount: Money) -> PaymentReceipt {
        debug!(?method, %amount, "processing payment");
        tokio::time::sleep(self.delay).await;

        PaymentReceipt {
            method,
            amount,
            processed_at: Utc::now(),
        }
    }
}

impl Default for PaymentProcessor {
    fn default() -> Self {
        PaymentProcessor::new(Self::DEFAULT_DELAY)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_process_resolves_after_configured_delay() {
        let processor = PaymentProcessor::new(Duration::from_secs(2));
        let started = Instant::now();

        let receipt = processor
            .process(PaymentMethod::Cash, Money::from_cents(2240))
            .await;

        assert!(started.elapsed() >= Duration::from_secs(2));
        assert_eq!(receipt.method, PaymentMethod::Cash);
        assert_eq!(receipt.amount.cents(), 2240);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_does_not_serialize_independent_payments() {
        let processor = PaymentProcessor::new(Duration::from_secs(2));
        let started = Instant::now();

        // Two tables paying at once wait side by side, not back to back
        let (a, b) = tokio::join!(
            processor.process(PaymentMethod::Card, Money::from_cents(1000)),
            processor.process(PaymentMethod::Mobile, Money::from_cents(500)),
        );

        assert!(started.elapsed() < Duration::from_secs(4));
        assert_eq!(a.amount.cents(), 1000);
        assert_eq!(b.amount.cents(), 500);
    }
}
