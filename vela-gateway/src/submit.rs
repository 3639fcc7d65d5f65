//! Order submission orchestration.

use tracing::{info, warn};
use vela_core::data::{OrderRequest, RawOrderFields, SubmissionOutcome};
use vela_core::error::{NetworkError, VelaError};
use vela_core::traits::OrderTransport;

/// Drives one order from raw fields to a classified outcome.
///
/// Validation happens locally first; the transport is only touched for
/// orders that pass. Per attempt there is at most one transport call
/// and the submitter never resubmits: a transport failure leaves the
/// order in an unknown state on the exchange, and deciding what to do
/// about that belongs to the caller.
#[derive(Debug)]
pub struct OrderSubmitter<T: OrderTransport> {
    transport: T,
}

impl<T: OrderTransport> OrderSubmitter<T> {
    /// Create a submitter over the given transport.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate and submit one order, classifying the result.
    ///
    /// - validation failure: `Rejected` with no code, transport untouched
    /// - exchange refusal: `Rejected` with the exchange's code and message
    /// - transport failure: `TransportFailure`, order state unknown
    pub async fn submit(&self, raw: &RawOrderFields) -> SubmissionOutcome {
        let outcome = match OrderRequest::from_raw(raw) {
            Ok(request) => match self.transport.create_order(&request).await {
                Ok(ack) => SubmissionOutcome::Accepted { ack },
                Err(VelaError::Exchange(e)) => SubmissionOutcome::Rejected {
                    code: e.error_code(),
                    message: e.detail(),
                },
                Err(VelaError::Network(e)) => SubmissionOutcome::TransportFailure { error: e },
                Err(other) => SubmissionOutcome::TransportFailure {
                    error: NetworkError::InvalidResponse {
                        reason: other.to_string(),
                    },
                },
            },
            Err(e) => SubmissionOutcome::Rejected {
                code: None,
                message: e.to_string(),
            },
        };

        // One structured event per submission attempt.
        if outcome.is_accepted() {
            info!(
                exchange = self.transport.exchange(),
                symbol = %raw.symbol,
                side = %raw.side,
                order_type = %raw.order_type,
                quantity = %raw.quantity,
                outcome = outcome.kind(),
                "Order submission attempt"
            );
        } else {
            warn!(
                exchange = self.transport.exchange(),
                symbol = %raw.symbol,
                side = %raw.side,
                order_type = %raw.order_type,
                quantity = %raw.quantity,
                outcome = outcome.kind(),
                detail = %outcome,
                "Order submission attempt"
            );
        }

        outcome
    }
}
