//! Submission outcome classification.
//!
//! Every submission attempt resolves to exactly one of three outcomes:
//! the exchange accepted the order, the exchange (or local validation)
//! refused it, or the transport failed before a well-formed answer
//! arrived. The third case is deliberately separate: after a transport
//! failure the order may or may not exist on the exchange.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::NetworkError;
use crate::types::{OrderId, Symbol};

/// Successful exchange acknowledgement of a new order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAck {
    /// Exchange-assigned order ID.
    pub order_id: OrderId,
    /// Symbol the order was placed on.
    pub symbol: Symbol,
    /// Order status as reported by the exchange (e.g. `NEW`).
    pub status: String,
    /// Raw response body, kept for audit logging.
    pub raw_response: String,
}

/// The result of a single order submission attempt.
///
/// # Examples
///
/// ```
/// use vela_core::data::SubmissionOutcome;
///
/// let outcome = SubmissionOutcome::Rejected {
///     code: Some(-2019),
///     message: "Margin is insufficient.".to_string(),
/// };
/// assert!(outcome.is_rejected());
/// assert!(!outcome.is_accepted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// The exchange accepted the order.
    Accepted {
        /// The exchange's acknowledgement.
        ack: OrderAck,
    },
    /// The order was refused - either by local validation (no transport
    /// call was made, `code` is `None`) or by the exchange (`code`
    /// carries the exchange's error code).
    Rejected {
        /// Exchange error code, if the exchange refused.
        code: Option<i32>,
        /// Refusal reason, verbatim where it came from the exchange.
        message: String,
    },
    /// The transport failed before a well-formed exchange answer arrived.
    /// The order may or may not exist on the exchange.
    TransportFailure {
        /// The underlying transport error.
        error: NetworkError,
    },
}

impl SubmissionOutcome {
    /// Returns true if the order was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns true if the order was refused.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Returns true if the transport failed.
    #[must_use]
    pub const fn is_transport_failure(&self) -> bool {
        matches!(self, Self::TransportFailure { .. })
    }

    /// Returns the outcome variant as a static string, for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Accepted { .. } => "accepted",
            Self::Rejected { .. } => "rejected",
            Self::TransportFailure { .. } => "transport_failure",
        }
    }

    /// Returns the acknowledgement, if the order was accepted.
    #[must_use]
    pub fn as_ack(&self) -> Option<&OrderAck> {
        match self {
            Self::Accepted { ack } => Some(ack),
            _ => None,
        }
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted { ack } => {
                write!(f, "accepted: order {} ({})", ack.order_id, ack.status)
            }
            Self::Rejected {
                code: Some(code),
                message,
            } => write!(f, "rejected (code {code}): {message}"),
            Self::Rejected {
                code: None,
                message,
            } => write!(f, "rejected: {message}"),
            Self::TransportFailure { error } => write!(f, "transport failure: {error}"),
        }
    }
}
