use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Ten ASCII digits, the first one being `0`.
pub const ORDER_ID_PATTERN: &str = r"^0[0-9]{9}$";

static ORDER_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ORDER_ID_PATTERN).expect("Invalid order id regex pattern"));

/// An order identifier that has passed the pattern check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    pub fn parse(value: &str) -> Result<Self, OrderError> {
        if ORDER_ID_REGEX.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(OrderError::InvalidArgument {
                field: "order ID",
                value: value.to_string(),
                pattern: ORDER_ID_PATTERN,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An order as received. Nothing is checked at construction time; the id
/// format is only enforced by [`Order::process`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    order_id: String,
    customer_id: String,
    order_total: f64,
}

impl Order {
    pub fn new(
        order_id: impl Into<String>,
        customer_id: impl Into<String>,
        order_total: f64,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            customer_id: customer_id.into(),
            order_total,
        }
    }

    /// Validate the order id, then persist the order.
    ///
    /// Persisting is currently a no-op, so a valid order has no observable
    /// effect beyond a debug log line.
    pub fn process(&self) -> Result<(), OrderError> {
        let order_id = OrderId::parse(&self.order_id).inspect_err(|e| {
            tracing::debug!(order_id = %self.order_id, error = %e, "Rejecting order");
        })?;

        tracing::debug!(
            order_id = %order_id.as_str(),
            customer_id = %self.customer_id,
            order_total = self.order_total,
            "Order accepted"
        );

        Ok(())
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn order_total(&self) -> f64 {
        self.order_total
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
