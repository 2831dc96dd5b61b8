//! Order Model

use serde::{Deserialize, Serialize};

/// Payment method (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Upi,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Upi => "upi",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cash" => Some(PaymentMethod::Cash),
            "upi" => Some(PaymentMethod::Upi),
            _ => None,
        }
    }
}

/// Payment status as recorded on the order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
}

/// One cart line on an outbound order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub price: f64,
}

/// Outbound order representation (`POST /orders` body)
///
/// Created once per successful submission; immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub customer_name: String,
    pub phone: String,
    /// Composed "{address}, {city} - {zipcode}" string
    pub address: String,
    pub meals: Vec<OrderLine>,
    pub total_price: f64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
}

/// Server confirmation for a placed order
#[derive(Debug, Clone, Deserialize)]
pub struct OrderPlaced {
    pub message: String,
    /// Total as recomputed by the server (advisory check against ours)
    #[serde(default)]
    pub total_price: Option<f64>,
}

/// Stored order row (`GET /orders`)
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    /// Comma-joined meal names as flattened by the server
    #[serde(default)]
    pub meal_name: Option<String>,
    pub total_price: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Upi).unwrap(),
            "\"upi\""
        );
        assert_eq!(PaymentMethod::parse("cash"), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::parse("card"), None);
    }

    #[test]
    fn payment_status_wire_names() {
        assert_eq!(serde_json::to_string(&PaymentStatus::Paid).unwrap(), "\"Paid\"");
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Pending).unwrap(),
            "\"Pending\""
        );
    }
}
