//! # Quote Audit Record
//!
//! When the checkout handler creates a price-tagged variant it stores the
//! full calculation input as a metafield so a quoted price can always be
//! reproduced and disputed line by line. [`QuoteAudit`] is the engine-side
//! shape of that record: the request, the resulting quote with its cost
//! breakdown, an id, and a timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::QuoteResult;
use crate::quote::Quote;
use crate::request::QuoteRequest;

/// A reproducible record of one quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteAudit {
    /// Unique id for this quote event
    pub id: Uuid,

    /// When the quote was computed
    pub created_at: DateTime<Utc>,

    /// The raw request as submitted
    pub request: QuoteRequest,

    /// The result, including the itemized cost terms
    pub quote: Quote,
}

impl QuoteAudit {
    /// Record a freshly computed quote.
    pub fn new(request: QuoteRequest, quote: Quote) -> Self {
        QuoteAudit {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            request,
            quote,
        }
    }

    /// Serialize for storage in a variant metafield.
    pub fn to_json(&self) -> QuoteResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pretty-printed form for logs and the CLI.
    pub fn to_json_pretty(&self) -> QuoteResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PricingConfig;
    use crate::request::calculate_price_and_weight;

    fn test_audit() -> QuoteAudit {
        let request = QuoteRequest {
            form_type: "Sheet".to_string(),
            thickness: "2".to_string(),
            density: 1.2,
            length_mm: Some(500.0),
            width_mm: Some(500.0),
            precision: "Normal (±2mm)".to_string(),
            quantity: 1,
            unit_price: 10.0,
            ..QuoteRequest::default()
        };
        let quote = calculate_price_and_weight(&request, &PricingConfig::default());
        QuoteAudit::new(request, quote)
    }

    #[test]
    fn test_audit_round_trip() {
        let audit = test_audit();
        let json = audit.to_json().unwrap();
        let parsed: QuoteAudit = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, audit.id);
        assert_eq!(parsed.quote.price, "18.50");
        assert_eq!(parsed.request.form_type, "Sheet");
    }

    #[test]
    fn test_audit_carries_breakdown() {
        let audit = test_audit();
        let json = audit.to_json().unwrap();
        assert!(json.contains("\"breakdown\""));
        assert!(json.contains("\"shipping\""));
    }

    #[test]
    fn test_fresh_ids_differ() {
        let a = test_audit();
        let b = test_audit();
        assert_ne!(a.id, b.id);
    }
}
