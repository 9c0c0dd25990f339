// libs/payment-cell/src/services/payment.rs
use rand::Rng;
use regex::Regex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{CardDetails, PaymentError, PaymentReceipt};

/// Mock payment collaborator. Validates card input the way a gateway would
/// reject it client-side, then optionally simulates a decline. The booking
/// flow only calls the ledger after this succeeds.
pub struct PaymentService {
    decline_rate: f64,
}

impl PaymentService {
    pub fn new(decline_rate: f64) -> Self {
        Self {
            decline_rate: decline_rate.clamp(0.0, 1.0),
        }
    }

    pub fn process(&self, amount: i64, card: &CardDetails) -> Result<PaymentReceipt, PaymentError> {
        debug!("Processing payment of {}", amount);

        self.validate_card(card)?;

        if self.decline_rate > 0.0 && rand::thread_rng().gen::<f64>() < self.decline_rate {
            return Err(PaymentError::Declined);
        }

        let receipt = PaymentReceipt {
            amount,
            reference: Uuid::new_v4().to_string(),
        };

        info!("Payment of {} processed, reference {}", amount, receipt.reference);
        Ok(receipt)
    }

    fn validate_card(&self, card: &CardDetails) -> Result<(), PaymentError> {
        let digits = card.card_number.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < 16 {
            return Err(PaymentError::InvalidCardNumber);
        }

        let expiry_format = Regex::new(r"^\d{2}/\d{2}$").expect("static regex");
        if !expiry_format.is_match(&card.expiry) {
            return Err(PaymentError::InvalidExpiry);
        }

        if card.cvv.len() < 3 || !card.cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(PaymentError::InvalidCvv);
        }

        Ok(())
    }
}

impl Default for PaymentService {
    fn default() -> Self {
        Self::new(0.0)
    }
}
