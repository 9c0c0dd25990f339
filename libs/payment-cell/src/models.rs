// libs/payment-cell/src/models.rs
use serde::{Deserialize, Serialize};

/// Card details submitted at checkout. Never persisted and never logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDetails {
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub amount: i64,
    pub reference: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PaymentError {
    #[error("Invalid card number")]
    InvalidCardNumber,

    #[error("Invalid expiry date. Use MM/YY format")]
    InvalidExpiry,

    #[error("Invalid CVV")]
    InvalidCvv,

    #[error("Payment declined by bank")]
    Declined,
}
