use assert_matches::assert_matches;

use payment_cell::models::{CardDetails, PaymentError};
use payment_cell::services::payment::PaymentService;

fn valid_card() -> CardDetails {
    CardDetails {
        card_number: "4111111111111111".to_string(),
        expiry: "12/28".to_string(),
        cvv: "123".to_string(),
    }
}

#[test]
fn valid_card_produces_a_receipt() {
    let service = PaymentService::default();

    let receipt = service.process(1500, &valid_card()).unwrap();

    assert_eq!(receipt.amount, 1500);
    assert!(!receipt.reference.is_empty());
}

#[test]
fn short_card_number_is_rejected() {
    let service = PaymentService::default();
    let card = CardDetails {
        card_number: "4111".to_string(),
        ..valid_card()
    };

    assert_matches!(service.process(100, &card), Err(PaymentError::InvalidCardNumber));
}

#[test]
fn expiry_must_be_mm_yy() {
    let service = PaymentService::default();

    for expiry in ["1228", "12-28", "12/2028", "ab/cd", ""] {
        let card = CardDetails {
            expiry: expiry.to_string(),
            ..valid_card()
        };
        assert_matches!(
            service.process(100, &card),
            Err(PaymentError::InvalidExpiry),
            "{:?} should be rejected",
            expiry
        );
    }
}

#[test]
fn cvv_needs_at_least_three_digits() {
    let service = PaymentService::default();

    for cvv in ["12", "ab3", ""] {
        let card = CardDetails {
            cvv: cvv.to_string(),
            ..valid_card()
        };
        assert_matches!(service.process(100, &card), Err(PaymentError::InvalidCvv));
    }
}

#[test]
fn full_decline_rate_always_declines() {
    let service = PaymentService::new(1.0);

    assert_matches!(service.process(100, &valid_card()), Err(PaymentError::Declined));
}

#[test]
fn zero_decline_rate_never_declines() {
    let service = PaymentService::new(0.0);

    for _ in 0..50 {
        assert!(service.process(100, &valid_card()).is_ok());
    }
}
