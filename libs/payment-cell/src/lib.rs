pub mod models;
pub mod services;

pub use models::{CardDetails, PaymentError, PaymentReceipt};
pub use services::payment::PaymentService;
