pub mod receipts;
pub mod scoring;

pub use receipts::ReceiptService;
pub use scoring::{score, ScoreBreakdown};
