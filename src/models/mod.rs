pub mod amount;
pub mod receipt;
pub mod result;

pub use amount::Amount;
pub use receipt::{Item, ItemRequest, Receipt, ReceiptRequest};
pub use result::{PointsResponse, ProcessResponse};
