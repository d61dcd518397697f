pub mod id;
pub mod memory;

pub use id::ReceiptId;
pub use memory::ReceiptStore;
