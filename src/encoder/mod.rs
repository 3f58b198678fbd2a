//! Bit-level token encoder and its underlying bit writer.

pub mod bitwriter;
pub mod encode;

pub use bitwriter::BitWriter;
pub use encode::{encode, HEADER_SIZE};
