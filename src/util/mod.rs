pub mod unicode;
pub mod vague;

pub use vague::{vague_datetime, vague_duration};
