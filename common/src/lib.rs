pub mod errors;
mod models;
pub mod payloads;
pub mod timestamp;

pub use models::{Message, NewMessage};
