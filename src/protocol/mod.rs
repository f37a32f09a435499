pub mod handler;
pub mod messages;

pub use handler::Frontend;
pub use messages::{ClientMessage, ServerMessage, WordInfo};
