mod divisions;
pub mod dto;
mod fixtures;
mod players;
pub mod response;
mod router;
pub mod validation;

pub use router::{AppState, create_router};
