pub mod handlers;
pub mod messages;
pub mod server;

pub use server::*;
