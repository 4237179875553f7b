pub mod error;
pub mod score;
pub mod session;
pub mod store;
