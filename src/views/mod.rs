pub mod dashboard;
pub mod deck;
pub mod game;
pub mod homepage;
pub mod layout;

// Re-export commonly used functions from layout
pub use layout::{page, teacher_page};
