pub mod ai;
pub mod dashboard;
pub mod deck;
pub mod game;
pub mod homepage;
