pub mod card;
pub mod color;
pub mod config;
pub mod deck;
pub mod observation;
pub mod rank;
