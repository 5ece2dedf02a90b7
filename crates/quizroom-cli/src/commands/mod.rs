pub mod config;
pub mod play;
pub mod questions;
pub mod simulate;
