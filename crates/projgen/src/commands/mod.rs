pub mod config;
pub mod defaults;
pub mod new;
pub mod open;
