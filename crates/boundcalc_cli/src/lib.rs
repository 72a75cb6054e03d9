pub mod commands;
pub mod logger;
pub mod utils;
