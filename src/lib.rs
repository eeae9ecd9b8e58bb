pub mod cli;
pub mod commands;
pub mod marker;
pub mod utils;
