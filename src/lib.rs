// Core infrastructure modules
pub mod core;

// Session modules
pub mod config;
pub mod input;
pub mod menu;
