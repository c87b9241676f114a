//! NPM Download Statistics Proof Generator
//!

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod errors;
pub mod planner;
pub mod registry;
pub mod render;
pub mod report;
pub mod types;
pub mod verify;
