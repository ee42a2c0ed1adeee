//! skillbridge - a terminal client for tracking learnings and applied skills
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod cli_output;
pub mod config;
pub mod error;
pub mod gateway;
pub mod input;
pub mod logging;
pub mod models;
pub mod state;
pub mod stats;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
