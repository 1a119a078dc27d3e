//! Charforge Player.
//!
//! Session state, the generator client, local and remote favorites stores,
//! sheet view-models and the plain-text renderers behind the CLI.

pub mod application;
pub mod cli;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;

pub use ui::presentation;
