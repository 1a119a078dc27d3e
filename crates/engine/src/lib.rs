//! Charforge Engine library.
//!
//! The generator backend and the favorites store behind a small JSON API.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration over ports and domain rules
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
