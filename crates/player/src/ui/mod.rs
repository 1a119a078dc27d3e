//! Presentation layer: view-models and their plain-text renderers

pub mod presentation;
