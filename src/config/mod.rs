//! Configuration for budgetbot
//!
//! Settings are sourced from environment variables (optionally via a `.env`
//! file loaded by the binary) and validated up front.

pub mod settings;

pub use settings::Settings;
