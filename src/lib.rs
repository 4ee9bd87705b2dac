//! budgetbot - Conversational Telegram expense tracker
//!
//! A Telegram bot for logging expenses and pacing spending against a budget
//! period. Users send messages like `50 groceries`, pick a category from an
//! inline keyboard, and get back their remaining daily budget. Data lives in
//! a Supabase (PostgREST) backend.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Environment-based runtime settings
//! - `error`: Custom error types
//! - `models`: Core data models (users, categories, budgets, expenses)
//! - `storage`: Supabase REST storage layer
//! - `services`: Business logic (expense parsing, budget status, users)
//! - `display`: Message and money formatting
//! - `bot`: Telegram dispatcher, handlers, sessions and keyboards
//! - `health`: Liveness HTTP endpoint

pub mod bot;
pub mod config;
pub mod display;
pub mod error;
pub mod health;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BotError, BotResult};
