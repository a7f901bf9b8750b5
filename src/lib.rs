//! fxconv — a terminal EUR→USD currency converter.
//!
//! The interesting part is the converter core: a reducer that owns input
//! validation, describes its one network effect as a command, and exposes
//! the derived amounts the UI renders. The rest is presentation plumbing
//! around a crossterm event loop.

pub mod config;
pub mod converter;
pub mod mvi;
pub mod rates;
pub mod ui;
