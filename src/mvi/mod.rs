//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow with explicit side effects.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑           │                  │
//!    │           └──→ Command ──→ Effect runner
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of application state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Command**: Description of a side effect the reducer needs performed;
//!   executed outside the reducer, its result re-enters as a new intent

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
