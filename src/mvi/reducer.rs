//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents and may request side effects.
///
/// The reducer is the only place where state transitions happen. It must
/// not perform effects itself: anything it needs done in the outside world
/// is returned as a `Command` value for an effect runner to execute.
/// Takes `&self` so a reducer can carry immutable configuration.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The effect description this reducer can emit.
    type Command;

    /// Process an intent, returning the new state and zero or one commands.
    fn reduce(
        &self,
        state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Option<Self::Command>);
}
