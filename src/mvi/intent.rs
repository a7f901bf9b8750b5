//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, text edits)
/// - System events (completed fetches, timers)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
