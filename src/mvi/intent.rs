//! Base trait for intents (user/session actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, submissions, taps)
/// - Session events (new round, new game)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
