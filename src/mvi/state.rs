//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything the view needs to render)
/// - Comparable (PartialEq for detecting changes)
/// - Default-constructible (the shell starts from the empty state)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
