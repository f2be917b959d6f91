/// Marker trait for UI state values.
///
/// Cloneable so the view can snapshot it, comparable so tests can assert on
/// whole states, and defaultable so a reducer can take ownership with
/// `std::mem::take`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
