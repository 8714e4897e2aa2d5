/// Marker for UI state owned by one component.
///
/// `Default` is the state a component starts in and the value `App` swaps
/// in while a reducer runs. `PartialEq` lets tests compare whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
