/// Marker trait for UI state snapshots.
///
/// `Clone` because the view and the controller each hold a copy, `PartialEq`
/// so observers can skip identical publications, `Default` for the initial
/// screen.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
