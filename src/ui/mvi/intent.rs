/// Marker trait for intents.
///
/// Intents are either user actions (retry) or outcomes reported by background
/// work (a fetch finished). Reducers turn them into new states.
pub trait Intent: Send + 'static {}
