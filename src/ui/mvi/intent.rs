//! Marker trait for intents.

/// Something that happened and that a reducer knows how to apply.
///
/// Card intents carry exactly the payload the list needs (an id, or the full
/// record for editing), so the payload shape is part of the type.
pub trait Intent: Send + 'static {}
