//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of UI state changes only by running an intent through a
//! reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain value holding everything the view needs
//! - **Intent**: a user action (key press on a card, filter change) or a
//!   system event (fetch finished)
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
