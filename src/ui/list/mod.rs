//! The restaurant list: owns the collection, the filters and edit mode.

pub mod edit;
pub mod filter;

mod dialog;
mod intent;
mod reducer;
mod state;
mod view;

pub use dialog::render_edit_dialog;
pub use edit::{EditField, EditForm, EditMode};
pub use filter::{FilterCriteria, Selection, DEFAULT_MIN_RATING};
pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::{ListState, LoadState};
pub use view::{render_list, LOADING_TEXT};
