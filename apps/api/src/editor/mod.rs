// CV document editor: ordered-list primitives, per-section editors,
// the document controller and the JSON round-trip view.
// Everything here is synchronous and side-effect free apart from the
// controller's own state.

pub mod basics;
pub mod controller;
pub mod education;
pub mod json_view;
pub mod languages;
pub mod list_ops;
pub mod panels;
pub mod portfolio;
pub mod section;
pub mod skills;
pub mod work;

pub use controller::DocumentController;
pub use json_view::{JsonView, JsonViewError, JsonViewState};
pub use section::{EditError, SectionEditor};
