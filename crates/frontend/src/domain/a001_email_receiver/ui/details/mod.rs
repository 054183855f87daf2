//! Email receiver edit dialog
//!
//! - view_model.rs: form state, validation and save command
//! - view.rs: `WorkflowEmailDialog` component

mod view;
mod view_model;

pub use view::WorkflowEmailDialog;
pub use view_model::EmailReceiverDetailsViewModel;
