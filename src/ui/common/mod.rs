//! Common reusable UI components shared across pages.

pub mod message;
pub mod spinner;

pub use message::{ErrorMessage, ErrorMessageStatic, SuccessMessage};
pub use spinner::{InlineSpinner, LoadingSpinner, Spinner, SpinnerSize};
