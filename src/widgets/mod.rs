// Reusable UI widgets

pub mod logo;
pub mod text_input;
pub mod toast;

pub use logo::{CondorLogo, Size};
pub use text_input::{TextInputWidget, TextInputWidgetExt};
pub use toast::{Toast, ToastManager, ToastVariant, ToastWidget};
