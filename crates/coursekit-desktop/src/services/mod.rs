//! Application services
//!
//! Desktop-side implementations of the attachment manager's collaborators.

mod notifier;
mod refresh;

pub use notifier::{Toast, ToastNotifier};
pub use refresh::CourseRefresher;
