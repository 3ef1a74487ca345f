//! Course refresh trigger.

use dioxus::prelude::*;

use coursekit_core::notice::Refresher;

use crate::state::AppState;

/// [`Refresher`] that bumps the app's refresh version; the course loader in
/// `App` re-fetches whenever it changes.
#[derive(Clone, Copy)]
pub struct CourseRefresher {
    version: Signal<u64>,
}

impl CourseRefresher {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            version: state.refresh_version,
        }
    }
}

impl Refresher for CourseRefresher {
    fn refresh(&self) {
        let mut version = self.version;
        version.set(version() + 1);
        tracing::debug!("Course refresh requested");
    }
}
