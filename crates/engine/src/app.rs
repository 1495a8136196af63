//! Application state and composition.

use std::sync::Arc;

use grimoire_domain::Script;

use crate::infrastructure::ports::{ClockPort, RosterRepo};
use crate::use_cases;

/// Main application state.
///
/// Holds the loaded script and all use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub roster: use_cases::RosterUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(script: Script, roster_repo: Arc<dyn RosterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        let script = Arc::new(script);

        Self {
            use_cases: UseCases {
                roster: use_cases::RosterUseCases::new(roster_repo, script, clock),
            },
        }
    }
}
