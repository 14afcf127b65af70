use std::sync::Arc;

use services::{Clock, ResourceIntakeService, StudyLibrary, StudyTimer};

/// What the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn library(&self) -> Arc<StudyLibrary>;
    fn resource_intake(&self) -> Arc<ResourceIntakeService>;
    fn timer_duration_secs(&self) -> u32;

    /// A fresh timer bound to the app's tick source.
    fn new_timer(&self) -> StudyTimer;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    library: Arc<StudyLibrary>,
    resource_intake: Arc<ResourceIntakeService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app: Arc::clone(app),
            library: app.library(),
            resource_intake: app.resource_intake(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.app.clock()
    }

    #[must_use]
    pub fn library(&self) -> Arc<StudyLibrary> {
        Arc::clone(&self.library)
    }

    #[must_use]
    pub fn resource_intake(&self) -> Arc<ResourceIntakeService> {
        Arc::clone(&self.resource_intake)
    }

    #[must_use]
    pub fn timer_duration_secs(&self) -> u32 {
        self.app.timer_duration_secs()
    }

    #[must_use]
    pub fn new_timer(&self) -> StudyTimer {
        self.app.new_timer()
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
