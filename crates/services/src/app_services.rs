use std::path::Path;
use std::sync::Arc;

use study_core::{Clock, DEFAULT_DURATION_SECS, TimeSource};

use crate::error::LibraryError;
use crate::library::StudyLibrary;
use crate::resource_service::ResourceIntakeService;
use crate::timer_service::StudyTimer;

/// Assembles app-facing services from startup configuration.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    library: Arc<StudyLibrary>,
    time_source: Arc<dyn TimeSource>,
    resource_intake: Arc<ResourceIntakeService>,
    timer_duration_secs: u32,
}

impl AppServices {
    #[must_use]
    pub fn new(clock: Clock, library: StudyLibrary, time_source: Arc<dyn TimeSource>) -> Self {
        Self {
            clock,
            library: Arc::new(library),
            time_source,
            resource_intake: Arc::new(ResourceIntakeService::new(clock)),
            timer_duration_secs: DEFAULT_DURATION_SECS,
        }
    }

    /// Build services, reading the deck file when one is given.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError` if the deck file cannot be loaded.
    pub fn load(
        clock: Clock,
        deck_path: Option<&Path>,
        time_source: Arc<dyn TimeSource>,
    ) -> Result<Self, LibraryError> {
        let library = StudyLibrary::load(deck_path, clock)?;
        Ok(Self::new(clock, library, time_source))
    }

    #[must_use]
    pub fn with_timer_duration(mut self, secs: u32) -> Self {
        self.timer_duration_secs = secs;
        self
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn library(&self) -> Arc<StudyLibrary> {
        Arc::clone(&self.library)
    }

    #[must_use]
    pub fn time_source(&self) -> Arc<dyn TimeSource> {
        Arc::clone(&self.time_source)
    }

    #[must_use]
    pub fn resource_intake(&self) -> Arc<ResourceIntakeService> {
        Arc::clone(&self.resource_intake)
    }

    #[must_use]
    pub fn timer_duration_secs(&self) -> u32 {
        self.timer_duration_secs
    }

    /// A fresh timer on the shared time source, loaded with the configured duration.
    #[must_use]
    pub fn new_timer(&self) -> StudyTimer {
        StudyTimer::new(self.time_source(), self.timer_duration_secs)
    }
}
