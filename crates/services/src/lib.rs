#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod library;
pub mod resource_service;
pub mod ticker;
pub mod timer_service;

pub use study_core::Clock;

pub use app_services::AppServices;
pub use error::LibraryError;
pub use library::StudyLibrary;
pub use resource_service::{AcceptedResource, ResourceIntakeService};
pub use ticker::TokioTimeSource;
pub use timer_service::{StudyTimer, TimerSnapshot};
