mod home;
mod input;
mod study;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use input::InputView;
pub use study::{StudyTab, StudyView};
