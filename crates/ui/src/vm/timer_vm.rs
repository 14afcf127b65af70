use services::TimerSnapshot;
use study_core::TimerPhase;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerVm {
    pub display: String,
    pub status: &'static str,
    pub toggle_label: &'static str,
    pub toggle_class: &'static str,
    pub can_toggle: bool,
}

#[must_use]
pub fn map_timer(snapshot: &TimerSnapshot) -> TimerVm {
    let (toggle_label, toggle_class) = if snapshot.running {
        ("Pause", "button outline")
    } else {
        ("Start", "button primary")
    };

    TimerVm {
        display: snapshot.display.clone(),
        status: snapshot.status,
        toggle_label,
        toggle_class,
        can_toggle: snapshot.phase != TimerPhase::Expired,
    }
}
