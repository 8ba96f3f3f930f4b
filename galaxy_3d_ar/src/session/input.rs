/// Input events delivered by the platform input subsystem.
///
/// Each event is edge-triggered: one event per physical user action.

/// Discrete controller event, tagged with the controller index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary action completed (tap, trigger press)
    Select { controller: usize },
    /// Primary action started
    SelectStart { controller: usize },
    /// Primary action ended or was cancelled
    SelectEnd { controller: usize },
    /// Secondary (grip) action completed
    Squeeze { controller: usize },
}

impl InputEvent {
    /// Index of the controller that produced the event
    pub fn controller(&self) -> usize {
        match *self {
            InputEvent::Select { controller }
            | InputEvent::SelectStart { controller }
            | InputEvent::SelectEnd { controller }
            | InputEvent::Squeeze { controller } => controller,
        }
    }

    /// True for a completed select from `controller`
    pub fn is_select_from(&self, controller: usize) -> bool {
        matches!(*self, InputEvent::Select { controller: c } if c == controller)
    }
}
