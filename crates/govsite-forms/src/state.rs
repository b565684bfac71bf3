//! Observable form state.

use serde::Serialize;

/// Idle → Submitting → Success → Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl FormPhase {
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
        }
    }
}

/// Observable state of a simulated form.
///
/// `submission` holds the captured payload from submit until the reset; the
/// success view shows it back as the confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState<P> {
    pub phase: FormPhase,
    pub submission: Option<P>,
}

impl<P> FormState<P> {
    pub fn is_idle(&self) -> bool {
        self.phase == FormPhase::Idle
    }

    /// The payload to show as confirmation, only while in `Success`.
    pub fn confirmation(&self) -> Option<&P> {
        match self.phase {
            FormPhase::Success => self.submission.as_ref(),
            _ => None,
        }
    }
}

impl<P> Default for FormState<P> {
    fn default() -> Self {
        Self {
            phase: FormPhase::Idle,
            submission: None,
        }
    }
}
