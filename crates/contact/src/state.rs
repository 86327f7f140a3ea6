use strum::{AsRefStr, Display};

/// Lifecycle of one contact form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Uninitialized,
    Initializing,
    Ready,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Settled outcome of the last submission.
    pub fn is_outcome(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}
