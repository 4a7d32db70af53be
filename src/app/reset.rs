//! Reset confirmation flow.

/// Confirmation dialog shown while a reset is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    /// Dialog heading
    pub title: &'static str,
    /// Question shown to the user
    pub message: &'static str,
    /// Label of the button that discards the request
    pub cancel_label: &'static str,
    /// Label of the button that performs the reset
    pub confirm_label: &'static str,
}

impl ConfirmDialog {
    /// The reset confirmation.
    #[must_use]
    pub const fn reset() -> Self {
        Self {
            title: "Confirm Reset",
            message: "Are you sure you want to reset to the default configuration? \
                      All your changes will be lost.",
            cancel_label: "Cancel",
            confirm_label: "Reset",
        }
    }
}

/// How a pending confirmation was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// User chose Reset
    Confirmed,
    /// User chose Cancel or dismissed the dialog
    Cancelled,
}

/// Where the flow currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResetPhase {
    /// Nothing pending
    #[default]
    Idle,
    /// Waiting for the user to answer the dialog
    ConfirmPending(ConfirmDialog),
}

/// Reset control state: the confirmation phase plus the busy label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetFlow {
    phase: ResetPhase,
    busy: bool,
}

impl ResetFlow {
    /// Label of the control while idle.
    pub const IDLE_LABEL: &'static str = "Reset to Default";
    /// Label of the control while a reset settles.
    pub const BUSY_LABEL: &'static str = "Resetting...";

    /// Creates an idle flow.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the confirmation dialog.
    ///
    /// Returns `false` and changes nothing when a confirmation is already
    /// pending or the control is busy.
    pub fn request(&mut self) -> bool {
        if self.is_pending() || self.busy {
            return false;
        }
        self.phase = ResetPhase::ConfirmPending(ConfirmDialog::reset());
        true
    }

    /// Tears the dialog down and reports the outcome.
    ///
    /// This is the only way out of `ConfirmPending`. Returns `None` when
    /// nothing was pending, so a second resolution is a no-op.
    pub fn resolve(&mut self, outcome: ResetOutcome) -> Option<ResetOutcome> {
        match std::mem::take(&mut self.phase) {
            ResetPhase::Idle => None,
            ResetPhase::ConfirmPending(_) => {
                if outcome == ResetOutcome::Confirmed {
                    self.busy = true;
                }
                Some(outcome)
            }
        }
    }

    /// Returns the control to idle after a confirmed reset.
    pub fn settle(&mut self) {
        self.busy = false;
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> &ResetPhase {
        &self.phase
    }

    /// Open dialog, if any.
    #[must_use]
    pub const fn dialog(&self) -> Option<&ConfirmDialog> {
        match &self.phase {
            ResetPhase::ConfirmPending(dialog) => Some(dialog),
            ResetPhase::Idle => None,
        }
    }

    /// Whether a confirmation is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.phase, ResetPhase::ConfirmPending(_))
    }

    /// Whether the control shows its busy state.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Current control label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        if self.busy {
            Self::BUSY_LABEL
        } else {
            Self::IDLE_LABEL
        }
    }
}
