//! Transient toast notifications.

/// Visual kind of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Completed action
    Success,
    /// Neutral information
    Info,
    /// Something worth a second look
    Warning,
    /// Failed action
    Error,
}

impl ToastKind {
    /// Short icon shown before the title.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Info => "i",
            Self::Warning => "!",
            Self::Error => "✗",
        }
    }
}

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Fully visible
    Shown,
    /// Fading out; removed when the fade timer fires
    Fading,
}

/// A notification that shows, fades and is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Identifier used by timers and manual close
    pub id: u64,
    /// Heading
    pub title: String,
    /// Body text
    pub message: String,
    /// Kind
    pub kind: ToastKind,
    /// Current phase
    pub phase: ToastPhase,
}

impl Toast {
    /// Creates a visible toast.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>, message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id,
            title: title.into(),
            message: message.into(),
            kind,
            phase: ToastPhase::Shown,
        }
    }

    /// Starts fading. Returns `false` if it was already fading.
    pub fn dismiss(&mut self) -> bool {
        if self.phase == ToastPhase::Fading {
            return false;
        }
        self.phase = ToastPhase::Fading;
        true
    }

    /// Whether the toast is fading out.
    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.phase == ToastPhase::Fading
    }
}
