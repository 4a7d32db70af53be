//! Application layer
//!
//! The configurator controller and the value objects it drives (price
//! displays, reset and save flows, toasts, timers), plus the launch
//! orchestration used by the binary. Nothing here touches the terminal.

pub mod configurator;
pub mod displays;

/// Loading the catalog and starting the interactive board
pub mod launch;

pub mod reset;
pub mod save;
pub mod timers;
pub mod toast;

pub use configurator::{Configurator, Controls};
pub use displays::{DisplaySlot, PriceDisplay, PriceDisplays};
pub use launch::{build_configurator, launch_configurator};
pub use reset::{ConfirmDialog, ResetFlow, ResetOutcome, ResetPhase};
pub use save::{PlanSummary, SaveFlow, SavePhase};
pub use timers::{Effect, TimerQueue};
pub use toast::{Toast, ToastKind, ToastPhase};
