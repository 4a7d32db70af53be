//! Action handlers organized by category

/// Lifting, moving and dropping cards
pub mod cards;

/// Cursor movement between cards and columns
pub mod navigation;

/// Save and reset controls
pub mod plan;

/// Help overlay and notifications
pub mod popups;
