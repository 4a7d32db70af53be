//! Board colors for dark and light terminals.
//!
//! `ui.theme_mode` picks the backdrop; `Auto` asks the OS once at startup.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::Tier;

/// Terminal background the palette is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    /// Light text on a dark terminal
    Dark,
    /// Dark text on a light terminal
    Light,
}

impl Backdrop {
    /// Backdrop for a configured mode.
    #[must_use]
    pub fn resolve(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::from_os(),
            ThemeMode::Dark => Self::Dark,
            ThemeMode::Light => Self::Light,
        }
    }

    fn from_os() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::Light,
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) => Self::Dark,
            Err(e) => {
                tracing::debug!(error = %e, "OS theme detection failed, using dark");
                Self::Dark
            }
        }
    }
}

/// Colors by role on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Which backdrop this palette targets
    pub backdrop: Backdrop,
    /// Borders and titles of the frame, help and info toasts
    pub chrome: Color,
    /// Cursor, key names and the lifted card
    pub focus: Color,
    /// Payments, success toasts and the summary dialog
    pub positive: Color,
    /// Error overlay and error toasts
    pub danger: Color,
    /// Reset confirmation and warning toasts
    pub caution: Color,
    /// Card titles and body text
    pub text: Color,
    /// Secondary labels ("Monthly", dialog buttons)
    pub label: Color,
    /// Card details, hints and placeholders
    pub muted: Color,
    /// Screen fill
    pub canvas: Color,
    /// Toast fill
    pub panel: Color,
    /// Unfocused zones and busy controls
    pub idle: Color,
}

const DARK: Theme = Theme {
    backdrop: Backdrop::Dark,
    chrome: Color::Cyan,
    focus: Color::Yellow,
    positive: Color::Green,
    danger: Color::Red,
    caution: Color::LightYellow,
    text: Color::White,
    label: Color::Gray,
    muted: Color::DarkGray,
    canvas: Color::Black,
    panel: Color::Rgb(28, 32, 38),
    idle: Color::Gray,
};

const LIGHT: Theme = Theme {
    backdrop: Backdrop::Light,
    chrome: Color::Blue,
    focus: Color::Rgb(176, 96, 0),
    positive: Color::Rgb(0, 120, 40),
    danger: Color::Rgb(190, 20, 20),
    caution: Color::Rgb(196, 104, 0),
    text: Color::Black,
    label: Color::Rgb(64, 64, 64),
    muted: Color::Rgb(128, 128, 128),
    canvas: Color::White,
    panel: Color::Rgb(242, 244, 247),
    idle: Color::Rgb(176, 176, 176),
};

impl Theme {
    /// Palette for a configured mode.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        Self::for_backdrop(Backdrop::resolve(mode))
    }

    /// Palette for a known backdrop.
    #[must_use]
    pub const fn for_backdrop(backdrop: Backdrop) -> Self {
        match backdrop {
            Backdrop::Dark => DARK,
            Backdrop::Light => LIGHT,
        }
    }

    /// Marker color of a tier, toned down on light backdrops.
    #[must_use]
    pub fn tier_color(&self, tier: Tier) -> Color {
        let marker = tier.marker_color();
        match self.backdrop {
            Backdrop::Dark => marker.to_ratatui_color(),
            Backdrop::Light => marker.dim(70).to_ratatui_color(),
        }
    }
}
