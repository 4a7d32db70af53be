//! The configurator controller.
//!
//! Owns every piece of mutable state: the board, the live configuration,
//! the price displays, the reset and save flows, toasts and pending timers.
//! Every operation takes the current `Instant` so that time only advances
//! when the caller says so.

use std::time::Instant;
use uuid::Uuid;

use super::displays::{DisplaySlot, PriceDisplays};
use super::reset::{ResetFlow, ResetOutcome};
use super::save::{PlanSummary, SaveFlow};
use super::timers::{Effect, TimerQueue};
use super::toast::{Toast, ToastKind};
use crate::board::{Board, CardLocation, DragSession, DropEvent};
use crate::config::{TimingConfig, UiConfig};
use crate::engine::{self, PricingEngine};
use crate::models::{Configuration, Money, PlanCatalog, Tier};

/// Which optional controls and display locations exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Footer payment box under each column
    pub footer_totals: bool,
    /// Save control (also enables the summary displays)
    pub save: bool,
    /// Reset control
    pub reset: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            footer_totals: true,
            save: true,
            reset: true,
        }
    }
}

impl From<&UiConfig> for Controls {
    fn from(ui: &UiConfig) -> Self {
        Self {
            footer_totals: ui.show_footer_totals,
            save: ui.show_save_button,
            reset: ui.show_reset_button,
        }
    }
}

/// Interactive pricing configurator state.
#[derive(Debug)]
pub struct Configurator {
    catalog: PlanCatalog,
    board: Board,
    live: Configuration,
    displays: PriceDisplays,
    reset: Option<ResetFlow>,
    save: Option<SaveFlow>,
    toasts: Vec<Toast>,
    next_toast_id: u64,
    timers: TimerQueue,
    timing: TimingConfig,
}

impl Configurator {
    /// Creates a configurator showing the catalog's default plan.
    #[must_use]
    pub fn new(catalog: PlanCatalog, controls: Controls, timing: TimingConfig) -> Self {
        let board = Board::from_configuration(catalog.default_plan(), &catalog);
        let live = catalog.default_plan().clone();
        let mut configurator = Self {
            catalog,
            board,
            live,
            displays: PriceDisplays::new(controls.footer_totals, controls.save),
            reset: controls.reset.then(ResetFlow::new),
            save: controls.save.then(SaveFlow::new),
            toasts: Vec::new(),
            next_toast_id: 1,
            timers: TimerQueue::new(),
            timing,
        };
        configurator.render_quietly();
        tracing::info!(
            cards = configurator.board.card_count(),
            base = %configurator.catalog.base_payment(),
            "configurator ready"
        );
        configurator
    }

    /// Feature catalog.
    #[must_use]
    pub const fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    /// Current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Live configuration as of the last rebuild.
    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        &self.live
    }

    /// Price display locations.
    #[must_use]
    pub const fn displays(&self) -> &PriceDisplays {
        &self.displays
    }

    /// Reset control, if present.
    #[must_use]
    pub const fn reset_flow(&self) -> Option<&ResetFlow> {
        self.reset.as_ref()
    }

    /// Save control, if present.
    #[must_use]
    pub const fn save_flow(&self) -> Option<&SaveFlow> {
        self.save.as_ref()
    }

    /// Visible toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Effect delays in use.
    #[must_use]
    pub const fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// When the next pending timer is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_due()
    }

    // ------------------------------------------------------------------
    // Drops
    // ------------------------------------------------------------------

    /// Completes a drag session on the board and processes the drop.
    ///
    /// Returns `None` when the lifted card no longer exists.
    pub fn finish_drag(&mut self, session: DragSession, now: Instant) -> Option<DropEvent> {
        let event = session.finish(&mut self.board)?;
        self.handle_drop(event, now);
        Some(event)
    }

    /// Moves a card and processes the drop, as a completed drag would.
    pub fn move_card(
        &mut self,
        from: CardLocation,
        to: CardLocation,
        now: Instant,
    ) -> Option<DropEvent> {
        let event = self.board.move_card(from, to)?;
        self.handle_drop(event, now);
        Some(event)
    }

    /// Reacts to a completed drop: re-marks and highlights the card, then
    /// rebuilds the configuration and refreshes every payment.
    pub fn handle_drop(&mut self, event: DropEvent, now: Instant) {
        if let Some(card) = self.board.card_mut(event.card) {
            card.marker = event.to;
            card.highlighted = true;
            self.timers.schedule(
                now,
                self.timing.card_highlight(),
                Effect::ClearCardHighlight(event.card),
            );
        }
        tracing::debug!(from = %event.from, to = %event.to, index = event.index, "card dropped");

        self.rebuild_configuration();
        self.update_payments(now);
    }

    /// Appends a card to a zone without consulting the catalog, then
    /// rebuilds and reprices. Unknown features price at zero.
    pub fn place_card(&mut self, tier: Tier, feature: &str, now: Instant) -> Uuid {
        let id = self.board.place(tier, feature);
        if !self.catalog.contains(feature) {
            tracing::warn!(%tier, feature, "placed feature is not in the catalog");
        }
        self.rebuild_configuration();
        self.update_payments(now);
        id
    }

    // ------------------------------------------------------------------
    // Pricing
    // ------------------------------------------------------------------

    /// Replaces the live configuration with a fresh scan of the board.
    pub fn rebuild_configuration(&mut self) -> &Configuration {
        self.live = engine::rebuild_configuration(&self.board);
        &self.live
    }

    /// Payment of a tier under the live configuration.
    #[must_use]
    pub fn price(&self, tier: Tier) -> Money {
        PricingEngine::new(&self.catalog).price(&self.live, tier)
    }

    /// Payment of a tier formatted as currency.
    #[must_use]
    pub fn price_string(&self, tier: Tier) -> String {
        self.price(tier).to_string()
    }

    /// Writes every tier's payment to every present display location and
    /// emphasizes each written location for a while.
    pub fn update_payments(&mut self, now: Instant) {
        for tier in Tier::ALL {
            let text = self.price_string(tier);
            for slot in self.displays.write(tier, &text) {
                self.timers.schedule(
                    now,
                    self.timing.price_emphasis(),
                    Effect::ClearPriceEmphasis(tier, slot),
                );
            }
        }
    }

    fn render_quietly(&mut self) {
        for tier in Tier::ALL {
            let text = self.price_string(tier);
            for slot in DisplaySlot::ALL {
                self.displays.write_slot(tier, slot, &text, false);
            }
        }
    }

    // ------------------------------------------------------------------
    // Reset
    // ------------------------------------------------------------------

    /// Opens the reset confirmation. Returns `false` when the reset control
    /// is absent, busy, or already waiting for an answer.
    pub fn request_reset(&mut self) -> bool {
        let opened = self.reset.as_mut().is_some_and(ResetFlow::request);
        if opened {
            tracing::debug!("reset confirmation requested");
        }
        opened
    }

    /// Answers the pending confirmation with Reset.
    pub fn confirm_reset(&mut self, now: Instant) -> bool {
        self.resolve_reset(ResetOutcome::Confirmed, now)
    }

    /// Answers the pending confirmation with Cancel.
    pub fn cancel_reset(&mut self, now: Instant) -> bool {
        self.resolve_reset(ResetOutcome::Cancelled, now)
    }

    fn resolve_reset(&mut self, outcome: ResetOutcome, now: Instant) -> bool {
        let Some(resolved) = self.reset.as_mut().and_then(|flow| flow.resolve(outcome)) else {
            return false;
        };
        match resolved {
            ResetOutcome::Confirmed => {
                self.reset_to_default(now);
                self.show_toast(
                    "Configuration Reset",
                    "Your protection plan has been reset to default.",
                    ToastKind::Info,
                    now,
                );
                self.timers
                    .schedule(now, self.timing.reset_settle(), Effect::SettleReset);
            }
            ResetOutcome::Cancelled => tracing::debug!("reset cancelled"),
        }
        true
    }

    /// Restores the default plan on the board and in the live state, then
    /// reprices. Features without a catalog entry get no card.
    pub fn reset_to_default(&mut self, now: Instant) {
        self.board.clear();
        self.board.populate(self.catalog.default_plan(), &self.catalog);
        self.live = self.catalog.default_plan().clone();
        self.update_payments(now);
        tracing::info!("configuration reset to default");
    }

    // ------------------------------------------------------------------
    // Save
    // ------------------------------------------------------------------

    /// Starts the save flow. Returns `false` when the save control is
    /// absent or already saving.
    pub fn request_save(&mut self, now: Instant) -> bool {
        let started = self.save.as_mut().is_some_and(SaveFlow::request);
        if started {
            self.timers
                .schedule(now, self.timing.save_delay(), Effect::FinishSave);
            tracing::debug!("save requested");
        }
        started
    }

    /// Closes the summary dialog.
    pub fn dismiss_summary(&mut self) -> bool {
        self.save.as_mut().is_some_and(SaveFlow::dismiss)
    }

    /// Summary of the live configuration.
    #[must_use]
    pub fn summary(&self) -> PlanSummary {
        PlanSummary::new(&self.live, &self.catalog)
    }

    fn finish_save(&mut self, now: Instant) {
        let summary = self.summary();
        let Some(flow) = self.save.as_mut() else {
            return;
        };
        if !flow.finish(summary) {
            return;
        }
        for tier in Tier::ALL {
            let text = self.price_string(tier);
            if self.displays.write_slot(tier, DisplaySlot::Summary, &text, true) {
                self.timers.schedule(
                    now,
                    self.timing.price_emphasis(),
                    Effect::ClearPriceEmphasis(tier, DisplaySlot::Summary),
                );
            }
        }
        tracing::info!("configuration summary ready");
    }

    // ------------------------------------------------------------------
    // Toasts
    // ------------------------------------------------------------------

    /// Shows a toast and schedules its fade. Returns its ID.
    pub fn show_toast(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: ToastKind,
        now: Instant,
    ) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast::new(id, title, message, kind));
        self.timers
            .schedule(now, self.timing.toast(), Effect::FadeToast(id));
        id
    }

    /// Starts fading a toast now. Returns `false` if it is gone or already
    /// fading.
    pub fn close_toast(&mut self, id: u64, now: Instant) -> bool {
        let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if !toast.dismiss() {
            return false;
        }
        self.timers
            .schedule(now, self.timing.toast_fade(), Effect::RemoveToast(id));
        true
    }

    /// Closes the newest toast that is not already fading.
    pub fn close_latest_toast(&mut self, now: Instant) -> bool {
        let latest = self
            .toasts
            .iter()
            .rev()
            .find(|t| !t.is_fading())
            .map(|t| t.id);
        latest.is_some_and(|id| self.close_toast(id, now))
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    /// Applies every effect that is due. Returns `true` if anything fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self.timers.drain_due(now);
        let fired = !due.is_empty();
        for effect in due {
            self.apply(effect, now);
        }
        fired
    }

    fn apply(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::ClearCardHighlight(id) => {
                if let Some(card) = self.board.card_mut(id) {
                    card.highlighted = false;
                }
            }
            Effect::ClearPriceEmphasis(tier, slot) => self.displays.clear_emphasis(tier, slot),
            Effect::FadeToast(id) => {
                self.close_toast(id, now);
            }
            Effect::RemoveToast(id) => self.toasts.retain(|t| t.id != id),
            Effect::FinishSave => self.finish_save(now),
            Effect::SettleReset => {
                if let Some(flow) = self.reset.as_mut() {
                    flow.settle();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn configurator() -> (Configurator, Instant) {
        let catalog = PlanCatalog::builtin().unwrap();
        (
            Configurator::new(catalog, Controls::default(), TimingConfig::default()),
            Instant::now(),
        )
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_initial_displays_are_quiet() {
        let (app, _) = configurator();
        let header = app.displays().get(Tier::Bronze, DisplaySlot::Header).unwrap();
        assert_eq!(header.text, "$551.67");
        assert!(!header.emphasized);
        assert!(app.next_deadline().is_none());
    }

    #[test]
    fn test_drop_marks_highlights_and_reprices() {
        let (mut app, now) = configurator();
        let from = app.board().find_feature(Tier::Silver, "glasscoat").unwrap();
        let event = app
            .move_card(from, CardLocation::new(Tier::Bronze, 2), now)
            .unwrap();

        let card = app.board().card(event.card).unwrap();
        assert_eq!(card.marker, Tier::Bronze);
        assert!(card.highlighted);
        assert_eq!(app.price_string(Tier::Bronze), "$563.67");
        assert_eq!(app.price_string(Tier::Silver), "$551.67");
        assert!(app.displays().get(Tier::Bronze, DisplaySlot::Footer).unwrap().emphasized);

        app.tick(now + ms(700));
        assert!(!app.displays().get(Tier::Bronze, DisplaySlot::Footer).unwrap().emphasized);
        assert!(app.board().card(event.card).unwrap().highlighted);

        app.tick(now + ms(1000));
        assert!(!app.board().card(event.card).unwrap().highlighted);
    }

    #[test]
    fn test_reset_flow() {
        let (mut app, now) = configurator();
        app.move_card(
            CardLocation::new(Tier::Platinum, 0),
            CardLocation::new(Tier::Bronze, 0),
            now,
        );

        assert!(app.request_reset());
        assert!(!app.request_reset());
        assert!(app.confirm_reset(now));
        assert!(!app.confirm_reset(now));

        assert_eq!(app.configuration(), app.catalog().default_plan());
        assert_eq!(app.price_string(Tier::Bronze), "$551.67");
        assert_eq!(app.reset_flow().unwrap().label(), "Resetting...");
        assert_eq!(app.toasts().len(), 1);
        assert_eq!(app.toasts()[0].kind, ToastKind::Info);

        app.tick(now + ms(600));
        assert_eq!(app.reset_flow().unwrap().label(), "Reset to Default");
    }

    #[test]
    fn test_cancel_reset_changes_nothing() {
        let (mut app, now) = configurator();
        app.move_card(
            CardLocation::new(Tier::Gold, 0),
            CardLocation::new(Tier::Bronze, 0),
            now,
        );
        let before = app.configuration().clone();

        app.request_reset();
        assert!(app.cancel_reset(now));
        assert_eq!(app.configuration(), &before);
        assert!(app.toasts().is_empty());
    }

    #[test]
    fn test_save_flow_shows_summary() {
        let (mut app, now) = configurator();
        assert!(app.request_save(now));
        assert!(!app.request_save(now));
        assert_eq!(app.save_flow().unwrap().label(), "Saving...");

        app.tick(now + ms(599));
        assert!(app.save_flow().unwrap().summary().is_none());

        app.tick(now + ms(600));
        let flow = app.save_flow().unwrap();
        assert_eq!(flow.label(), "Save Configuration");
        assert_eq!(flow.summary().unwrap().tiers[3].display, "$551.67");
        assert!(app.displays().get(Tier::Gold, DisplaySlot::Summary).unwrap().emphasized);

        assert!(app.dismiss_summary());
        assert!(!app.dismiss_summary());
    }

    #[test]
    fn test_absent_controls_disable_flows() {
        let catalog = PlanCatalog::builtin().unwrap();
        let controls = Controls {
            footer_totals: false,
            save: false,
            reset: false,
        };
        let mut app = Configurator::new(catalog, controls, TimingConfig::default());
        let now = Instant::now();

        assert!(!app.request_reset());
        assert!(!app.confirm_reset(now));
        assert!(!app.request_save(now));
        assert!(!app.displays().has(DisplaySlot::Footer));
        assert!(!app.displays().has(DisplaySlot::Summary));
        assert!(app.displays().has(DisplaySlot::Header));
    }

    #[test]
    fn test_toast_lifecycle() {
        let (mut app, now) = configurator();
        let id = app.show_toast("Copied", "Summary copied", ToastKind::Success, now);

        app.tick(now + ms(3000));
        assert!(app.toasts()[0].is_fading());
        app.tick(now + ms(3300));
        assert!(app.toasts().is_empty());
        assert!(!app.close_toast(id, now));
    }

    #[test]
    fn test_manual_close_starts_fade() {
        let (mut app, now) = configurator();
        let id = app.show_toast("Heads up", "msg", ToastKind::Warning, now);
        assert!(app.close_latest_toast(now));
        assert!(!app.close_toast(id, now));

        app.tick(now + ms(300));
        assert!(app.toasts().is_empty());

        // the original fade timer fires later against a removed toast
        app.tick(now + ms(3000));
        assert!(app.toasts().is_empty());
    }

    #[test]
    fn test_place_unknown_feature_keeps_price() {
        let (mut app, now) = configurator();
        app.place_card(Tier::Silver, "ghost", now);
        assert!(app.configuration().contains(Tier::Silver, "ghost"));
        assert_eq!(app.price_string(Tier::Silver), "$563.67");
    }
}
