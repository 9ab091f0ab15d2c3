//! Pilot: programmatic interaction with a headless App.
//!
//! The `Pilot` wraps an [`App`] in headless mode with a virtual clock. It
//! simulates mouse presses, drags, releases and key presses, advances time
//! to fire repeat ticks, and renders the screen to text.

use std::time::{Duration, Instant};

use crate::app::{App, AppConfig};
use crate::config::StepperConfig;
use crate::event::input::{InputEvent, Key, KeyEvent, MouseAction, MouseBtn, MouseEvent};
use crate::geometry::Region;
use crate::widget::Widget;
use crate::widgets::VerticalStepper;

/// A headless app driver for testing.
///
/// Time only moves when [`advance`](Self::advance) is called, so repeat
/// behaviour is fully deterministic.
///
/// # Examples
///
/// ```ignore
/// use gilt_stepper::testing::Pilot;
///
/// let mut pilot = Pilot::new(StepperConfig::new().with_auto_repeat(true));
/// pilot.press(1, 0);
/// pilot.advance(Duration::from_secs(1));
/// pilot.release(1, 0);
/// assert_eq!(pilot.value(), 3.0);
/// ```
pub struct Pilot {
    app: App,
    now: Instant,
}

impl Pilot {
    /// A pilot hosting a stepper built from `config` at the default region.
    pub fn new(config: StepperConfig) -> Self {
        Self::with_config(AppConfig::new().with_stepper(config))
    }

    /// A pilot for a full app config.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            app: App::new_headless(config),
            now: Instant::now(),
        }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Left-button press at (x, y).
    pub fn press(&mut self, x: u16, y: u16) {
        self.press_with(MouseBtn::Left, x, y);
    }

    /// Press with a specific button; each button is a separate touch.
    pub fn press_with(&mut self, button: MouseBtn, x: u16, y: u16) {
        self.mouse(MouseAction::Down(button), x, y);
    }

    /// Left-button drag to (x, y).
    pub fn drag(&mut self, x: u16, y: u16) {
        self.mouse(MouseAction::Drag(MouseBtn::Left), x, y);
    }

    /// Left-button release at (x, y).
    pub fn release(&mut self, x: u16, y: u16) {
        self.release_with(MouseBtn::Left, x, y);
    }

    pub fn release_with(&mut self, button: MouseBtn, x: u16, y: u16) {
        self.mouse(MouseAction::Up(button), x, y);
    }

    /// Simulate a key press with no modifiers.
    pub fn press_key(&mut self, key: Key) {
        self.input(InputEvent::Key(KeyEvent::plain(key)));
    }

    /// Deliver any input event at the current virtual time.
    pub fn input(&mut self, event: InputEvent) {
        self.app.handle_input(event, self.now);
    }

    fn mouse(&mut self, kind: MouseAction, x: u16, y: u16) {
        self.input(InputEvent::Mouse(MouseEvent::new(kind, x, y)));
    }

    // ── Time ─────────────────────────────────────────────────────────

    /// Move the virtual clock forward and fire any repeat ticks now due.
    ///
    /// Returns the number of committed steps.
    pub fn advance(&mut self, by: Duration) -> usize {
        self.now += by;
        self.app.on_timer(self.now)
    }

    /// The current virtual time.
    pub fn now(&self) -> Instant {
        self.now
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn stepper(&self) -> &VerticalStepper {
        &self.app.stepper
    }

    pub fn stepper_mut(&mut self) -> &mut VerticalStepper {
        &mut self.app.stepper
    }

    pub fn value(&self) -> f64 {
        self.app.stepper.value()
    }

    pub fn is_running(&self) -> bool {
        !self.app.should_quit()
    }

    /// Render the screen from the origin down to the stepper's far corner.
    pub fn render_to_text(&self) -> String {
        let region = self.app.region;
        let strips = self.app.stepper.render(region);
        super::snapshot::strips_to_string(&strips, region.right(), region.bottom())
    }

    /// The stepper's on-screen region.
    pub fn region(&self) -> Region {
        self.app.region
    }
}
