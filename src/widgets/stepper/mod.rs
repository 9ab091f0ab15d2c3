//! VerticalStepper: a bounded numeric input with increment/decrement zones.
//!
//! The upper half of the widget increments and the lower half decrements.
//! A press commits one step immediately. With auto-repeat on, holding the
//! press keeps stepping every `auto_repeat_interval` until the press ends or
//! the value saturates at a bound. Dragging across the middle switches the
//! direction of the held press without lifting it.
//!
//! Every committed step is reported to an optional, weakly held
//! [`StepperDelegate`] and to any closures registered with
//! [`VerticalStepper::on_value_changed`]. Programmatic assignment ([`VerticalStepper::set_value`],
//! [`VerticalStepper::set_initial_value`]) clamps silently and never notifies.
//!
//! The stepper has no clock of its own. Timer-driven steps happen when the
//! host calls [`VerticalStepper::tick`] at or after
//! [`VerticalStepper::next_repeat_deadline`].

mod delegate;
mod repeat;

pub use delegate::{StepperDelegate, ValueRecorder};
pub use repeat::RepeatTimer;

use std::any::Any;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::config::StepperConfig;
use crate::event::touch::{TouchEvent, TouchId, TouchPhase};
use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::widget::Widget;

const UP_ARROW: char = '▲';
const DOWN_ARROW: char = '▼';

// ---------------------------------------------------------------------------
// StepDirection / PressState
// ---------------------------------------------------------------------------

/// Which way a step moves the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepDirection {
    Increment,
    Decrement,
}

impl StepDirection {
    /// The zone of `region` that absolute row `y` falls in.
    ///
    /// Rows with `2 * (y - region.y) < region.height` are in the upper,
    /// incrementing half. Everything else decrements.
    pub fn at_row(region: Region, y: i32) -> Self {
        if 2 * (y - region.y) < region.height {
            StepDirection::Increment
        } else {
            StepDirection::Decrement
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            StepDirection::Increment => StepDirection::Decrement,
            StepDirection::Decrement => StepDirection::Increment,
        }
    }
}

/// Interaction state: idle, or held down by exactly one touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressState {
    Idle,
    Pressed {
        touch: TouchId,
        direction: StepDirection,
    },
}

/// Handle for a value-changed listener, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type ValueListener = Box<dyn FnMut(f64)>;

// ---------------------------------------------------------------------------
// StepperError
// ---------------------------------------------------------------------------

/// Errors from stepper interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StepperError {
    /// A second touch tried to press while another touch holds the stepper.
    #[error("touch {rejected} rejected: touch {active} is already pressing the stepper")]
    AlreadyPressed { active: TouchId, rejected: TouchId },
}

// ---------------------------------------------------------------------------
// VerticalStepper
// ---------------------------------------------------------------------------

/// A vertical stepper widget.
///
/// # Examples
///
/// ```ignore
/// let recorder = Rc::new(ValueRecorder::new());
/// let mut stepper = VerticalStepper::from_config(
///     &StepperConfig::new().with_bounds(0.0, 10.0).with_step_value(2.0),
/// );
/// stepper.set_delegate(&recorder);
/// stepper.press(TouchId(0), StepDirection::Increment, Instant::now())?;
/// assert_eq!(stepper.value(), 2.0);
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct VerticalStepper {
    value: f64,
    minimum_value: f64,
    maximum_value: f64,
    step_value: f64,
    auto_repeat: bool,
    color: Option<String>,
    delegate: Option<Weak<dyn StepperDelegate>>,
    listeners: Vec<(ListenerId, ValueListener)>,
    next_listener: usize,
    state: PressState,
    timer: RepeatTimer,
}

impl VerticalStepper {
    /// A stepper with the default configuration.
    pub fn new() -> Self {
        Self::from_config(&StepperConfig::default())
    }

    /// Build a stepper from `config`. The starting value is clamped into the
    /// configured bounds.
    pub fn from_config(config: &StepperConfig) -> Self {
        let mut stepper = Self {
            value: 0.0,
            minimum_value: config.minimum_value,
            maximum_value: config.maximum_value,
            step_value: config.step_value,
            auto_repeat: config.auto_repeat,
            color: config.color.clone(),
            delegate: None,
            listeners: Vec::new(),
            next_listener: 0,
            state: PressState::Idle,
            timer: RepeatTimer::new(config.auto_repeat_interval),
        };
        stepper.value = stepper.clamp(config.value);
        stepper
    }

    /// Snapshot the current settings as a config.
    pub fn config(&self) -> StepperConfig {
        StepperConfig {
            value: self.value,
            minimum_value: self.minimum_value,
            maximum_value: self.maximum_value,
            step_value: self.step_value,
            auto_repeat: self.auto_repeat,
            auto_repeat_interval: self.timer.interval(),
            color: self.color.clone(),
        }
    }

    // ── Properties ───────────────────────────────────────────────────

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn minimum_value(&self) -> f64 {
        self.minimum_value
    }

    pub fn maximum_value(&self) -> f64 {
        self.maximum_value
    }

    pub fn step_value(&self) -> f64 {
        self.step_value
    }

    pub fn auto_repeat(&self) -> bool {
        self.auto_repeat
    }

    pub fn auto_repeat_interval(&self) -> Duration {
        self.timer.interval()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Set the initial value without notifying the delegate.
    ///
    /// Out-of-range values are clamped to the nearest bound.
    pub fn set_initial_value(&mut self, value: f64) {
        self.value = self.clamp(value);
    }

    /// Assign the value directly. Clamps, and does not notify: only
    /// interaction commits are reported.
    pub fn set_value(&mut self, value: f64) {
        self.set_initial_value(value);
    }

    /// Set the lower bound, re-clamping the current value silently.
    pub fn set_minimum_value(&mut self, minimum_value: f64) {
        self.minimum_value = minimum_value;
        self.value = self.clamp(self.value);
    }

    /// Set the upper bound, re-clamping the current value silently.
    pub fn set_maximum_value(&mut self, maximum_value: f64) {
        self.maximum_value = maximum_value;
        self.value = self.clamp(self.value);
    }

    /// Not validated. A zero step never moves the value.
    pub fn set_step_value(&mut self, step_value: f64) {
        self.step_value = step_value;
    }

    /// Turning auto-repeat off stops a running repeat immediately.
    pub fn set_auto_repeat(&mut self, auto_repeat: bool) {
        self.auto_repeat = auto_repeat;
        if !auto_repeat {
            self.timer.cancel();
        }
    }

    pub fn set_auto_repeat_interval(&mut self, interval: Duration) {
        self.timer.set_interval(interval);
    }

    pub fn set_color(&mut self, color: Option<String>) {
        self.color = color;
    }

    // ── Delegate ─────────────────────────────────────────────────────

    /// Register `delegate` for change notifications.
    ///
    /// Only a weak reference is kept. Once the last `Rc` is dropped,
    /// notifications silently stop.
    pub fn set_delegate<D: StepperDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak: Weak<D> = Rc::downgrade(delegate);
        let weak: Weak<dyn StepperDelegate> = weak;
        self.delegate = Some(weak);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Whether a delegate is registered and still alive.
    pub fn has_delegate(&self) -> bool {
        self.delegate
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    // ── Value-changed listeners ──────────────────────────────────────

    /// Register `listener` to run with the new value on every committed step.
    ///
    /// Listeners work with or without a delegate. They run after the
    /// delegate, in registration order.
    pub fn on_value_changed<F: FnMut(f64) + 'static>(&mut self, listener: F) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn remove_value_changed(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // ── Press state ──────────────────────────────────────────────────

    pub fn press_state(&self) -> PressState {
        self.state
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self.state, PressState::Pressed { .. })
    }

    /// Direction of the active press, if any.
    pub fn pressed_direction(&self) -> Option<StepDirection> {
        match self.state {
            PressState::Pressed { direction, .. } => Some(direction),
            PressState::Idle => None,
        }
    }

    /// When the next repeat tick is due, if one is armed.
    pub fn next_repeat_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Whether stepping in `direction` can no longer change the value.
    pub fn is_saturated(&self, direction: StepDirection) -> bool {
        match direction {
            StepDirection::Increment => self.value >= self.maximum_value,
            StepDirection::Decrement => self.value <= self.minimum_value,
        }
    }

    // ── Interaction ──────────────────────────────────────────────────

    /// Start a press in `direction`.
    ///
    /// Commits one step right away and, with auto-repeat on, arms the repeat
    /// timer unless the value is already saturated. Returns whether the value
    /// changed. A press by the touch that already holds the stepper is
    /// treated as a drag. A press by any other touch is rejected and leaves
    /// the state untouched.
    pub fn press(
        &mut self,
        touch: TouchId,
        direction: StepDirection,
        now: Instant,
    ) -> Result<bool, StepperError> {
        match self.state {
            PressState::Pressed { touch: active, .. } if active != touch => {
                return Err(StepperError::AlreadyPressed {
                    active,
                    rejected: touch,
                });
            }
            PressState::Pressed { .. } => {
                self.drag(touch, direction, now);
                return Ok(false);
            }
            PressState::Idle => {}
        }

        debug!(%touch, ?direction, "stepper pressed");
        self.state = PressState::Pressed { touch, direction };
        let changed = self.step(direction);
        if self.auto_repeat && !self.is_saturated(direction) {
            self.timer.start(now);
            trace!(interval = ?self.timer.interval(), "repeat timer armed");
        }
        Ok(changed)
    }

    /// Move the held press into `direction`.
    ///
    /// Commits nothing by itself. Switching direction redirects the repeat
    /// timer. If the timer had stopped at a bound it is re-armed from `now`.
    /// Moving into a saturated direction stops it. Returns whether the
    /// direction changed.
    pub fn drag(&mut self, touch: TouchId, direction: StepDirection, now: Instant) -> bool {
        let PressState::Pressed {
            touch: active,
            direction: current,
        } = self.state
        else {
            return false;
        };
        if active != touch || current == direction {
            return false;
        }

        debug!(%touch, ?direction, "stepper press switched direction");
        self.state = PressState::Pressed { touch, direction };
        if self.is_saturated(direction) {
            self.timer.cancel();
        } else if self.auto_repeat && !self.timer.is_active() {
            self.timer.start(now);
        }
        true
    }

    /// End the press held by `touch`. Returns whether it was pressing.
    pub fn release(&mut self, touch: TouchId) -> bool {
        self.end_press(touch, "released")
    }

    /// Abort the press held by `touch` (e.g. it left the control).
    pub fn cancel(&mut self, touch: TouchId) -> bool {
        self.end_press(touch, "cancelled")
    }

    /// Abort whatever press is active, regardless of touch.
    pub fn cancel_any(&mut self) -> bool {
        match self.state {
            PressState::Pressed { touch, .. } => self.cancel(touch),
            PressState::Idle => false,
        }
    }

    fn end_press(&mut self, touch: TouchId, how: &str) -> bool {
        match self.state {
            PressState::Pressed { touch: active, .. } if active == touch => {
                debug!(%touch, how, "stepper press ended");
                self.state = PressState::Idle;
                self.timer.cancel();
                true
            }
            _ => false,
        }
    }

    /// Step up once, as if tapped. Notifies on change.
    pub fn increment(&mut self) -> bool {
        self.step(StepDirection::Increment)
    }

    /// Step down once, as if tapped. Notifies on change.
    pub fn decrement(&mut self) -> bool {
        self.step(StepDirection::Decrement)
    }

    /// Fire every repeat tick due at `now`, oldest first.
    ///
    /// Each tick commits and notifies before the following deadline is
    /// armed. Stops at saturation. Returns the number of committed steps.
    pub fn tick(&mut self, now: Instant) -> usize {
        let Some(direction) = self.pressed_direction() else {
            self.timer.cancel();
            return 0;
        };

        let mut committed = 0;
        while self.timer.due(now) {
            if self.step(direction) {
                committed += 1;
            }
            if self.is_saturated(direction) {
                trace!("repeat timer stopped at bound");
                self.timer.cancel();
                break;
            }
            self.timer.rearm();
        }
        committed
    }

    /// Route a touch to press/drag/release given the widget's `region`.
    ///
    /// A touch that begins outside `region` is ignored, and one that moves
    /// outside it cancels the press. Returns whether the value changed.
    pub fn handle_touch(
        &mut self,
        event: TouchEvent,
        region: Region,
        now: Instant,
    ) -> Result<bool, StepperError> {
        let TouchEvent { id, phase, position } = event;
        let inside = region.contains_offset(position);
        match phase {
            TouchPhase::Began if inside => {
                self.press(id, StepDirection::at_row(region, position.y), now)
            }
            TouchPhase::Began => Ok(false),
            TouchPhase::Moved if inside => {
                self.drag(id, StepDirection::at_row(region, position.y), now);
                Ok(false)
            }
            TouchPhase::Moved | TouchPhase::Cancelled => {
                self.cancel(id);
                Ok(false)
            }
            TouchPhase::Ended => {
                self.release(id);
                Ok(false)
            }
        }
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Saturating clamp. Uses `max`/`min` so inverted bounds never panic.
    fn clamp(&self, value: f64) -> f64 {
        value.max(self.minimum_value).min(self.maximum_value)
    }

    fn step(&mut self, direction: StepDirection) -> bool {
        let candidate = match direction {
            StepDirection::Increment => self.value + self.step_value,
            StepDirection::Decrement => self.value - self.step_value,
        };
        let next = self.clamp(candidate);
        if next == self.value {
            return false;
        }
        self.value = next;
        debug!(value = next, ?direction, "stepper value committed");
        self.notify();
        true
    }

    fn notify(&mut self) {
        match self.delegate.as_ref().and_then(Weak::upgrade) {
            Some(delegate) => delegate.stepper_value_did_change(self),
            None => trace!("no live delegate to notify"),
        }
        let value = self.value;
        for (_, listener) in &mut self.listeners {
            listener(value);
        }
    }
}

impl Default for VerticalStepper {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VerticalStepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerticalStepper")
            .field("value", &self.value)
            .field("minimum_value", &self.minimum_value)
            .field("maximum_value", &self.maximum_value)
            .field("step_value", &self.step_value)
            .field("auto_repeat", &self.auto_repeat)
            .field("auto_repeat_interval", &self.timer.interval())
            .field("state", &self.state)
            .field("has_delegate", &self.has_delegate())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Widget for VerticalStepper {
    fn widget_type(&self) -> &str {
        "VerticalStepper"
    }

    fn can_focus(&self) -> bool {
        true
    }

    /// `▲` centred in the upper half, `▼` in the lower half. The pressed half
    /// is reversed and a saturated half is dimmed.
    fn render(&self, region: Region) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }

        let (upper, lower) = region.split_halves();
        let base = CellStyle::fg(self.color.as_deref());
        let pad = (region.width - 1) / 2;

        (region.y..region.bottom())
            .map(|row| {
                let (half, direction, glyph) = if row < upper.bottom() {
                    (upper, StepDirection::Increment, UP_ARROW)
                } else {
                    (lower, StepDirection::Decrement, DOWN_ARROW)
                };
                let style = base
                    .clone()
                    .dimmed(self.is_saturated(direction))
                    .reversed(self.pressed_direction() == Some(direction));

                let mut strip = Strip::new(row, region.x);
                if row == half.center_row() {
                    strip.fill(pad, style.clone());
                    strip.push(glyph, style.clone());
                }
                strip.fill(region.width, style);
                strip
            })
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
