//! App struct: hosts one stepper in a terminal region and runs its event loop.
//!
//! [`App`] routes terminal input to the stepper, fires repeat ticks when the
//! stepper's deadline passes, and redraws. The `new_headless` constructor
//! allows testing without a real terminal.

use std::future;
use std::io;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::config::StepperConfig;
use crate::decl::ParseError;
use crate::event::input::{try_from_crossterm, InputEvent, Key, KeyEvent, Modifiers};
use crate::event::touch::TouchEvent;
use crate::geometry::Region;
use crate::render::driver::Driver;
use crate::widget::Widget;
use crate::widgets::VerticalStepper;

/// How long the input reader blocks before checking whether the app is gone.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Settings for the hosted stepper.
    pub stepper: StepperConfig,
    /// Where the stepper sits on screen, in cells.
    pub region: Region,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            stepper: StepperConfig::default(),
            region: Region::new(0, 0, 3, 4),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stepper config (builder).
    pub fn with_stepper(mut self, stepper: StepperConfig) -> Self {
        self.stepper = stepper;
        self
    }

    /// Parse the stepper config from a declarative description (builder).
    pub fn with_stepper_description(mut self, source: &str) -> Result<Self, ParseError> {
        self.stepper = StepperConfig::parse(source)?;
        Ok(self)
    }

    /// Set the stepper's region (builder).
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The application hosting a single [`VerticalStepper`].
///
/// Register a delegate on `app.stepper` to observe value changes.
pub struct App {
    /// The hosted widget.
    pub stepper: VerticalStepper,
    /// The stepper's on-screen region.
    pub region: Region,
    /// Terminal output driver. `None` in headless mode.
    pub driver: Option<Driver>,
    /// Whether the app is still running.
    running: bool,
    /// Whether the stepper needs redrawing.
    dirty: bool,
}

impl App {
    /// Create a new app with a real terminal driver.
    pub fn new(config: AppConfig) -> io::Result<Self> {
        let mut app = Self::new_headless(config);
        app.driver = Some(Driver::new()?);
        Ok(app)
    }

    /// Create a headless app for testing (no terminal driver).
    pub fn new_headless(config: AppConfig) -> Self {
        Self {
            stepper: VerticalStepper::from_config(&config.stepper),
            region: config.region,
            driver: None,
            running: true,
            dirty: true,
        }
    }

    /// Handle one input event received at `now`.
    ///
    /// Mouse buttons become touches on the stepper. A touch the stepper
    /// rejects is logged and dropped. Arrow keys, `+`/`-` and `k`/`j` step
    /// once. `q`, `Esc` and `Ctrl+C` quit. Losing focus cancels a held press.
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) {
        match event {
            InputEvent::Key(ke) => self.handle_key(ke),
            InputEvent::Mouse(me) => {
                let Some(touch) = TouchEvent::from_mouse(&me) else {
                    return;
                };
                if let Err(err) = self.stepper.handle_touch(touch, self.region, now) {
                    warn!(%err, "stepper touch rejected");
                }
                self.dirty = true;
            }
            InputEvent::Resize { width, height } => {
                debug!(width, height, "terminal resized");
                self.dirty = true;
            }
            InputEvent::FocusLost => {
                if self.stepper.cancel_any() {
                    self.dirty = true;
                }
            }
            InputEvent::FocusGained => {}
        }
    }

    fn handle_key(&mut self, ke: KeyEvent) {
        match ke.code {
            Key::Char('c') if ke.modifiers.contains(Modifiers::CTRL) => self.request_quit(),
            Key::Char('q') | Key::Escape => self.request_quit(),
            Key::Up | Key::Char('+') | Key::Char('k') => {
                self.dirty |= self.stepper.increment();
            }
            Key::Down | Key::Char('-') | Key::Char('j') => {
                self.dirty |= self.stepper.decrement();
            }
            _ => {}
        }
    }

    /// Fire repeat ticks due at `now`. Returns the number of committed steps.
    pub fn on_timer(&mut self, now: Instant) -> usize {
        let committed = self.stepper.tick(now);
        if committed > 0 || self.stepper.next_repeat_deadline().is_none() {
            self.dirty = true;
        }
        committed
    }

    /// When the event loop must wake up next for a repeat tick.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.stepper.next_repeat_deadline()
    }

    /// Draw the stepper if anything changed since the last draw.
    ///
    /// A no-op in headless mode apart from clearing the dirty flag.
    pub fn render(&mut self) -> io::Result<()> {
        if !self.dirty {
            return Ok(());
        }
        self.dirty = false;
        if let Some(driver) = self.driver.as_mut() {
            driver.draw(&self.stepper.render(self.region))?;
            driver.flush()?;
        }
        Ok(())
    }

    /// Whether the app should quit.
    pub fn should_quit(&self) -> bool {
        !self.running
    }

    /// Request the app to quit.
    pub fn request_quit(&mut self) {
        self.running = false;
    }

    /// Whether the app has a terminal driver (not headless).
    pub fn has_driver(&self) -> bool {
        self.driver.is_some()
    }

    /// Whether a redraw is pending.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ── Event loop ───────────────────────────────────────────────────

    /// Take over the terminal and run until the user quits.
    ///
    /// Must be called inside a tokio runtime. Terminal state is restored
    /// even when the loop fails.
    pub async fn run(mut self) -> io::Result<()> {
        if let Some(driver) = self.driver.as_mut() {
            if let Err(err) = driver.enter() {
                return first_error(Err(err), driver.leave());
            }
        }

        let (tx, rx) = mpsc::channel(64);
        spawn_input_reader(tx);
        let result = self.run_with(rx).await;

        match self.driver.as_mut() {
            Some(driver) => first_error(result, driver.leave()),
            None => result,
        }
    }

    /// Process `events` and repeat deadlines until quit or the channel closes.
    ///
    /// Each iteration waits for whichever comes first: the next input event
    /// or the stepper's repeat deadline. Timer ticks and input are both
    /// handled on this task, so the stepper is never touched concurrently.
    pub async fn run_with(&mut self, mut events: mpsc::Receiver<InputEvent>) -> io::Result<()> {
        debug!(region = ?self.region, "stepper app running");
        self.render()?;

        while !self.should_quit() {
            let deadline = self.next_deadline();
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle_input(event, now()),
                    None => break,
                },
                () = sleep_until(deadline) => {
                    self.on_timer(now());
                }
            }
            self.render()?;
        }

        debug!(value = self.stepper.value(), "stepper app stopped");
        Ok(())
    }
}

/// Combine a loop result with the terminal restore that followed it.
///
/// The loop's error wins. A restore error is returned only when the loop
/// succeeded, and is logged otherwise.
fn first_error(result: io::Result<()>, restored: io::Result<()>) -> io::Result<()> {
    match (result, restored) {
        (Err(err), Err(restore_err)) => {
            warn!(%restore_err, "restoring terminal failed");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), restored) => restored,
    }
}

/// Current time from tokio's clock, so paused-time tests stay in step.
fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => future::pending().await,
    }
}

/// Forward terminal input to `tx` from a blocking task.
///
/// The task exits once the receiver is dropped or the terminal errors.
fn spawn_input_reader(tx: mpsc::Sender<InputEvent>) {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match crossterm::event::poll(INPUT_POLL_INTERVAL) {
                Ok(true) => match crossterm::event::read() {
                    Ok(event) => {
                        if let Some(input) = try_from_crossterm(event) {
                            if tx.blocking_send(input).is_err() {
                                break;
                            }
                        }
                    }
                    Err(err) => {
                        warn!(%err, "reading terminal input failed");
                        break;
                    }
                },
                Ok(false) => {}
                Err(err) => {
                    warn!(%err, "polling terminal input failed");
                    break;
                }
            }
        }
    });
}

// ===========================================================================
// Tests
// ===========================================================================
