//! Stepper configuration: defaults and builder.
//!
//! A [`StepperConfig`] carries every option a [`VerticalStepper`] recognises.
//! Build one in code with the `with_*` methods, or parse one from a
//! declarative description with [`StepperConfig::parse`].
//!
//! [`VerticalStepper`]: crate::widgets::VerticalStepper

use std::time::Duration;

use crate::decl::{self, ParseError};

/// Time between repeated steps when nothing else is configured.
pub const DEFAULT_AUTO_REPEAT_INTERVAL: Duration = Duration::from_millis(500);

/// Options for constructing a stepper.
#[derive(Debug, Clone, PartialEq)]
pub struct StepperConfig {
    /// Starting value. Clamped into the bounds on construction.
    pub value: f64,
    /// Inclusive lower bound.
    pub minimum_value: f64,
    /// Inclusive upper bound.
    pub maximum_value: f64,
    /// Amount added or subtracted per step.
    pub step_value: f64,
    /// Whether holding a press keeps stepping.
    pub auto_repeat: bool,
    /// Time between repeated steps while pressed.
    pub auto_repeat_interval: Duration,
    /// Optional arrow color (named or `#rrggbb`).
    pub color: Option<String>,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            value: 0.0,
            minimum_value: 0.0,
            maximum_value: 100.0,
            step_value: 1.0,
            auto_repeat: false,
            auto_repeat_interval: DEFAULT_AUTO_REPEAT_INTERVAL,
            color: None,
        }
    }
}

impl StepperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a declarative description, starting from the defaults.
    ///
    /// ```ignore
    /// let config = StepperConfig::parse(
    ///     "VerticalStepper { maximum-value: 10; step-value: 2; auto-repeat: true; }",
    /// )?;
    /// ```
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        decl::parse_config(source)
    }

    /// Set the starting value (builder).
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Set both bounds (builder).
    pub fn with_bounds(mut self, minimum_value: f64, maximum_value: f64) -> Self {
        self.minimum_value = minimum_value;
        self.maximum_value = maximum_value;
        self
    }

    /// Set the lower bound (builder).
    pub fn with_minimum_value(mut self, minimum_value: f64) -> Self {
        self.minimum_value = minimum_value;
        self
    }

    /// Set the upper bound (builder).
    pub fn with_maximum_value(mut self, maximum_value: f64) -> Self {
        self.maximum_value = maximum_value;
        self
    }

    /// Set the step size (builder).
    pub fn with_step_value(mut self, step_value: f64) -> Self {
        self.step_value = step_value;
        self
    }

    /// Enable or disable auto-repeat (builder).
    pub fn with_auto_repeat(mut self, auto_repeat: bool) -> Self {
        self.auto_repeat = auto_repeat;
        self
    }

    /// Set the auto-repeat interval (builder).
    pub fn with_auto_repeat_interval(mut self, interval: Duration) -> Self {
        self.auto_repeat_interval = interval;
        self
    }

    /// Set the arrow color (builder).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
