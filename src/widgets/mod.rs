//! Built-in widgets.

pub mod stepper;

pub use stepper::{
    ListenerId, PressState, RepeatTimer, StepDirection, StepperDelegate, StepperError,
    ValueRecorder, VerticalStepper,
};
