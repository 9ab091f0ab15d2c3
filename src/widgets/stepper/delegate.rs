//! Delegate: the stepper's change-notification capability.

use std::cell::{Cell, RefCell};

use super::VerticalStepper;

/// Receives value-change notifications from a [`VerticalStepper`].
///
/// The method has a default no-op body, so implementors only write it when
/// they care. It runs synchronously inside the step that committed the
/// change. The stepper is borrowed immutably for the call, so a delegate can
/// read it but not mutate it.
///
/// Steppers hold delegates through a `Weak`, so keep your own `Rc` alive for
/// as long as you want notifications.
pub trait StepperDelegate {
    fn stepper_value_did_change(&self, _stepper: &VerticalStepper) {}
}

/// A delegate that records every value it is notified of.
///
/// Handy for hosts that poll rather than react, and for tests.
#[derive(Debug, Default)]
pub struct ValueRecorder {
    values: RefCell<Vec<f64>>,
    count: Cell<usize>,
}

impl ValueRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications received.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Values seen, in notification order.
    pub fn values(&self) -> Vec<f64> {
        self.values.borrow().clone()
    }

    /// The most recent value, if any notification arrived.
    pub fn last(&self) -> Option<f64> {
        self.values.borrow().last().copied()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.values.borrow_mut().clear();
        self.count.set(0);
    }
}

impl StepperDelegate for ValueRecorder {
    fn stepper_value_did_change(&self, stepper: &VerticalStepper) {
        self.count.set(self.count.get() + 1);
        self.values.borrow_mut().push(stepper.value());
    }
}
