//! Virtual-time doubles for driving the polling loops on the host.

use crate::hardware::traits::{Button, Led, Level};
use embedded_hal_async::delay::DelayNs;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

/// Millisecond clock that only moves when a [`SimDelay`] waits.
#[derive(Clone, Default)]
pub struct Clock(Rc<Cell<u64>>);

impl Clock {
    pub fn now(&self) -> u64 {
        self.0.get()
    }

    fn advance(&self, ms: u64) {
        self.0.set(self.0.get() + ms);
    }
}

/// Delay that completes immediately after moving the clock forward.
pub struct SimDelay {
    clock: Clock,
    waits: Rc<RefCell<Vec<u32>>>,
}

impl SimDelay {
    pub fn new(clock: &Clock) -> (Self, Rc<RefCell<Vec<u32>>>) {
        let waits = Rc::new(RefCell::new(Vec::new()));
        let delay = Self {
            clock: clock.clone(),
            waits: Rc::clone(&waits),
        };
        (delay, waits)
    }
}

impl DelayNs for SimDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.clock.advance(u64::from(ns.div_ceil(1_000_000)));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.waits.borrow_mut().push(ms);
        self.clock.advance(u64::from(ms));
    }
}

/// Button held down during `[start, end)` on the virtual clock.
pub struct ScriptedButton {
    clock: Clock,
    held: Option<(u64, u64)>,
}

impl ScriptedButton {
    pub fn never_pressed(clock: &Clock) -> Self {
        Self {
            clock: clock.clone(),
            held: None,
        }
    }

    pub fn held(clock: &Clock, start: u64, end: u64) -> Self {
        Self {
            clock: clock.clone(),
            held: Some((start, end)),
        }
    }
}

impl Button for ScriptedButton {
    fn is_pressed(&mut self) -> bool {
        let now = self.clock.now();
        self.held.is_some_and(|(start, end)| start <= now && now < end)
    }
}

/// LED that records every write with its virtual timestamp.
pub struct RecordingLed {
    clock: Clock,
    writes: Rc<RefCell<Vec<(u64, Level)>>>,
}

impl RecordingLed {
    pub fn new(clock: &Clock) -> (Self, Rc<RefCell<Vec<(u64, Level)>>>) {
        let writes = Rc::new(RefCell::new(Vec::new()));
        let led = Self {
            clock: clock.clone(),
            writes: Rc::clone(&writes),
        };
        (led, writes)
    }
}

impl Led for RecordingLed {
    fn on(&mut self) {
        self.writes.borrow_mut().push((self.clock.now(), Level::High));
    }

    fn off(&mut self) {
        self.writes.borrow_mut().push((self.clock.now(), Level::Low));
    }
}
