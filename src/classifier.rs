//! Button hold-time classification.
//!
//! The classifier samples the button at coarse, fixed instants instead of
//! timestamping edges:
//!
//! | t (ms) | sample     | outcome                                   |
//! |--------|------------|-------------------------------------------|
//! | 0      | released   | `Short`, poll again after one tick        |
//! | 0      | pressed    | wait 2000 ms                              |
//! | 2000   | released   | `Short`                                   |
//! | 2000   | pressed    | wait 2000 ms                              |
//! | 4000   | released   | `Medium`, then settle for 2000 ms         |
//! | 4000   | pressed    | `Long`                                    |
//!
//! Resolution is therefore one hold stage. A release right on a stage
//! boundary lands in whichever branch the sample observes, and presses
//! shorter than a polling pass can be missed entirely.

use crate::band::{Band, BandCell};
use crate::config::{HOLD_STAGE_MS, MEDIUM_SETTLE_MS, POLL_TICK_MS};
use crate::hardware::traits::{Button, LineState};
use embedded_hal_async::delay::DelayNs;

/// Where a polling cycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HoldStage {
    /// No press seen yet in this cycle.
    Idle,
    /// Pressed at the first sample, waiting for the 2 s sample.
    WaitFirst,
    /// Still pressed at 2 s, waiting for the 4 s sample.
    WaitSecond,
    /// The cycle is over with this band.
    Classified(Band),
}

/// Result of feeding one sample to a [`HoldStage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub next: HoldStage,
    /// Suspension before the next sample is taken.
    pub wait_ms: u32,
}

impl Step {
    const fn wait(next: HoldStage, wait_ms: u32) -> Self {
        Self { next, wait_ms }
    }

    const fn classified(band: Band, wait_ms: u32) -> Self {
        Self {
            next: HoldStage::Classified(band),
            wait_ms,
        }
    }
}

impl HoldStage {
    /// Advances the cycle on one sample of the button line.
    ///
    /// A classified stage starts a fresh cycle, so it behaves like `Idle`.
    pub fn on_sample(self, line: LineState) -> Step {
        use LineState::{Asserted, Deasserted};

        match (self, line) {
            (HoldStage::Idle | HoldStage::Classified(_), Deasserted) => {
                Step::classified(Band::Short, POLL_TICK_MS)
            }
            (HoldStage::Idle | HoldStage::Classified(_), Asserted) => {
                Step::wait(HoldStage::WaitFirst, HOLD_STAGE_MS)
            }
            (HoldStage::WaitFirst, Deasserted) => Step::classified(Band::Short, 0),
            (HoldStage::WaitFirst, Asserted) => Step::wait(HoldStage::WaitSecond, HOLD_STAGE_MS),
            // Released between 2 s and 4 s. The settle keeps the medium band
            // published for a while, the idle path would otherwise replace it
            // with `Short` on the very next tick.
            (HoldStage::WaitSecond, Deasserted) => Step::classified(Band::Medium, MEDIUM_SETTLE_MS),
            (HoldStage::WaitSecond, Asserted) => Step::classified(Band::Long, 0),
        }
    }
}

/// Samples a button and publishes the hold band of each polling cycle.
///
/// Sole writer of the [`BandCell`] it is given.
pub struct ButtonClassifier<'a, B, D> {
    button: B,
    delay: D,
    shared: &'a BandCell,
}

impl<'a, B, D> ButtonClassifier<'a, B, D>
where
    B: Button,
    D: DelayNs,
{
    pub fn new(button: B, delay: D, shared: &'a BandCell) -> Self {
        Self {
            button,
            delay,
            shared,
        }
    }

    /// Runs one polling cycle.
    ///
    /// Samples until the hold is classified, publishes the band, then serves
    /// the suspension that follows it (settle or idle tick) before returning.
    pub async fn classify(&mut self) -> Band {
        let mut stage = HoldStage::Idle;
        loop {
            let line = self.button.read();
            let step = stage.on_sample(line);
            #[cfg(feature = "defmt")]
            defmt::trace!("{} + {} -> {}", stage, line, step.next);

            if let HoldStage::Classified(band) = step.next {
                #[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
                let previous = self.shared.publish(band);
                #[cfg(feature = "defmt")]
                if previous != band {
                    defmt::info!("hold band {} -> {}", previous, band);
                }
                self.suspend(step.wait_ms).await;
                return band;
            }

            self.suspend(step.wait_ms).await;
            stage = step.next;
        }
    }

    /// Polls forever.
    pub async fn run(mut self) {
        loop {
            self.classify().await;
        }
    }

    async fn suspend(&mut self, ms: u32) {
        if ms > 0 {
            self.delay.delay_ms(ms).await;
        }
    }
}
