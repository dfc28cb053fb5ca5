use crate::band::{Band, BandCell};
use crate::config::{FAST_BLINK_MS, POLL_TICK_MS, SLOW_BLINK_MS};
use crate::hardware::traits::{Led, Level};
use embedded_hal_async::delay::DelayNs;

/// What the LED shows for a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkPattern {
    /// Steady off.
    Off,
    /// Lit for `on_ms`, dark for `off_ms`, repeated.
    Blink { on_ms: u32, off_ms: u32 },
}

impl BlinkPattern {
    pub const fn for_band(band: Band) -> Self {
        match band {
            Band::Short => BlinkPattern::Off,
            Band::Medium => BlinkPattern::Blink {
                on_ms: SLOW_BLINK_MS,
                off_ms: SLOW_BLINK_MS,
            },
            Band::Long => BlinkPattern::Blink {
                on_ms: FAST_BLINK_MS,
                off_ms: FAST_BLINK_MS,
            },
        }
    }

    /// Time one iteration of the pattern occupies the driver.
    pub const fn period_ms(self) -> u32 {
        match self {
            BlinkPattern::Off => POLL_TICK_MS,
            BlinkPattern::Blink { on_ms, off_ms } => on_ms + off_ms,
        }
    }
}

impl Band {
    /// Pattern the LED shows while this band is published.
    pub const fn pattern(self) -> BlinkPattern {
        BlinkPattern::for_band(self)
    }
}

/// Renders the blink pattern of the current band on an LED.
///
/// The band is read once per pattern iteration, so a change shows up after
/// the blink in progress has finished.
pub struct BlinkDriver<'a, L, D> {
    led: L,
    delay: D,
    shared: &'a BandCell,
    showing: Option<BlinkPattern>,
}

impl<'a, L, D> BlinkDriver<'a, L, D>
where
    L: Led,
    D: DelayNs,
{
    pub fn new(led: L, delay: D, shared: &'a BandCell) -> Self {
        Self {
            led,
            delay,
            shared,
            showing: None,
        }
    }

    /// Renders one iteration of the pattern for the band currently published.
    pub async fn render(&mut self) -> Band {
        let band = self.shared.load();
        let pattern = band.pattern();
        if self.showing != Some(pattern) {
            #[cfg(feature = "defmt")]
            defmt::debug!("led pattern {} for {}", pattern, band);
            self.showing = Some(pattern);
        }

        match pattern {
            BlinkPattern::Off => {
                self.led.set(Level::Low);
                // Nothing to time, just let the scheduler tick once.
                self.delay.delay_ms(POLL_TICK_MS).await;
            }
            BlinkPattern::Blink { on_ms, off_ms } => {
                self.led.set(Level::High);
                self.delay.delay_ms(on_ms).await;
                self.led.set(Level::Low);
                self.delay.delay_ms(off_ms).await;
            }
        }
        band
    }

    /// Renders forever.
    pub async fn run(mut self) {
        loop {
            self.render().await;
        }
    }
}
