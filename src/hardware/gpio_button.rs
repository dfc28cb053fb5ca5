use super::traits::{ActiveLevel, Button};
use core::convert::Infallible;
use embedded_hal::digital::InputPin;

/// Push-button on a GPIO input whose reads cannot fail.
pub struct GpioButton<P> {
    pin: P,
    active: ActiveLevel,
}

impl<P> GpioButton<P>
where
    P: InputPin<Error = Infallible>,
{
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    /// Button wired to ground with a pull-up, pressed reads low.
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }
}

impl<P> Button for GpioButton<P>
where
    P: InputPin<Error = Infallible>,
{
    fn is_pressed(&mut self) -> bool {
        let read = match self.active {
            ActiveLevel::Low => self.pin.is_low(),
            ActiveLevel::High => self.pin.is_high(),
        };
        match read {
            Ok(pressed) => pressed,
            Err(never) => match never {},
        }
    }
}
