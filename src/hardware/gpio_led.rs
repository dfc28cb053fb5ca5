use super::traits::{ActiveLevel, Led};
use core::convert::Infallible;
use embedded_hal::digital::{OutputPin, PinState};

/// LED on a GPIO output whose writes cannot fail.
pub struct GpioLed<P> {
    pin: P,
    active: ActiveLevel,
}

impl<P> GpioLed<P>
where
    P: OutputPin<Error = Infallible>,
{
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    /// LED between the pin and VCC, lit when the pin is driven low (Blue Pill PC13).
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    fn drive(&mut self, lit: bool) {
        let state = match self.active {
            ActiveLevel::High => PinState::from(lit),
            ActiveLevel::Low => PinState::from(!lit),
        };
        match self.pin.set_state(state) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

impl<P> Led for GpioLed<P>
where
    P: OutputPin<Error = Infallible>,
{
    fn on(&mut self) {
        self.drive(true);
    }

    fn off(&mut self) {
        self.drive(false);
    }
}
