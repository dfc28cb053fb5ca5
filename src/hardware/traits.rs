/// Logical state of the button line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineState {
    Asserted,
    Deasserted,
}

/// Logical LED level. `High` is lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    High,
    Low,
}

/// Electrical level that means "asserted" on an input or "lit" on an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveLevel {
    High,
    Low,
}

pub trait Led {
    fn on(&mut self);
    fn off(&mut self);

    fn set(&mut self, level: Level) {
        match level {
            Level::High => self.on(),
            Level::Low => self.off(),
        }
    }
}

pub trait Button {
    fn is_pressed(&mut self) -> bool;

    fn read(&mut self) -> LineState {
        if self.is_pressed() {
            LineState::Asserted
        } else {
            LineState::Deasserted
        }
    }
}
