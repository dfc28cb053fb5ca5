use core::sync::atomic::{AtomicU8, Ordering};

/// Hold-duration band of the last completed button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Band {
    /// Held less than 2 s, or not pressed at all.
    #[default]
    Short = 0,
    /// Held between 2 s and 4 s.
    Medium = 1,
    /// Held 4 s or more.
    Long = 2,
}

impl Band {
    /// One-byte encoding stored in a [`BandCell`].
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

impl From<u8> for Band {
    fn from(value: u8) -> Self {
        match value {
            2 => Band::Long,
            1 => Band::Medium,
            _ => Band::Short,
        }
    }
}

/// Shared classification state.
///
/// Single writer (the classifier), single reader (the blink driver). Every
/// access moves the whole value in one atomic operation, so the reader can
/// see a stale band but never a torn one. No ordering beyond that is needed.
pub struct BandCell {
    raw: AtomicU8,
}

impl BandCell {
    /// New cell holding [`Band::Short`].
    pub const fn new() -> Self {
        Self {
            raw: AtomicU8::new(Band::Short.to_u8()),
        }
    }

    /// Current band.
    pub fn load(&self) -> Band {
        self.raw.load(Ordering::Relaxed).into()
    }

    /// Overwrites the band and returns the one it replaced.
    pub fn publish(&self, band: Band) -> Band {
        self.raw.swap(band.to_u8(), Ordering::Relaxed).into()
    }
}

impl Default for BandCell {
    fn default() -> Self {
        Self::new()
    }
}
