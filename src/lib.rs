//! Button hold-time classifier driving an LED blink pattern.
//!
//! One task samples a push-button and sorts each hold into a [`Band`], the
//! other blinks an LED according to the last published band. The two only
//! meet through a [`BandCell`].

#![cfg_attr(not(test), no_std)]

pub mod band;
pub mod blink;
pub mod classifier;
pub mod config;
pub mod hardware;

#[cfg(test)]
mod test_support;

pub use band::{Band, BandCell};
pub use blink::{BlinkDriver, BlinkPattern};
pub use classifier::{ButtonClassifier, HoldStage, Step};
