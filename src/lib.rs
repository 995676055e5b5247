//! Board definitions and shared helpers for an AVR LCD/keypad HMI.
//!
//! The hardware map lives in [`config`]: every pin, ADC channel and keypad
//! threshold the firmware uses is named there once. [`hal`] exposes the pins
//! as typestate GPIO handles, [`keypad`] turns raw ADC samples into key
//! states and [`utils`] holds the formatting helpers shared by the display
//! and console paths.

#![no_std]

pub mod config;
pub mod hal;
pub mod keypad;
pub mod utils;

pub use hal::adc::AdcChannel;
pub use keypad::Key;
