//! Analog keypad decoding.
//!
//! Five keys share one ADC input through a resistor ladder; each key pulls
//! the line into its own voltage band. Classification walks the band
//! boundaries bottom-up and stops at the first one above the reading.

use crate::config::{KEY_ADC_DOWN, KEY_ADC_LEFT, KEY_ADC_RIGHT, KEY_ADC_SELECT, KEY_ADC_UP};
use ufmt::{uDisplay, uWrite, Formatter};

/// Result of classifying one keypad sample. `None` covers every reading at
/// or above the SELECT boundary, including a floating full-scale input, and
/// is a normal state rather than an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Right,
    Up,
    Down,
    Left,
    Select,
    None,
}

impl Key {
    /// Classify a raw ADC sample from the keypad channel.
    ///
    /// Boundaries are upper-exclusive, so a reading equal to a boundary
    /// belongs to the next band up.
    pub const fn from_reading(reading: u16) -> Key {
        if reading < KEY_ADC_RIGHT {
            Key::Right
        } else if reading < KEY_ADC_UP {
            Key::Up
        } else if reading < KEY_ADC_DOWN {
            Key::Down
        } else if reading < KEY_ADC_LEFT {
            Key::Left
        } else if reading < KEY_ADC_SELECT {
            Key::Select
        } else {
            Key::None
        }
    }

    pub const fn is_pressed(self) -> bool {
        !matches!(self, Key::None)
    }

    /// Short name for console and display output.
    pub const fn label(self) -> &'static str {
        match self {
            Key::Right => "RIGHT",
            Key::Up => "UP",
            Key::Down => "DOWN",
            Key::Left => "LEFT",
            Key::Select => "SELECT",
            Key::None => "NONE",
        }
    }
}

impl uDisplay for Key {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(self.label())
    }
}
