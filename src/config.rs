//! Central hardware map for the HMI board.
//!
//! Every pin, ADC channel and threshold used by the firmware is named here,
//! so a rewire is a one-file change.

use crate::hal::adc::AdcChannel;

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// ADC reference voltage in millivolts
pub const ADC_VREF_MV: u16 = 5000;

/// Highest code the 10-bit ADC can return
pub const ADC_FULL_SCALE: u16 = 1023;

// --- LCD control lines (4-bit mode), PORTB ---

/// LCD register select, PB0
pub const LCD_RS_PIN: u8 = 0;
/// LCD enable strobe, PB1
pub const LCD_E_PIN: u8 = 1;

// --- LCD data bus, upper nibble of PORTD ---

pub const LCD_D4_PIN: u8 = 4;
pub const LCD_D5_PIN: u8 = 5;
pub const LCD_D6_PIN: u8 = 6;
pub const LCD_D7_PIN: u8 = 7;

/// Alarm LED, PD3
pub const LED_PIN: u8 = 3;

// --- ADC channel assignments ---

/// Analog keypad resistor ladder
pub const KEYPAD_ADC_CHANNEL: AdcChannel = AdcChannel::Adc0;
/// Setpoint potentiometer
pub const POT_ADC_CHANNEL: AdcChannel = AdcChannel::Adc2;

// --- Keypad voltage band boundaries ---
// The five keys share KEYPAD_ADC_CHANNEL through a resistor ladder. Each
// boundary is upper-exclusive: a reading below it selects that key, first
// match wins. Values depend on the resistor network.

/// RIGHT reads 0..=49
pub const KEY_ADC_RIGHT: u16 = 50;
/// UP reads 50..=194
pub const KEY_ADC_UP: u16 = 195;
/// DOWN reads 195..=379
pub const KEY_ADC_DOWN: u16 = 380;
/// LEFT reads 380..=554
pub const KEY_ADC_LEFT: u16 = 555;
/// SELECT reads 555..=789, anything above is "no key"
pub const KEY_ADC_SELECT: u16 = 790;

const fn all_distinct(bits: &[u8]) -> bool {
    let mut i = 0;
    while i < bits.len() {
        let mut j = i + 1;
        while j < bits.len() {
            if bits[i] == bits[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

// Wiring invariants, checked at build time.
const _: () = {
    assert!(all_distinct(&[LCD_RS_PIN, LCD_E_PIN]));
    assert!(all_distinct(&[
        LED_PIN, LCD_D4_PIN, LCD_D5_PIN, LCD_D6_PIN, LCD_D7_PIN
    ]));
    assert!(KEYPAD_ADC_CHANNEL as u8 != POT_ADC_CHANNEL as u8);
    assert!(KEY_ADC_RIGHT < KEY_ADC_UP);
    assert!(KEY_ADC_UP < KEY_ADC_DOWN);
    assert!(KEY_ADC_DOWN < KEY_ADC_LEFT);
    assert!(KEY_ADC_LEFT < KEY_ADC_SELECT);
    assert!(KEY_ADC_SELECT <= ADC_FULL_SCALE);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_ladder_is_strictly_increasing() {
        let ladder = [
            KEY_ADC_RIGHT,
            KEY_ADC_UP,
            KEY_ADC_DOWN,
            KEY_ADC_LEFT,
            KEY_ADC_SELECT,
        ];
        for pair in ladder.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(KEY_ADC_SELECT <= ADC_FULL_SCALE);
    }

    #[test]
    fn port_b_assignments_do_not_overlap() {
        assert_ne!(LCD_RS_PIN, LCD_E_PIN);
    }

    #[test]
    fn port_d_assignments_do_not_overlap() {
        assert!(all_distinct(&[
            LED_PIN, LCD_D4_PIN, LCD_D5_PIN, LCD_D6_PIN, LCD_D7_PIN
        ]));
    }

    #[test]
    fn adc_channels_do_not_collide() {
        assert_ne!(KEYPAD_ADC_CHANNEL, POT_ADC_CHANNEL);
    }
}
