//! ADC channel identifiers for the analog front end.
//!
//! Conversion itself is driven by the sampling code elsewhere in the
//! firmware; this module only names the single-ended inputs.

/// Single-ended input channels. The discriminant is the ADMUX MUX field
/// value selecting the channel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum AdcChannel {
    Adc0 = 0,
    Adc1 = 1,
    Adc2 = 2,
    Adc3 = 3,
    Adc4 = 4,
    Adc5 = 5,
    Adc6 = 6,
    Adc7 = 7,
}

impl AdcChannel {
    /// MUX field value selecting this channel.
    pub const fn mux_bits(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn board_channels_are_distinct() {
        assert_ne!(config::KEYPAD_ADC_CHANNEL, config::POT_ADC_CHANNEL);
    }

    #[test]
    fn mux_bits_match_channel_numbers() {
        assert_eq!(AdcChannel::Adc0.mux_bits(), 0);
        assert_eq!(AdcChannel::Adc2.mux_bits(), 2);
        assert_eq!(AdcChannel::Adc7.mux_bits(), 7);
    }
}
