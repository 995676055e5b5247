use avr_device::atmega328p::{PORTB, PORTC, PORTD};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin, ToggleableOutputPin};

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

#[derive(Debug)]
pub struct Pin<PORT, const P: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT, const P: u8, MODE> Pin<PORT, P, MODE> {
    /// Bit position of this pin within its port.
    pub const INDEX: u8 = P;

    pub const fn new() -> Self {
        Self {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

impl<PORT, const P: u8, MODE> Default for Pin<PORT, P, MODE> {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_port {
    ($PORT:ty, $ddr:ident, $port:ident, $pin:ident) => {
        impl<const P: u8, MODE: PinMode> Pin<$PORT, P, MODE> {
            pub fn into_output(self) -> Pin<$PORT, P, Output> {
                // Set the DDR bit
                let port = unsafe { &*<$PORT>::ptr() };
                port.$ddr.modify(|r, w| unsafe { w.bits(r.bits() | (1 << P)) });
                Pin::new()
            }

            pub fn into_input(self) -> Pin<$PORT, P, Input> {
                // Clear the DDR bit and the pull-up
                let port = unsafe { &*<$PORT>::ptr() };
                port.$ddr.modify(|r, w| unsafe { w.bits(r.bits() & !(1 << P)) });
                port.$port.modify(|r, w| unsafe { w.bits(r.bits() & !(1 << P)) });
                Pin::new()
            }
        }

        impl<const P: u8> Pin<$PORT, P, Output> {
            #[inline]
            pub fn set_high(&mut self) {
                let port = unsafe { &*<$PORT>::ptr() };
                port.$port.modify(|r, w| unsafe { w.bits(r.bits() | (1 << P)) });
            }

            #[inline]
            pub fn set_low(&mut self) {
                let port = unsafe { &*<$PORT>::ptr() };
                port.$port.modify(|r, w| unsafe { w.bits(r.bits() & !(1 << P)) });
            }

            #[inline]
            pub fn toggle(&mut self) {
                // Writing a 1 to PINx flips the output latch
                let port = unsafe { &*<$PORT>::ptr() };
                port.$pin.write(|w| unsafe { w.bits(1 << P) });
            }
        }

        impl<const P: u8> Pin<$PORT, P, Input> {
            #[inline]
            pub fn is_high(&self) -> bool {
                let port = unsafe { &*<$PORT>::ptr() };
                port.$pin.read().bits() & (1 << P) != 0
            }

            #[inline]
            pub fn is_low(&self) -> bool {
                !self.is_high()
            }
        }

        impl<const P: u8> OutputPin for Pin<$PORT, P, Output> {
            type Error = Infallible;

            fn set_high(&mut self) -> Result<(), Infallible> {
                let port = unsafe { &*<$PORT>::ptr() };
                port.$port.modify(|r, w| unsafe { w.bits(r.bits() | (1 << P)) });
                Ok(())
            }

            fn set_low(&mut self) -> Result<(), Infallible> {
                let port = unsafe { &*<$PORT>::ptr() };
                port.$port.modify(|r, w| unsafe { w.bits(r.bits() & !(1 << P)) });
                Ok(())
            }
        }

        impl<const P: u8> ToggleableOutputPin for Pin<$PORT, P, Output> {
            type Error = Infallible;

            fn toggle(&mut self) -> Result<(), Infallible> {
                let port = unsafe { &*<$PORT>::ptr() };
                port.$pin.write(|w| unsafe { w.bits(1 << P) });
                Ok(())
            }
        }

        impl<const P: u8> InputPin for Pin<$PORT, P, Input> {
            type Error = Infallible;

            fn is_high(&self) -> Result<bool, Infallible> {
                let port = unsafe { &*<$PORT>::ptr() };
                Ok(port.$pin.read().bits() & (1 << P) != 0)
            }

            fn is_low(&self) -> Result<bool, Infallible> {
                let port = unsafe { &*<$PORT>::ptr() };
                Ok(port.$pin.read().bits() & (1 << P) == 0)
            }
        }
    };
}

// The three ports populated on the HMI board
impl_port!(PORTB, ddrb, portb, pinb);
impl_port!(PORTC, ddrc, portc, pinc);
impl_port!(PORTD, ddrd, portd, pind);

// HMI board pin assignments, bit positions from `config`
pub mod board {
    use super::{Output, Pin};
    use crate::config;
    use avr_device::atmega328p::{PORTB, PORTD};

    /// LCD register select
    pub type LcdRs = Pin<PORTB, { config::LCD_RS_PIN }, Output>;
    /// LCD enable strobe
    pub type LcdE = Pin<PORTB, { config::LCD_E_PIN }, Output>;

    // 4-bit data bus
    pub type LcdD4 = Pin<PORTD, { config::LCD_D4_PIN }, Output>;
    pub type LcdD5 = Pin<PORTD, { config::LCD_D5_PIN }, Output>;
    pub type LcdD6 = Pin<PORTD, { config::LCD_D6_PIN }, Output>;
    pub type LcdD7 = Pin<PORTD, { config::LCD_D7_PIN }, Output>;

    /// Alarm indicator
    pub type AlarmLed = Pin<PORTD, { config::LED_PIN }, Output>;
}

#[cfg(test)]
mod tests {
    use super::board;

    #[test]
    fn lcd_control_lines_use_distinct_bits() {
        assert_ne!(board::LcdRs::INDEX, board::LcdE::INDEX);
    }

    #[test]
    fn lcd_data_bus_uses_four_distinct_bits() {
        let bits = [
            board::LcdD4::INDEX,
            board::LcdD5::INDEX,
            board::LcdD6::INDEX,
            board::LcdD7::INDEX,
        ];
        for i in 0..bits.len() {
            for j in i + 1..bits.len() {
                assert_ne!(bits[i], bits[j]);
            }
        }
        for bit in bits {
            assert!(bit < 8);
        }
    }

    #[test]
    fn alarm_led_does_not_share_a_data_bus_bit() {
        let data = [
            board::LcdD4::INDEX,
            board::LcdD5::INDEX,
            board::LcdD6::INDEX,
            board::LcdD7::INDEX,
        ];
        for bit in data {
            assert_ne!(board::AlarmLed::INDEX, bit);
        }
    }
}
