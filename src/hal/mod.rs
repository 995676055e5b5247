pub mod adc;
pub mod gpio;

// Re-export commonly used types
pub use adc::AdcChannel;
pub use gpio::board;
pub use gpio::{Input, Output, Pin};
