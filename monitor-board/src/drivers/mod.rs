pub mod adc;
pub mod serial;
