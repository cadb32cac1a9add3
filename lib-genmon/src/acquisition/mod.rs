use crate::{
    drivers::adc::AnalogInput,
    time::{elapsed_us, Clock},
};

pub mod sampler;

pub use sampler::{Acquisition, Sampler};

/// Converter reading widened to a signed value so baseline removal can go
/// negative.
pub type RawSample = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AcquisitionError {
    /// a conversion did not complete within the read timeout
    Timeout,
    /// the converter reported a failed conversion
    Converter,
}

/// Polls the converter until a reading is ready or `timeout_us` elapses.
pub fn read_with_timeout<A: AnalogInput, C: Clock>(
    adc: &mut A,
    clock: &C,
    timeout_us: u32,
) -> Result<u16, AcquisitionError> {
    let start = clock.now_us();
    loop {
        match adc.read() {
            Ok(sample) => return Ok(sample),
            Err(nb::Error::WouldBlock) => {
                if elapsed_us(start, clock.now_us()) > timeout_us {
                    return Err(AcquisitionError::Timeout);
                }
            }
            Err(nb::Error::Other(_)) => return Err(AcquisitionError::Converter),
        }
    }
}
