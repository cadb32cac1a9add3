use crate::{
    config::MonitorConfig,
    drivers::adc::{AdcChannel, AnalogInput},
    time::{elapsed_us, Clock},
};

use super::{read_with_timeout, AcquisitionError, RawSample};

/// One capture held in the sampler's buffer. Borrowing the buffer keeps the
/// sampler from being reused until the capture has been analyzed.
pub struct Acquisition<'a> {
    pub channel: AdcChannel,
    pub samples: &'a mut [RawSample],
    /// readings pinned at either end of the converter range
    pub saturated: usize,
}

/// Fixed rate waveform capture into a buffer of `N` samples.
pub struct Sampler<const N: usize> {
    buffer: [RawSample; N],
}

impl<const N: usize> Sampler<N> {
    pub const fn new() -> Self {
        Self { buffer: [0; N] }
    }

    pub const fn sample_count(&self) -> usize {
        N
    }

    /// Captures `N` readings on `channel`, one every `sample_period_us`.
    ///
    /// Each sample period is measured from the start of the previous read
    /// and busy waited out. A read that runs long makes the next sample late
    /// rather than skipping it.
    pub fn acquire<A: AnalogInput, C: Clock>(
        &mut self,
        adc: &mut A,
        clock: &C,
        channel: AdcChannel,
        config: &MonitorConfig,
    ) -> Result<Acquisition<'_>, AcquisitionError> {
        adc.select_channel(channel);

        let mut saturated = 0;
        for sample in self.buffer.iter_mut() {
            let start = clock.now_us();
            let reading = read_with_timeout(adc, clock, config.read_timeout_us)?;
            if reading == 0 || reading >= config.adc_max_count {
                saturated += 1;
            }
            *sample = RawSample::from(reading);

            while elapsed_us(start, clock.now_us()) < config.sample_period_us {}
        }

        trace!("captured {} samples on channel {}", N, channel.0);

        Ok(Acquisition {
            channel,
            samples: &mut self.buffer,
            saturated,
        })
    }
}

impl<const N: usize> Default for Sampler<N> {
    fn default() -> Self {
        Self::new()
    }
}
