use crate::{
    acquisition::{Acquisition, AcquisitionError, Sampler},
    analysis::{FrequencyEstimator, Waveform},
    config::MonitorConfig,
    drivers::adc::AnalogInput,
    time::Clock,
};

pub mod battery;

pub use battery::{BatteryReader, BatteryReading};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerReading {
    pub voltage_rms: f32,
    pub current_rms: f32,
    /// 0.0 when the capture did not yield a plausible frequency
    pub frequency_hz: f32,
}

/// Reads line voltage, line frequency and load current.
///
/// The voltage and current captures share the sampler and the converter and
/// always run back to back, voltage first.
pub struct PowerReader<'a> {
    config: &'a MonitorConfig,
    estimator: FrequencyEstimator,
}

impl<'a> PowerReader<'a> {
    pub fn new(config: &'a MonitorConfig) -> Self {
        Self {
            config,
            estimator: FrequencyEstimator::new(config),
        }
    }

    pub fn read<A: AnalogInput, C: Clock, const N: usize>(
        &self,
        sampler: &mut Sampler<N>,
        adc: &mut A,
        clock: &C,
    ) -> Result<PowerReading, AcquisitionError> {
        let (voltage_rms, frequency_hz) = {
            let acquisition = sampler.acquire(adc, clock, self.config.voltage_channel, self.config)?;
            warn_saturated(&acquisition, N);

            let waveform = Waveform::analyze(acquisition.samples, self.config.voltage_scale);
            (waveform.rms(), self.estimator.estimate(waveform.crossings()))
        };

        // crossings on the current channel are ignored
        let current_rms = {
            let acquisition = sampler.acquire(adc, clock, self.config.current_channel, self.config)?;
            warn_saturated(&acquisition, N);

            Waveform::analyze(acquisition.samples, self.config.current_scale).rms()
        };

        Ok(PowerReading {
            voltage_rms,
            current_rms,
            frequency_hz,
        })
    }
}

fn warn_saturated(acquisition: &Acquisition<'_>, sample_count: usize) {
    if acquisition.saturated > 0 {
        warn!(
            "channel {} saturated on {} of {} samples",
            acquisition.channel.0,
            acquisition.saturated,
            sample_count
        );
    }
}
