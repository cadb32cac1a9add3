use crate::{
    acquisition::{read_with_timeout, AcquisitionError},
    config::MonitorConfig,
    drivers::adc::AnalogInput,
    time::Clock,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryReading {
    pub voltage: f32,
}

/// Battery voltage from a short burst of readings. The battery is DC, so
/// the readings are summed and scaled with no baseline removal.
pub struct BatteryReader<'a> {
    config: &'a MonitorConfig,
}

impl<'a> BatteryReader<'a> {
    pub const fn new(config: &'a MonitorConfig) -> Self {
        Self { config }
    }

    pub fn read<A: AnalogInput, C: Clock>(&self, adc: &mut A, clock: &C) -> Result<BatteryReading, AcquisitionError> {
        adc.select_channel(self.config.battery_channel);

        let mut sum: u32 = 0;
        for _ in 0..self.config.battery_sample_count {
            sum += u32::from(read_with_timeout(adc, clock, self.config.read_timeout_us)?);
            clock.delay_us(self.config.battery_sample_delay_us);
        }

        Ok(BatteryReading {
            voltage: sum as f32 * self.config.battery_scale,
        })
    }
}
