// Compile-time configuration for the generator monitor. One immutable
// MonitorConfig is built at start-up and lent to every component.

use crate::{drivers::adc::AdcChannel, report::ReportLayout};

pub const FIRMWARE_VERSION: u32 = 4;

//////////////////////
//  power sampling  //
//////////////////////

// 16667 samples at 10us captures 10 cycles of a 60 Hz line.
pub const POWER_SAMPLE_COUNT: usize = 16667;
pub const POWER_SAMPLE_PERIOD_US: u32 = 10;

// Generator output is 230V RMS, 650V peak to peak. The front end scales the
// 650V swing to roughly 3000 counts on the 12 bit converter.
pub const VOLTAGE_SCALE: f32 = 0.173043;
pub const CURRENT_SCALE: f32 = 0.0122;

// a clean 10 cycle capture produces ~20 crossings
pub const MIN_CROSSINGS_EXCLUSIVE: usize = 10;
pub const MAX_CROSSINGS_EXCLUSIVE: usize = 100;
pub const FREQUENCY_CORRECTION: f32 = 1.053;

/////////////////////////
//  battery sampling  //
/////////////////////////

pub const BATTERY_SAMPLE_COUNT: usize = 16;
pub const BATTERY_SAMPLE_DELAY_US: u32 = 1_000;
// sum of 16 readings scaled to 20V full scale
pub const BATTERY_SCALE: f32 = 305.18e-6;

/////////////////
//  converter  //
/////////////////

pub const ADC_MAX_COUNT: u16 = 4095;
pub const ADC_READ_TIMEOUT_US: u32 = 1_000;

pub const VOLTAGE_CHANNEL: AdcChannel = AdcChannel(0);
pub const BATTERY_CHANNEL: AdcChannel = AdcChannel(1);
pub const CURRENT_CHANNEL: AdcChannel = AdcChannel(2);

/////////////////
//  reporting  //
/////////////////

pub const UPDATE_PERIOD_US: u32 = 10_000_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonitorConfig {
    pub sample_period_us: u32,
    pub update_period_us: u32,

    pub voltage_scale: f32,
    pub current_scale: f32,

    pub battery_scale: f32,
    pub battery_sample_count: usize,
    pub battery_sample_delay_us: u32,

    pub min_crossings_exclusive: usize,
    pub max_crossings_exclusive: usize,
    pub frequency_correction: f32,

    pub adc_max_count: u16,
    pub read_timeout_us: u32,

    pub voltage_channel: AdcChannel,
    pub battery_channel: AdcChannel,
    pub current_channel: AdcChannel,

    pub layout: ReportLayout,
}

impl MonitorConfig {
    pub const fn new() -> Self {
        Self {
            sample_period_us: POWER_SAMPLE_PERIOD_US,
            update_period_us: UPDATE_PERIOD_US,
            voltage_scale: VOLTAGE_SCALE,
            current_scale: CURRENT_SCALE,
            battery_scale: BATTERY_SCALE,
            battery_sample_count: BATTERY_SAMPLE_COUNT,
            battery_sample_delay_us: BATTERY_SAMPLE_DELAY_US,
            min_crossings_exclusive: MIN_CROSSINGS_EXCLUSIVE,
            max_crossings_exclusive: MAX_CROSSINGS_EXCLUSIVE,
            frequency_correction: FREQUENCY_CORRECTION,
            adc_max_count: ADC_MAX_COUNT,
            read_timeout_us: ADC_READ_TIMEOUT_US,
            voltage_channel: VOLTAGE_CHANNEL,
            battery_channel: BATTERY_CHANNEL,
            current_channel: CURRENT_CHANNEL,
            layout: ReportLayout::MultiChannel,
        }
    }

    /// Blocking time of one waveform acquisition of `sample_count` samples.
    pub const fn acquisition_window_us(&self, sample_count: usize) -> u32 {
        self.sample_period_us * sample_count as u32
    }

    /// Lower bound on one full cycle: battery averaging plus the voltage and
    /// current captures.
    pub const fn cycle_duration_us(&self, sample_count: usize) -> u32 {
        let battery_window = self.battery_sample_count as u32 * self.battery_sample_delay_us;
        battery_window + 2 * self.acquisition_window_us(sample_count)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new()
    }
}
