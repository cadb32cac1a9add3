#![allow(dead_code)]

use std::{cell::Cell, collections::HashMap, f64::consts::PI};

use genmon_lib::{
    drivers::{
        adc::{AdcChannel, AnalogInput},
        serial::SerialSink,
    },
    time::Clock,
};

pub const ADC_MIDSCALE: f64 = 2048.0;

/// Clock that advances by `step_us` every time it is read.
pub struct ManualClock {
    now: Cell<u32>,
    step_us: u32,
}

impl ManualClock {
    pub fn starting_at(now: u32) -> Self {
        Self {
            now: Cell::new(now),
            step_us: 1,
        }
    }

    pub fn peek(&self) -> u32 {
        self.now.get()
    }

    pub fn set(&self, now: u32) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now_us(&self) -> u32 {
        let now = self.now.get();
        self.now.set(now.wrapping_add(self.step_us));
        now
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionFailed;

/// Converter replaying canned readings per channel, wrapping at the end.
#[derive(Default)]
pub struct ScriptedAdc {
    channels: HashMap<u8, (Vec<u16>, usize)>,
    selected: Option<AdcChannel>,
    stalled: Vec<u8>,
    failing: Vec<u8>,
    pub selections: Vec<AdcChannel>,
    pub reads: usize,
}

impl ScriptedAdc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, channel: AdcChannel, readings: Vec<u16>) -> Self {
        self.channels.insert(channel.0, (readings, 0));
        self
    }

    /// Channel never completes a conversion.
    pub fn with_stalled(mut self, channel: AdcChannel) -> Self {
        self.stalled.push(channel.0);
        self
    }

    pub fn with_failing(mut self, channel: AdcChannel) -> Self {
        self.failing.push(channel.0);
        self
    }
}

impl AnalogInput for ScriptedAdc {
    type Error = ConversionFailed;

    fn select_channel(&mut self, channel: AdcChannel) {
        self.selected = Some(channel);
        self.selections.push(channel);
    }

    fn read(&mut self) -> nb::Result<u16, ConversionFailed> {
        let channel = self.selected.expect("read before channel select").0;
        if self.stalled.contains(&channel) {
            return Err(nb::Error::WouldBlock);
        }
        if self.failing.contains(&channel) {
            return Err(nb::Error::Other(ConversionFailed));
        }

        let (readings, position) = self.channels.get_mut(&channel).expect("unscripted channel");
        let reading = readings[*position % readings.len()];
        *position += 1;
        self.reads += 1;
        Ok(reading)
    }
}

#[derive(Default)]
pub struct CapturedSerial {
    pub bytes: Vec<u8>,
}

impl CapturedSerial {
    pub fn text(&self) -> String {
        String::from_utf8(self.bytes.clone()).unwrap()
    }
}

impl SerialSink for CapturedSerial {
    type Error = ();

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ()> {
        self.bytes.extend_from_slice(bytes);
        Ok(())
    }
}

/// Sine around the converter midpoint, quantized to whole counts.
pub fn sine_readings(count: usize, frequency_hz: f64, amplitude: f64, sample_period_us: u32, phase: f64) -> Vec<u16> {
    (0..count)
        .map(|i| {
            let t = i as f64 * sample_period_us as f64 * 1e-6;
            (ADC_MIDSCALE + amplitude * (2.0 * PI * frequency_hz * t + phase).sin()).round() as u16
        })
        .collect()
}

pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}
