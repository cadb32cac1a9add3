use core::fmt::Write;

use heapless::String;

use crate::{
    drivers::serial::SerialSink,
    power::{BatteryReading, PowerReading},
};

pub const REPORT_MARKER: char = '!';
pub const REPORT_LINE_CAPACITY: usize = 80;

pub type ReportLine = String<REPORT_LINE_CAPACITY>;

/// Field layout of the report line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportLayout {
    /// `!<voltage> <frequency> <battery>`
    SingleChannel,
    /// `!<voltage> <frequency> <current> <battery>`
    MultiChannel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportError {
    /// formatted fields did not fit in the line buffer
    Overflow,
    Serial,
}

pub struct Reporter {
    layout: ReportLayout,
}

impl Reporter {
    pub const fn new(layout: ReportLayout) -> Self {
        Self { layout }
    }

    /// Formats one newline terminated report, every field to two decimals.
    pub fn format_line(&self, power: &PowerReading, battery: &BatteryReading) -> Result<ReportLine, ReportError> {
        let mut line = ReportLine::new();

        let written = match self.layout {
            ReportLayout::SingleChannel => write!(
                line,
                "{}{:.2} {:.2} {:.2}\n",
                REPORT_MARKER, power.voltage_rms, power.frequency_hz, battery.voltage
            ),
            ReportLayout::MultiChannel => write!(
                line,
                "{}{:.2} {:.2} {:.2} {:.2}\n",
                REPORT_MARKER, power.voltage_rms, power.frequency_hz, power.current_rms, battery.voltage
            ),
        };
        written.map_err(|_| ReportError::Overflow)?;

        Ok(line)
    }

    /// Writes one report to the serial link. Nothing is awaited in return.
    pub fn send<S: SerialSink>(
        &self,
        serial: &mut S,
        power: &PowerReading,
        battery: &BatteryReading,
    ) -> Result<(), ReportError> {
        let line = self.format_line(power, battery)?;
        serial.write_bytes(line.as_bytes()).map_err(|_| ReportError::Serial)
    }
}
