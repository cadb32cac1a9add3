use defmt::warn;
use embassy_rp::{
    adc::{self, Adc, Blocking, Channel},
    gpio::Pull,
};
use genmon_lib::drivers::adc::{AdcChannel, AnalogInput};

use crate::pins::{BatteryVoltageMonitorPin, PowerAdc, PowerCurrentMonitorPin, PowerVoltageMonitorPin};

const NUM_CHANNELS: usize = 3;

/// The single on-chip converter with the three monitor inputs.
pub struct MonitorAdc<'d> {
    inst: Adc<'d, Blocking>,
    channels: [Channel<'d>; NUM_CHANNELS],
    selected: usize,
}

impl<'d> MonitorAdc<'d> {
    pub fn new(
        peri: PowerAdc,
        voltage_pin: PowerVoltageMonitorPin,
        battery_pin: BatteryVoltageMonitorPin,
        current_pin: PowerCurrentMonitorPin,
    ) -> Self {
        let inst = Adc::new_blocking(peri, adc::Config::default());

        // indexed by converter input number
        let channels = [
            Channel::new_pin(voltage_pin, Pull::None),
            Channel::new_pin(battery_pin, Pull::None),
            Channel::new_pin(current_pin, Pull::None),
        ];

        MonitorAdc {
            inst,
            channels,
            selected: 0,
        }
    }
}

impl AnalogInput for MonitorAdc<'_> {
    type Error = adc::Error;

    fn select_channel(&mut self, channel: AdcChannel) {
        if channel.index() < NUM_CHANNELS {
            self.selected = channel.index();
        } else {
            warn!("no converter input {}, keeping input {}", channel.0, self.selected);
        }
    }

    fn read(&mut self) -> nb::Result<u16, adc::Error> {
        self.inst
            .blocking_read(&mut self.channels[self.selected])
            .map_err(nb::Error::Other)
    }
}
