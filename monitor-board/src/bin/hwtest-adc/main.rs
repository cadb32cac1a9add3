#![no_std]
#![no_main]

use defmt::*;
use {defmt_rtt as _, panic_probe as _};

use cortex_m_rt::entry;
use embassy_time::{block_for, Duration};

use genmon_lib::{
    acquisition::read_with_timeout,
    config::{MonitorConfig, BATTERY_CHANNEL, CURRENT_CHANNEL, VOLTAGE_CHANNEL},
    drivers::adc::AnalogInput,
};
use genmon_monitor_board::{drivers::adc::MonitorAdc, time::MonotonicClock};

#[entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());
    info!("adc bringup!");

    let config = MonitorConfig::new();
    let clock = MonotonicClock;
    let mut adc = MonitorAdc::new(p.ADC, p.PIN_26, p.PIN_27, p.PIN_28);

    loop {
        for (name, channel) in [
            ("voltage", VOLTAGE_CHANNEL),
            ("battery", BATTERY_CHANNEL),
            ("current", CURRENT_CHANNEL),
        ] {
            adc.select_channel(channel);
            match read_with_timeout(&mut adc, &clock, config.read_timeout_us) {
                Ok(raw) => info!("{}: {}", name, raw),
                Err(err) => warn!("{}: read failed {:?}", name, err),
            }
        }

        block_for(Duration::from_millis(1000));
    }
}
