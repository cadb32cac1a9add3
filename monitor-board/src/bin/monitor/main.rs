#![no_std]
#![no_main]

use defmt::*;
use {defmt_rtt as _, panic_probe as _};

use cortex_m_rt::entry;
use embassy_executor::Executor;
use static_cell::StaticCell;

use genmon_lib::{
    acquisition::Sampler,
    config::{MonitorConfig, FIRMWARE_VERSION, POWER_SAMPLE_COUNT},
    monitor::Monitor,
};
use genmon_monitor_board::{
    drivers::{adc::MonitorAdc, serial::ReportSerial},
    pins::REPORT_UART_BAUDRATE,
    time::MonotonicClock,
};

static MONITOR_CONFIG: MonitorConfig = MonitorConfig::new();

// ~65 KiB, kept off the stack
static POWER_SAMPLER: StaticCell<Sampler<POWER_SAMPLE_COUNT>> = StaticCell::new();

static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

#[embassy_executor::task]
async fn monitor_task(adc: MonitorAdc<'static>, serial: ReportSerial<'static>) -> ! {
    let sampler = POWER_SAMPLER.init_with(Sampler::new);

    let mut monitor = Monitor::new(&MONITOR_CONFIG, adc, MonotonicClock, serial, sampler);
    monitor.run()
}

#[entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());

    info!("generator monitor version {}", FIRMWARE_VERSION);

    let adc = MonitorAdc::new(p.ADC, p.PIN_26, p.PIN_27, p.PIN_28);
    let serial = ReportSerial::new(p.UART0, p.PIN_0, p.PIN_1, REPORT_UART_BAUDRATE);

    // the monitor loop never yields, it is the only task
    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        unwrap!(spawner.spawn(monitor_task(adc, serial)));
    });
}
