use embassy_rp::uart::{self, Blocking, Uart};
use genmon_lib::drivers::serial::SerialSink;

use crate::pins::{ReportUart, ReportUartRxPin, ReportUartTxPin};

pub struct ReportSerial<'d> {
    uart: Uart<'d, ReportUart, Blocking>,
}

impl<'d> ReportSerial<'d> {
    pub fn new(peri: ReportUart, tx_pin: ReportUartTxPin, rx_pin: ReportUartRxPin, baudrate: u32) -> Self {
        let mut config = uart::Config::default();
        config.baudrate = baudrate;

        ReportSerial {
            uart: Uart::new_blocking(peri, tx_pin, rx_pin, config),
        }
    }
}

impl SerialSink for ReportSerial<'_> {
    type Error = uart::Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), uart::Error> {
        self.uart.blocking_write(bytes)
    }
}
