use embassy_rp::peripherals::*;

///////////////////////
//  voltage monitor  //
///////////////////////

// GPIO 26..28 are ADC inputs 0..2, in that order
pub type PowerAdc = ADC;
pub type PowerVoltageMonitorPin = PIN_26;
pub type BatteryVoltageMonitorPin = PIN_27;
pub type PowerCurrentMonitorPin = PIN_28;

//////////////////
//  report link  //
//////////////////

pub type ReportUart = UART0;
pub type ReportUartTxPin = PIN_0;
pub type ReportUartRxPin = PIN_1;

pub const REPORT_UART_BAUDRATE: u32 = 115_200;
