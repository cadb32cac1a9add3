mod common;

use std::f64::consts::FRAC_PI_4;

use common::{assert_close, sine_readings, CapturedSerial, ManualClock, ScriptedAdc};
use genmon_lib::{
    acquisition::Sampler,
    config::{
        MonitorConfig, BATTERY_CHANNEL, CURRENT_CHANNEL, POWER_SAMPLE_COUNT, UPDATE_PERIOD_US, VOLTAGE_CHANNEL,
    },
    monitor::Monitor,
    report::ReportLayout,
};

fn generator_adc(config: &MonitorConfig) -> ScriptedAdc {
    ScriptedAdc::new()
        .with_channel(
            VOLTAGE_CHANNEL,
            sine_readings(POWER_SAMPLE_COUNT, 60.0, 1000.0, config.sample_period_us, FRAC_PI_4),
        )
        .with_channel(
            CURRENT_CHANNEL,
            sine_readings(POWER_SAMPLE_COUNT, 60.0, 500.0, config.sample_period_us, 1.2),
        )
        .with_channel(BATTERY_CHANNEL, vec![3000])
}

/// Full scale square wave flipping at every 60 Hz half period, with the
/// last flip at the 18th crossing.
fn eighteen_crossing_adc(config: &MonitorConfig) -> ScriptedAdc {
    let flips: Vec<usize> = (0..18).map(|k| 417 + (k as f64 * 833.333) as usize).collect();
    let mut high = true;
    let voltage = (0..POWER_SAMPLE_COUNT)
        .map(|i| {
            if flips.contains(&i) {
                high = !high;
            }
            if high {
                3048
            } else {
                1048
            }
        })
        .collect();

    ScriptedAdc::new()
        .with_channel(VOLTAGE_CHANNEL, voltage)
        .with_channel(
            CURRENT_CHANNEL,
            sine_readings(POWER_SAMPLE_COUNT, 60.0, 500.0, config.sample_period_us, 1.2),
        )
        .with_channel(BATTERY_CHANNEL, vec![3000])
}

fn run_one_cycle(config: &MonitorConfig) -> String {
    run_one_cycle_with(config, generator_adc(config))
}

fn run_one_cycle_with(config: &MonitorConfig, adc: ScriptedAdc) -> String {
    let clock = ManualClock::starting_at(0);
    let mut sampler = Sampler::<POWER_SAMPLE_COUNT>::new();
    let mut monitor = Monitor::new(config, adc, &clock, CapturedSerial::default(), &mut sampler);

    assert!(monitor.poll().is_none());
    clock.set(UPDATE_PERIOD_US + 1);
    monitor.poll().expect("deadline passed").expect("cycle succeeded");

    monitor.serial().text()
}

fn fields(line: &str) -> Vec<&str> {
    assert!(line.starts_with('!'), "missing marker: {line:?}");
    assert!(line.ends_with('\n'), "missing newline: {line:?}");
    line[1..line.len() - 1].split(' ').collect()
}

fn assert_two_decimals(field: &str) {
    let (_, decimals) = field.split_once('.').expect("decimal point");
    assert_eq!(decimals.len(), 2, "{field}");
}

#[test]
fn sixty_hertz_generator_report() {
    let config = MonitorConfig::new();
    let text = run_one_cycle(&config);
    let fields = fields(&text);

    assert_eq!(fields.len(), 4);
    for field in &fields {
        assert_two_decimals(field);
    }

    let value = |i: usize| fields[i].parse::<f32>().unwrap();
    let voltage_rms = (1000.0 / 2f64.sqrt()) as f32 * config.voltage_scale;
    let current_rms = (500.0 / 2f64.sqrt()) as f32 * config.current_scale;

    assert_close(value(0), voltage_rms, voltage_rms * 0.005);
    assert_close(value(1), 60.0, 0.1);
    assert_close(value(2), current_rms, current_rms * 0.01 + 0.01);
    assert_eq!(fields[3], "14.65");
}

#[test]
fn single_channel_report_has_three_fields() {
    let config = MonitorConfig {
        layout: ReportLayout::SingleChannel,
        ..MonitorConfig::new()
    };
    let text = run_one_cycle(&config);
    let fields = fields(&text);

    assert_eq!(fields.len(), 3);
    assert_close(fields[1].parse().unwrap(), 60.0, 0.1);
    assert_eq!(fields[2], "14.65");
}

#[test]
fn eighteen_evenly_spaced_crossings_report() {
    let config = MonitorConfig::new();
    let text = run_one_cycle_with(&config, eighteen_crossing_adc(&config));
    let fields = fields(&text);

    assert_eq!(fields.len(), 4);
    for field in &fields {
        assert_two_decimals(field);
    }

    // 17 gaps averaged over 18 crossings reads high of 60 Hz
    assert_eq!(fields[1], "60.33");
    assert_close(fields[0].parse().unwrap(), 172.17, 0.05);
    assert_eq!(fields[3], "14.65");
}
