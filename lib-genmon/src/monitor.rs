use crate::{
    acquisition::{AcquisitionError, Sampler},
    config::MonitorConfig,
    drivers::{adc::AnalogInput, serial::SerialSink},
    power::{BatteryReader, BatteryReading, PowerReader, PowerReading},
    report::{ReportError, Reporter},
    time::{Clock, SyncTicker},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorState {
    /// spinning on the next deadline
    Idle,
    /// running one battery, power and report cycle
    Acquiring,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleError {
    Acquisition(AcquisitionError),
    Report(ReportError),
}

impl From<AcquisitionError> for CycleError {
    fn from(err: AcquisitionError) -> Self {
        CycleError::Acquisition(err)
    }
}

impl From<ReportError> for CycleError {
    fn from(err: ReportError) -> Self {
        CycleError::Report(err)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    pub power: PowerReading,
    pub battery: BatteryReading,
}

/// Single threaded acquire and report loop.
///
/// Owns the converter, the clock and the serial link for the life of the
/// firmware. The only state carried between cycles is the next deadline.
pub struct Monitor<'a, A, C, S, const N: usize>
where
    A: AnalogInput,
    C: Clock,
    S: SerialSink,
{
    adc: A,
    clock: C,
    serial: S,
    sampler: &'a mut Sampler<N>,

    ticker: SyncTicker,
    state: MonitorState,

    battery_reader: BatteryReader<'a>,
    power_reader: PowerReader<'a>,
    reporter: Reporter,
}

impl<'a, A, C, S, const N: usize> Monitor<'a, A, C, S, N>
where
    A: AnalogInput,
    C: Clock,
    S: SerialSink,
{
    /// The first cycle runs one full update period after construction.
    pub fn new(config: &'a MonitorConfig, adc: A, clock: C, serial: S, sampler: &'a mut Sampler<N>) -> Self {
        let cycle_us = config.cycle_duration_us(N);
        if cycle_us >= config.update_period_us {
            warn!(
                "cycle takes {} us, longer than the {} us update period",
                cycle_us,
                config.update_period_us
            );
        }

        let ticker = SyncTicker::every(config.update_period_us, clock.now_us());

        Self {
            adc,
            clock,
            serial,
            sampler,
            ticker,
            state: MonitorState::Idle,
            battery_reader: BatteryReader::new(config),
            power_reader: PowerReader::new(config),
            reporter: Reporter::new(config.layout),
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn next_deadline_us(&self) -> u32 {
        self.ticker.ready_at()
    }

    pub fn serial(&self) -> &S {
        &self.serial
    }

    /// Runs one cycle if the deadline has passed, otherwise returns `None`
    /// straight away.
    pub fn poll(&mut self) -> Option<Result<CycleReport, CycleError>> {
        if !self.ticker.next(self.clock.now_us()) {
            return None;
        }

        self.enter(MonitorState::Acquiring);
        let outcome = self.run_cycle();
        self.enter(MonitorState::Idle);

        if let Err(err) = &outcome {
            warn!("cycle skipped: {:?}", err);
        }

        Some(outcome)
    }

    fn enter(&mut self, state: MonitorState) {
        trace!("monitor {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    fn run_cycle(&mut self) -> Result<CycleReport, CycleError> {
        let battery = self.battery_reader.read(&mut self.adc, &self.clock)?;
        info!("battery voltage = {}", battery.voltage);

        let power = self.power_reader.read(self.sampler, &mut self.adc, &self.clock)?;
        info!(
            "power voltage = {}, frequency = {}, current = {}",
            power.voltage_rms,
            power.frequency_hz,
            power.current_rms
        );

        self.reporter.send(&mut self.serial, &power, &battery)?;

        Ok(CycleReport { power, battery })
    }

    /// Spins forever. With a single periodic task there is nothing else to
    /// give the processor to between deadlines.
    pub fn run(&mut self) -> ! {
        loop {
            let _ = self.poll();
        }
    }
}
