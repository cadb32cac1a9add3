use crate::config::MonitorConfig;

use super::waveform::Crossings;

/// Reported when a capture does not look like a clean oscillation.
pub const FREQUENCY_UNDETERMINED: f32 = 0.0;

/// Line frequency from the mean spacing of zero crossings.
///
/// There is no hysteresis on the crossing detector. Noise around zero shows
/// up as extra crossings, and the plausible count window is the only filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrequencyEstimator {
    min_crossings_exclusive: usize,
    max_crossings_exclusive: usize,
    sample_period_s: f32,
    correction: f32,
}

impl FrequencyEstimator {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            min_crossings_exclusive: config.min_crossings_exclusive,
            max_crossings_exclusive: config.max_crossings_exclusive,
            sample_period_s: config.sample_period_us as f32 * 1e-6,
            correction: config.frequency_correction,
        }
    }

    pub fn is_plausible(&self, crossing_count: usize) -> bool {
        self.min_crossings_exclusive < crossing_count && crossing_count < self.max_crossings_exclusive
    }

    pub fn estimate(&self, crossings: &Crossings) -> f32 {
        let count = crossings.count();
        if !self.is_plausible(count) || crossings.is_truncated() {
            debug!("{} crossings, frequency undetermined", count);
            return FREQUENCY_UNDETERMINED;
        }

        let crossing_sum: usize = crossings
            .indices()
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .sum();

        // The sum covers count - 1 gaps but is divided by count. The
        // correction factor absorbs this along with the capture window not
        // lining up with the crossing instants.
        let half_period = self.correction * self.sample_period_s * crossing_sum as f32 / count as f32;
        if half_period <= 0.0 {
            return FREQUENCY_UNDETERMINED;
        }

        1.0 / (2.0 * half_period)
    }
}
