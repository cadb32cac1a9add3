use heapless::Vec;

use crate::acquisition::RawSample;

// Comfortably above the plausible crossing bound. Anything past this is
// counted but not stored.
pub const MAX_RECORDED_CROSSINGS: usize = 128;

/// Sample indices where the bias removed signal changed sign. Always
/// strictly increasing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Crossings {
    indices: Vec<usize, MAX_RECORDED_CROSSINGS>,
    count: usize,
    last: Option<usize>,
}

impl Crossings {
    pub const fn new() -> Self {
        Self {
            indices: Vec::new(),
            count: 0,
            last: None,
        }
    }

    /// Builds a set from known indices. Any index not after the one before
    /// it is dropped.
    pub fn from_indices(indices: &[usize]) -> Self {
        let mut crossings = Self::new();
        for &index in indices {
            crossings.record(index);
        }
        crossings
    }

    /// Returns false and leaves the set unchanged if `index` is not past the
    /// last recorded crossing.
    pub(crate) fn record(&mut self, index: usize) -> bool {
        if self.last.is_some_and(|last| index <= last) {
            warn!("crossing {} out of order, dropped", index);
            return false;
        }

        self.last = Some(index);
        self.count += 1;
        // full means the count is already implausible, drop the index
        let _ = self.indices.push(index);
        true
    }

    /// Total crossings seen, including any that did not fit in storage.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn is_truncated(&self) -> bool {
        self.count > self.indices.len()
    }
}

/// Integer mean of the capture, truncated toward zero.
pub fn baseline(samples: &[RawSample]) -> RawSample {
    if samples.is_empty() {
        return 0;
    }

    let total: i64 = samples.iter().map(|&s| i64::from(s)).sum();
    (total / samples.len() as i64) as RawSample
}

/// Subtracts the capture's own baseline in place and returns it.
pub fn remove_baseline(samples: &mut [RawSample]) -> RawSample {
    let base_line = baseline(samples);
    for sample in samples.iter_mut() {
        *sample -= base_line;
    }
    base_line
}

/// RMS of the samples after scaling each by `scale`.
pub fn rms(samples: &[RawSample], scale: f32) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let squares: f32 = samples
        .iter()
        .map(|&s| {
            let scaled = s as f32 * scale;
            scaled * scaled
        })
        .sum();

    libm::sqrtf(squares / samples.len() as f32)
}

/// Finds sign changes in a bias removed capture.
///
/// Each nonzero sample is compared against the last nonzero sample before
/// it. Exact zeros are stepped over, so `+ 0 -` is one crossing at the
/// negative sample and `+ 0 +` is none. Index 0 is never a crossing.
pub fn zero_crossings(samples: &[RawSample]) -> Crossings {
    let mut crossings = Crossings::new();
    let mut reference: RawSample = 0;

    for (i, &sample) in samples.iter().enumerate() {
        if sample == 0 {
            continue;
        }

        if reference.signum() * sample.signum() < 0 {
            crossings.record(i);
        }
        reference = sample;
    }

    crossings
}

/// Analyzed capture. Built fresh from every acquisition and dropped at the
/// end of the reading that produced it.
pub struct Waveform<'a> {
    samples: &'a [RawSample],
    baseline: RawSample,
    rms: f32,
    crossings: Crossings,
}

impl<'a> Waveform<'a> {
    pub fn analyze(samples: &'a mut [RawSample], scale: f32) -> Self {
        let baseline = remove_baseline(samples);
        let samples: &'a [RawSample] = samples;

        Self {
            samples,
            baseline,
            rms: rms(samples, scale),
            crossings: zero_crossings(samples),
        }
    }

    /// Bias removed samples.
    pub fn samples(&self) -> &[RawSample] {
        self.samples
    }

    pub fn baseline(&self) -> RawSample {
        self.baseline
    }

    pub fn rms(&self) -> f32 {
        self.rms
    }

    pub fn crossings(&self) -> &Crossings {
        &self.crossings
    }
}
