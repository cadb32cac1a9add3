pub mod frequency;
pub mod waveform;

pub use frequency::{FrequencyEstimator, FREQUENCY_UNDETERMINED};
pub use waveform::{Crossings, Waveform, MAX_RECORDED_CROSSINGS};
