/// Input index on the analog converter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcChannel(pub u8);

impl AdcChannel {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Exclusively owned analog converter.
///
/// Channel selection is a side effect on the converter, so a caller must
/// finish every read on one channel before selecting the next.
pub trait AnalogInput {
    type Error;

    fn select_channel(&mut self, channel: AdcChannel);

    /// Polls one conversion on the selected channel.
    fn read(&mut self) -> nb::Result<u16, Self::Error>;
}

