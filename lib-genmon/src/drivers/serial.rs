/// Outbound half of the report link. Writes are fire and forget, nothing is
/// ever read back.
pub trait SerialSink {
    type Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

