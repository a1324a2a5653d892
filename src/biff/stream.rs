//! BIFF record stream.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::util::Result;

use super::format::RECORD_HEADER_SIZE;

/// Framed record writer over a caller-owned byte sink.
///
/// Tracks the stream position for diagnostics. Never closes the sink; the
/// caller's scoped-resource discipline owns its lifetime.
pub struct RecordStream<'a, W: Write> {
    sink: &'a mut W,
    pos: u64,
}

impl<'a, W: Write> RecordStream<'a, W> {
    /// Wrap a sink.
    pub fn new(sink: &'a mut W) -> Self {
        Self { sink, pos: 0 }
    }

    /// Current stream position.
    #[inline]
    pub fn pos(&self) -> u64 {
        self.pos
    }

    /// Write one framed record: id, payload length, payload bytes.
    pub fn record(&mut self, id: u16, payload: &[u8]) -> Result<()> {
        debug_assert!(payload.len() <= u16::MAX as usize);
        self.sink.write_u16::<LittleEndian>(id)?;
        self.sink.write_u16::<LittleEndian>(payload.len() as u16)?;
        self.sink.write_all(payload)?;
        self.pos += (RECORD_HEADER_SIZE + payload.len()) as u64;
        Ok(())
    }

    /// Flush the sink.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_framing() {
        let mut sink = Vec::new();
        let mut stream = RecordStream::new(&mut sink);

        stream.record(0x0009, &[0xAA, 0xBB]).unwrap();

        assert_eq!(stream.pos(), 6);
        assert_eq!(sink, [0x09, 0x00, 0x02, 0x00, 0xAA, 0xBB]);
    }

    #[test]
    fn test_empty_payload() {
        let mut sink = Vec::new();
        let mut stream = RecordStream::new(&mut sink);

        stream.record(0x000A, &[]).unwrap();

        assert_eq!(sink, [0x0A, 0x00, 0x00, 0x00]);
    }
}
