//! Marshalled buffer layout
//!
//! ```text
//! [u32 format_count]
//! format_count x [u32 format_id][u32 payload_len][payload_len bytes]
//! ```
//!
//! All integers are big-endian. There is no version tag or end marker; the
//! length is implied by the embedded counts.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

use crate::domain::clipboard::ClipboardFormat;
use crate::domain::error::WireError;

use super::integer::{write_u32, WireReader, U32_LEN};

/// Size of a record header (id + length)
pub const RECORD_HEADER_LEN: usize = 2 * U32_LEN;

/// One `(id, payload)` record as it appears on the wire.
///
/// The id is kept raw so records from a newer peer survive decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRecord {
    id: u32,
    payload: Bytes,
}

impl WireRecord {
    /// Build a record, rejecting payloads whose length does not fit a `u32`
    pub fn new(id: u32, payload: Bytes) -> Result<Self, WireError> {
        if u32::try_from(payload.len()).is_err() {
            return Err(WireError::PayloadTooLarge {
                id,
                len: payload.len(),
            });
        }
        Ok(Self { id, payload })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Known format for this id, if any
    pub fn format(&self) -> Option<ClipboardFormat> {
        ClipboardFormat::from_id(self.id)
    }

    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    pub fn into_payload(self) -> Bytes {
        self.payload
    }

    fn encoded_len(&self) -> usize {
        RECORD_HEADER_LEN + self.payload.len()
    }
}

/// Result of structurally decoding a buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedBuffer {
    /// Records in buffer order, known and unknown ids alike
    pub records: Vec<WireRecord>,
    /// Bytes left over after the last declared record
    pub trailing: usize,
}

/// Exact size of the buffer `encode` will produce
pub fn encoded_len(records: &[WireRecord]) -> usize {
    U32_LEN + records.iter().map(WireRecord::encoded_len).sum::<usize>()
}

/// Encode records in the given order into a single buffer.
///
/// The output is allocated once at its final size.
pub fn encode(records: &[WireRecord]) -> Bytes {
    let mut out = BytesMut::with_capacity(encoded_len(records));
    // Counts and lengths fit: `WireRecord::new` checked every payload and a
    // slice cannot hold u32::MAX records of 8+ bytes each on any real target.
    write_u32(&mut out, records.len() as u32);
    for record in records {
        write_u32(&mut out, record.id);
        write_u32(&mut out, record.payload.len() as u32);
        out.put_slice(&record.payload);
    }
    out.freeze()
}

/// Structurally decode an untrusted buffer.
///
/// Every count, id, length and payload is checked against the remaining
/// bytes before it is read. Unknown ids are returned as-is so the caller
/// decides whether to keep them.
pub fn decode(buf: Bytes) -> Result<DecodedBuffer, WireError> {
    let mut reader = WireReader::new(buf);
    let count = reader.read_u32()? as usize;

    // The count is untrusted; never reserve more than the buffer could hold.
    let mut records = Vec::with_capacity(count.min(reader.remaining() / RECORD_HEADER_LEN));
    for _ in 0..count {
        let id = reader.read_u32()?;
        let len = reader.read_u32()? as usize;
        let payload = reader.read_bytes(len)?;
        records.push(WireRecord { id, payload });
    }

    let trailing = reader.remaining();
    if trailing > 0 {
        debug!(trailing, "ignoring bytes after last record");
    }

    Ok(DecodedBuffer { records, trailing })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, payload: &'static [u8]) -> WireRecord {
        WireRecord::new(id, Bytes::from_static(payload)).unwrap()
    }

    #[test]
    fn encode_single_text_record() {
        let buf = encode(&[record(0, b"hi")]);
        assert_eq!(
            &buf[..],
            &[0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, b'h', b'i']
        );
    }

    #[test]
    fn encode_empty_is_count_only() {
        let buf = encode(&[]);
        assert_eq!(&buf[..], &[0, 0, 0, 0]);
    }

    #[test]
    fn encoded_len_matches_output() {
        let records = [record(0, b"hello"), record(2, b""), record(1, b"<b>x</b>")];
        assert_eq!(encode(&records).len(), encoded_len(&records));
        assert_eq!(encoded_len(&records), 4 + (8 + 5) + 8 + (8 + 8));
    }

    #[test]
    fn decode_keeps_unknown_ids() {
        let buf = encode(&[record(0, b"a"), record(99, b"future"), record(1, b"b")]);
        let decoded = decode(buf).unwrap();
        let ids: Vec<u32> = decoded.records.iter().map(WireRecord::id).collect();
        assert_eq!(ids, [0, 99, 1]);
        assert_eq!(decoded.records[1].format(), None);
        assert_eq!(decoded.records[2].payload(), &Bytes::from_static(b"b"));
        assert_eq!(decoded.trailing, 0);
    }

    #[test]
    fn decode_reports_trailing_bytes() {
        let mut raw = encode(&[record(0, b"x")]).to_vec();
        raw.extend_from_slice(b"junk");
        let decoded = decode(Bytes::from(raw)).unwrap();
        assert_eq!(decoded.records.len(), 1);
        assert_eq!(decoded.trailing, 4);
    }

    #[test]
    fn decode_rejects_empty_buffer() {
        assert!(matches!(
            decode(Bytes::new()),
            Err(WireError::Truncated { offset: 0, .. })
        ));
    }

    #[test]
    fn decode_rejects_huge_count_without_allocating() {
        let buf = Bytes::from_static(&[0xff, 0xff, 0xff, 0xff]);
        assert_eq!(
            decode(buf),
            Err(WireError::Truncated {
                offset: 4,
                needed: 4,
                available: 0
            })
        );
    }

    #[test]
    fn decode_rejects_length_past_end() {
        let buf = Bytes::from_static(&[0, 0, 0, 1, 0, 0, 0, 0, 0xff, 0xff, 0xff, 0xff, b'h']);
        assert_eq!(
            decode(buf),
            Err(WireError::Truncated {
                offset: 12,
                needed: 0xffff_ffff,
                available: 1
            })
        );
    }
}
