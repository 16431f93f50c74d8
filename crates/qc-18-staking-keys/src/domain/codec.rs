//! # Key Codec
//!
//! Fixed-width fragments that every key in the staking and distribution
//! namespaces is assembled from.
//!
//! ## Byte Order
//!
//! Byte order is chosen per field:
//!
//! | Order | Used for | Why it matters |
//! |-------|----------|----------------|
//! | Big-endian | vote power, inactive time, queue heights | byte order == numeric order, so prefix scans come back sorted |
//! | Little-endian | period, vote-window index, income height | only disambiguates within an already ordered prefix |
//!
//! Swapping either choice silently reorders range scan results.
//!
//! Integers are `i64` reinterpreted as `u64` (two's complement), which is
//! what the ledger has always stored. Only non-negative values sort
//! numerically under big-endian encoding.

use crate::domain::errors::KeyError;

pub use shared_types::ADDR_LEN;

/// Width in bytes of every encoded integer field.
pub const INT_LEN: usize = 8;

/// Width of a type tag.
pub const TAG_LEN: usize = 1;

pub fn encode_be(value: i64) -> [u8; INT_LEN] {
    (value as u64).to_be_bytes()
}

pub fn encode_le(value: i64) -> [u8; INT_LEN] {
    (value as u64).to_le_bytes()
}

pub fn decode_be(bytes: &[u8]) -> Result<i64, KeyError> {
    Ok(u64::from_be_bytes(int_bytes(bytes)?) as i64)
}

pub fn decode_le(bytes: &[u8]) -> Result<i64, KeyError> {
    Ok(u64::from_le_bytes(int_bytes(bytes)?) as i64)
}

fn int_bytes(bytes: &[u8]) -> Result<[u8; INT_LEN], KeyError> {
    bytes
        .try_into()
        .map_err(|_| KeyError::InvalidInteger {
            actual: bytes.len(),
        })
}

/// A family of keys sharing one type tag.
///
/// Tags are plain `u8` constants. Every key or prefix handed out is a
/// fresh allocation, so no two returned keys share a buffer.
pub trait KeyTable: Copy {
    /// One-byte type tag.
    fn tag(self) -> u8;

    /// Name used in corruption reports.
    fn table(self) -> &'static str;

    /// Prefix covering every key of this table.
    fn prefix(self) -> Vec<u8> {
        vec![self.tag()]
    }

    /// Start a key whose fields occupy exactly `body_len` bytes.
    fn writer(self, body_len: usize) -> KeyWriter {
        KeyWriter::new(self.tag(), body_len)
    }

    /// Open `key` for parsing, checking length and tag up front.
    fn reader(self, key: &[u8], body_len: usize) -> Result<KeyReader<'_>, KeyError> {
        KeyReader::open(key, self.table(), self.tag(), body_len)
    }
}

/// Builds a key into a buffer sized exactly for its layout.
#[derive(Debug)]
pub struct KeyWriter {
    expected: usize,
    buf: Vec<u8>,
}

impl KeyWriter {
    pub fn new(tag: u8, body_len: usize) -> Self {
        let expected = TAG_LEN + body_len;
        let mut buf = Vec::with_capacity(expected);
        buf.push(tag);
        Self { expected, buf }
    }

    pub fn address(mut self, address: &impl AsRef<[u8]>) -> Self {
        self.buf.extend_from_slice(address.as_ref());
        self
    }

    pub fn int_be(mut self, value: i64) -> Self {
        self.buf.extend_from_slice(&encode_be(value));
        self
    }

    pub fn int_le(mut self, value: i64) -> Self {
        self.buf.extend_from_slice(&encode_le(value));
        self
    }

    pub fn finish(self) -> Vec<u8> {
        debug_assert_eq!(self.buf.len(), self.expected);
        self.buf
    }
}

/// Reads fields back out of a key whose layout has already been checked.
#[derive(Debug)]
pub struct KeyReader<'a> {
    table: &'static str,
    expected: usize,
    rest: &'a [u8],
}

impl<'a> KeyReader<'a> {
    pub fn open(
        key: &'a [u8],
        table: &'static str,
        tag: u8,
        body_len: usize,
    ) -> Result<Self, KeyError> {
        let expected = TAG_LEN + body_len;
        if key.len() != expected {
            return Err(KeyError::InvalidLength {
                table,
                expected,
                actual: key.len(),
            });
        }
        if key[0] != tag {
            return Err(KeyError::UnknownTag {
                table,
                expected: tag,
                actual: key[0],
            });
        }
        Ok(Self {
            table,
            expected,
            rest: &key[TAG_LEN..],
        })
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], KeyError> {
        if self.rest.len() < len {
            return Err(KeyError::InvalidLength {
                table: self.table,
                expected: self.expected,
                actual: self.expected - self.rest.len() + len,
            });
        }
        let (head, tail) = self.rest.split_at(len);
        self.rest = tail;
        Ok(head)
    }

    /// Next [`ADDR_LEN`] bytes as any address kind.
    pub fn address<A: From<[u8; ADDR_LEN]>>(&mut self) -> Result<A, KeyError> {
        let bytes = self.take(ADDR_LEN)?;
        let mut raw = [0u8; ADDR_LEN];
        raw.copy_from_slice(bytes);
        Ok(A::from(raw))
    }

    pub fn int_be(&mut self) -> Result<i64, KeyError> {
        decode_be(self.take(INT_LEN)?)
    }

    pub fn int_le(&mut self) -> Result<i64, KeyError> {
        decode_le(self.take(INT_LEN)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ValAddress;

    #[derive(Clone, Copy)]
    struct TestTable;

    impl KeyTable for TestTable {
        fn tag(self) -> u8 {
            0x7F
        }

        fn table(self) -> &'static str {
            "test"
        }
    }

    #[test]
    fn test_big_endian_sorts_numerically() {
        assert!(encode_be(1) < encode_be(2));
        assert!(encode_be(255) < encode_be(256));
        assert!(encode_be(0) < encode_be(i64::MAX));
    }

    #[test]
    fn test_little_endian_does_not_sort_numerically() {
        // 256 = [0x00, 0x01, ...] sorts before 1 = [0x01, 0x00, ...]
        assert!(encode_le(256) < encode_le(1));
    }

    #[test]
    fn test_integer_decoding() {
        assert_eq!(decode_be(&encode_be(-5)).unwrap(), -5);
        assert_eq!(decode_le(&encode_le(1 << 40)).unwrap(), 1 << 40);
        assert_eq!(
            decode_be(&[0u8; 7]),
            Err(KeyError::InvalidInteger { actual: 7 })
        );
        assert!(decode_le(&[0u8; 9]).is_err());
    }

    #[test]
    fn test_writer_allocates_exact_length() {
        let addr = ValAddress::new([0xAA; ADDR_LEN]);
        let key = TestTable.writer(INT_LEN + ADDR_LEN).int_be(3).address(&addr).finish();

        assert_eq!(key.len(), TAG_LEN + INT_LEN + ADDR_LEN);
        assert_eq!(key[0], 0x7F);
        assert_eq!(&key[1..9], &[0, 0, 0, 0, 0, 0, 0, 3]);
        assert_eq!(&key[9..], addr.as_bytes());
    }

    #[test]
    fn test_prefix_is_fresh_each_call() {
        let mut first = TestTable.prefix();
        first.push(0x01);
        assert_eq!(TestTable.prefix(), vec![0x7F]);
    }

    #[test]
    fn test_reader_rejects_wrong_length_and_tag() {
        let err = TestTable.reader(&[0x7F, 0x00], INT_LEN).unwrap_err();
        assert_eq!(
            err,
            KeyError::InvalidLength {
                table: "test",
                expected: 9,
                actual: 2
            }
        );

        let err = TestTable.reader(&[0x01; 9], INT_LEN).unwrap_err();
        assert_eq!(
            err,
            KeyError::UnknownTag {
                table: "test",
                expected: 0x7F,
                actual: 0x01
            }
        );

        assert!(TestTable.reader(&[], 0).is_err());
    }

    #[test]
    fn test_reader_walks_fields_in_order() {
        let addr = ValAddress::new([0x42; ADDR_LEN]);
        let key = TestTable.writer(ADDR_LEN + INT_LEN).address(&addr).int_le(9).finish();

        let mut reader = TestTable.reader(&key, ADDR_LEN + INT_LEN).unwrap();
        let parsed: ValAddress = reader.address().unwrap();
        assert_eq!(parsed, addr);
        assert_eq!(reader.int_le().unwrap(), 9);
    }
}
