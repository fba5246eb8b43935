//! Key/value maps carried by data items
//!
//! Encoding:
//! ```text
//! [count] { [key_len][key bytes][tag][value] } * count
//!
//! tag 0x01: text    -> [len][utf8 bytes]
//! tag 0x02: integer -> 4 bytes, i32 little-endian
//! ```

use heapless::{String, Vec};

use crate::frame::{FrameError, MAX_PAYLOAD_SIZE};

/// Maximum key length in bytes
pub const MAX_KEY_LEN: usize = 16;

/// Maximum text value length in bytes
pub const MAX_TEXT_LEN: usize = 16;

/// Maximum entries per map
pub const MAX_ENTRIES: usize = 8;

const TAG_TEXT: u8 = 0x01;
const TAG_INT: u8 = 0x02;

/// A single value in a [`DataMap`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataValue {
    Text(String<MAX_TEXT_LEN>),
    Int(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Entry {
    key: String<MAX_KEY_LEN>,
    value: DataValue,
}

/// Small ordered key/value map
///
/// Putting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataMap {
    entries: Vec<Entry, MAX_ENTRIES>,
}

impl DataMap {
    /// Create an empty map
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace a value
    pub fn put(&mut self, key: &str, value: DataValue) -> Result<(), FrameError> {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.value = value;
            return Ok(());
        }
        let key = String::try_from(key).map_err(|_| FrameError::PayloadTooLarge)?;
        self.entries
            .push(Entry { key, value })
            .map_err(|_| FrameError::PayloadTooLarge)
    }

    /// Insert or replace a text value
    pub fn put_text(&mut self, key: &str, text: &str) -> Result<(), FrameError> {
        let text = String::try_from(text).map_err(|_| FrameError::PayloadTooLarge)?;
        self.put(key, DataValue::Text(text))
    }

    /// Insert or replace an integer value
    pub fn put_int(&mut self, key: &str, value: i32) -> Result<(), FrameError> {
        self.put(key, DataValue::Int(value))
    }

    /// Look up a raw value
    pub fn get(&self, key: &str) -> Option<&DataValue> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    /// Look up a text value; integers under the key do not count
    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(DataValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Look up an integer value; text under the key does not count
    pub fn get_int(&self, key: &str) -> Option<i32> {
        match self.get(key) {
            Some(DataValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// Append the encoded map to `out`
    pub fn encode_into(&self, out: &mut Vec<u8, MAX_PAYLOAD_SIZE>) -> Result<(), FrameError> {
        push(out, &[self.entries.len() as u8])?;
        for entry in &self.entries {
            push_str(out, &entry.key)?;
            match &entry.value {
                DataValue::Text(text) => {
                    push(out, &[TAG_TEXT])?;
                    push_str(out, text)?;
                }
                DataValue::Int(value) => {
                    push(out, &[TAG_INT])?;
                    push(out, &value.to_le_bytes())?;
                }
            }
        }
        Ok(())
    }

    /// Decode a map from the reader's current position
    pub fn decode(reader: &mut Reader<'_>) -> Result<Self, FrameError> {
        let count = reader.u8()? as usize;
        if count > MAX_ENTRIES {
            return Err(FrameError::InvalidFrame);
        }

        let mut map = Self::new();
        for _ in 0..count {
            let key = reader.string::<MAX_KEY_LEN>()?;
            let value = match reader.u8()? {
                TAG_TEXT => DataValue::Text(reader.string::<MAX_TEXT_LEN>()?),
                TAG_INT => DataValue::Int(reader.i32_le()?),
                _ => return Err(FrameError::InvalidFrame),
            };
            map.put(&key, value)?;
        }
        Ok(map)
    }
}

/// Cursor over a frame payload
pub struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub fn take(&mut self, n: usize) -> Result<&'a [u8], FrameError> {
        let end = self.pos.checked_add(n).ok_or(FrameError::InvalidFrame)?;
        let slice = self.bytes.get(self.pos..end).ok_or(FrameError::InvalidFrame)?;
        self.pos = end;
        Ok(slice)
    }

    pub fn u8(&mut self) -> Result<u8, FrameError> {
        Ok(self.take(1)?[0])
    }

    pub fn i32_le(&mut self) -> Result<i32, FrameError> {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(self.take(4)?);
        Ok(i32::from_le_bytes(raw))
    }

    pub fn i64_le(&mut self) -> Result<i64, FrameError> {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(self.take(8)?);
        Ok(i64::from_le_bytes(raw))
    }

    /// Length-prefixed UTF-8 string of at most `N` bytes
    pub fn string<const N: usize>(&mut self) -> Result<String<N>, FrameError> {
        let len = self.u8()? as usize;
        let raw = self.take(len)?;
        let text = core::str::from_utf8(raw).map_err(|_| FrameError::InvalidFrame)?;
        String::try_from(text).map_err(|_| FrameError::InvalidFrame)
    }
}

pub(crate) fn push(out: &mut Vec<u8, MAX_PAYLOAD_SIZE>, bytes: &[u8]) -> Result<(), FrameError> {
    out.extend_from_slice(bytes)
        .map_err(|_| FrameError::PayloadTooLarge)
}

pub(crate) fn push_str(out: &mut Vec<u8, MAX_PAYLOAD_SIZE>, text: &str) -> Result<(), FrameError> {
    let len = u8::try_from(text.len()).map_err(|_| FrameError::PayloadTooLarge)?;
    push(out, &[len])?;
    push(out, text.as_bytes())
}
