//! Message types for the companion link
//!
//! Message types are divided into two categories:
//! - Phone → Watch: data item changes/deletions, wall time, timezone,
//!   heartbeat requests
//! - Watch → Phone: heartbeat responses

use heapless::{String, Vec};

use crate::datamap::{push, push_str, DataMap, Reader, MAX_TEXT_LEN};
use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};

// Message type IDs: Phone → Watch
pub const MSG_DATA_CHANGED: u8 = 0x01;
pub const MSG_DATA_DELETED: u8 = 0x02;
pub const MSG_TIMEZONE: u8 = 0x03;
pub const MSG_PING: u8 = 0x04;
pub const MSG_TIME_SYNC: u8 = 0x05;

// Message type IDs: Watch → Phone
pub const MSG_PONG: u8 = 0x20;

/// Maximum data item path length
pub const MAX_PATH_LEN: usize = 32;

/// Path the phone writes the current forecast to
pub const WEATHER_PATH: &str = "/weather_wear";
/// Today's high temperature, preformatted text
pub const KEY_HIGH: &str = "HIGH";
/// Today's low temperature, preformatted text
pub const KEY_LOW: &str = "MIN";
/// OpenWeatherMap condition code
pub const KEY_WEATHER_ID: &str = "WEATHER_ID";

/// A path plus its key/value content
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataItem {
    pub path: String<MAX_PATH_LEN>,
    pub map: DataMap,
}

impl DataItem {
    /// Create an item for `path` with an empty map
    pub fn new(path: &str) -> Result<Self, FrameError> {
        Ok(Self {
            path: String::try_from(path).map_err(|_| FrameError::PayloadTooLarge)?,
            map: DataMap::new(),
        })
    }

    /// Extract the forecast if this item lives on the weather path
    pub fn weather(&self) -> Option<WeatherPayload> {
        if self.path != WEATHER_PATH {
            return None;
        }
        Some(WeatherPayload {
            high: self.map.get_text(KEY_HIGH).and_then(|t| String::try_from(t).ok()),
            low: self.map.get_text(KEY_LOW).and_then(|t| String::try_from(t).ok()),
            // An absent id reads as 0, the "no condition" code
            weather_id: self.map.get_int(KEY_WEATHER_ID).unwrap_or(0),
        })
    }
}

/// Forecast fields as written by the phone
///
/// Fields are carried exactly as received; absent temperatures stay absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherPayload {
    pub high: Option<String<MAX_TEXT_LEN>>,
    pub low: Option<String<MAX_TEXT_LEN>>,
    pub weather_id: i32,
}

impl WeatherPayload {
    /// Build the data item the phone would write for this forecast
    pub fn to_data_item(&self) -> Result<DataItem, FrameError> {
        let mut item = DataItem::new(WEATHER_PATH)?;
        if let Some(high) = &self.high {
            item.map.put_text(KEY_HIGH, high)?;
        }
        if let Some(low) = &self.low {
            item.map.put_text(KEY_LOW, low)?;
        }
        item.map.put_int(KEY_WEATHER_ID, self.weather_id)?;
        Ok(item)
    }
}

/// Messages from the phone to the watch
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeerMessage {
    /// A data item was created or overwritten
    DataChanged(DataItem),
    /// A data item was removed
    DataDeleted(String<MAX_PATH_LEN>),
    /// The phone's timezone, as a fixed offset from UTC
    Timezone { offset_secs: i32 },
    /// Heartbeat request
    Ping,
    /// The phone's wall clock, milliseconds since the Unix epoch (UTC)
    TimeSync { epoch_ms: i64 },
}

impl PeerMessage {
    /// Parse a message from a received frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        let mut reader = Reader::new(&frame.payload);
        let message = match frame.msg_type {
            MSG_DATA_CHANGED => {
                let path = reader.string::<MAX_PATH_LEN>()?;
                let map = DataMap::decode(&mut reader)?;
                PeerMessage::DataChanged(DataItem { path, map })
            }
            MSG_DATA_DELETED => PeerMessage::DataDeleted(reader.string::<MAX_PATH_LEN>()?),
            MSG_TIMEZONE => PeerMessage::Timezone {
                offset_secs: reader.i32_le()?,
            },
            MSG_PING => PeerMessage::Ping,
            MSG_TIME_SYNC => PeerMessage::TimeSync {
                epoch_ms: reader.i64_le()?,
            },
            other => return Err(FrameError::UnknownType(other)),
        };

        // Trailing bytes mean the sender and receiver disagree on the layout
        if reader.remaining() != 0 {
            return Err(FrameError::InvalidFrame);
        }
        Ok(message)
    }

    /// Encode this message into a frame (used by the phone side and tests)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        let mut payload = Vec::<u8, MAX_PAYLOAD_SIZE>::new();
        let msg_type = match self {
            PeerMessage::DataChanged(item) => {
                push_str(&mut payload, &item.path)?;
                item.map.encode_into(&mut payload)?;
                MSG_DATA_CHANGED
            }
            PeerMessage::DataDeleted(path) => {
                push_str(&mut payload, path)?;
                MSG_DATA_DELETED
            }
            PeerMessage::Timezone { offset_secs } => {
                push(&mut payload, &offset_secs.to_le_bytes())?;
                MSG_TIMEZONE
            }
            PeerMessage::Ping => MSG_PING,
            PeerMessage::TimeSync { epoch_ms } => {
                push(&mut payload, &epoch_ms.to_le_bytes())?;
                MSG_TIME_SYNC
            }
        };
        Frame::new(msg_type, &payload)
    }
}

/// Messages from the watch to the phone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchMessage {
    /// Heartbeat response
    Pong,
}

impl WatchMessage {
    pub fn to_frame(&self) -> Frame {
        match self {
            WatchMessage::Pong => Frame::empty(MSG_PONG),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameParser;

    fn forecast(high: Option<&str>, low: Option<&str>, id: i32) -> WeatherPayload {
        WeatherPayload {
            high: high.map(|h| String::try_from(h).unwrap()),
            low: low.map(|l| String::try_from(l).unwrap()),
            weather_id: id,
        }
    }

    #[test]
    fn test_weather_item_from_wire() {
        let sent = forecast(Some("75°"), Some("60°"), 800);
        let message = PeerMessage::DataChanged(sent.to_data_item().unwrap());
        let bytes = message.to_frame().unwrap().encode_to_vec().unwrap();

        let mut parser = FrameParser::new();
        let (frame, _) = parser.feed_bytes(&bytes).unwrap().unwrap();
        let PeerMessage::DataChanged(item) = PeerMessage::from_frame(&frame).unwrap() else {
            panic!("expected a data item");
        };
        assert_eq!(item.path, WEATHER_PATH);
        assert_eq!(item.weather(), Some(sent));
    }

    #[test]
    fn test_missing_keys_stay_absent() {
        let mut item = DataItem::new(WEATHER_PATH).unwrap();
        item.map.put_text(KEY_HIGH, "75°").unwrap();

        let payload = item.weather().unwrap();
        assert_eq!(payload.high.as_deref(), Some("75°"));
        assert_eq!(payload.low, None);
        assert_eq!(payload.weather_id, 0);
    }

    #[test]
    fn test_other_paths_are_not_weather() {
        let mut item = DataItem::new("/settings").unwrap();
        item.map.put_int(KEY_WEATHER_ID, 800).unwrap();
        assert_eq!(item.weather(), None);
    }

    #[test]
    fn test_timezone_message() {
        let frame = PeerMessage::Timezone { offset_secs: -18_000 }.to_frame().unwrap();
        assert_eq!(frame.msg_type, MSG_TIMEZONE);
        assert_eq!(
            PeerMessage::from_frame(&frame).unwrap(),
            PeerMessage::Timezone { offset_secs: -18_000 }
        );
    }

    #[test]
    fn test_time_sync_from_wire() {
        let sent = PeerMessage::TimeSync {
            epoch_ms: 1_741_183_509_250,
        };
        let bytes = sent.to_frame().unwrap().encode_to_vec().unwrap();

        let mut parser = FrameParser::new();
        let (frame, _) = parser.feed_bytes(&bytes).unwrap().unwrap();
        assert_eq!(frame.msg_type, MSG_TIME_SYNC);
        assert_eq!(frame.payload.len(), 8);
        assert_eq!(PeerMessage::from_frame(&frame).unwrap(), sent);
    }

    #[test]
    fn test_time_sync_before_epoch() {
        let sent = PeerMessage::TimeSync { epoch_ms: -86_400_000 };
        let frame = sent.to_frame().unwrap();
        assert_eq!(PeerMessage::from_frame(&frame).unwrap(), sent);
    }

    #[test]
    fn test_truncated_time_sync_rejected() {
        let frame = Frame::new(MSG_TIME_SYNC, &[0x01, 0x02, 0x03, 0x04]).unwrap();
        assert_eq!(PeerMessage::from_frame(&frame), Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_unknown_type() {
        let frame = Frame::empty(0x55);
        assert_eq!(
            PeerMessage::from_frame(&frame),
            Err(FrameError::UnknownType(0x55))
        );
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let frame = Frame::new(MSG_PING, &[0x00]).unwrap();
        assert_eq!(PeerMessage::from_frame(&frame), Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_pong_frame() {
        let frame = WatchMessage::Pong.to_frame();
        assert_eq!(frame.msg_type, MSG_PONG);
        assert!(frame.payload.is_empty());
    }
}
