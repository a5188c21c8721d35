//! PRI demultiplexing.
//!
//! A PRI packs `facility * 8 + priority`. Decoding never fails: codes outside
//! the tables simply have no name.

use crate::domain::{Facility, Priority};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedPri {
    pub facility: Option<Facility>,
    pub priority: Option<Priority>,
}

/// Integer coercion that never fails.
///
/// Reads the leading run of ASCII digits after optional whitespace. No digits
/// yields 0 and overflow saturates.
pub fn lenient_int(raw: &str) -> u64 {
    raw.trim_start()
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
        })
}

pub fn decode(pri: u64) -> DecodedPri {
    DecodedPri {
        facility: Facility::from_code(pri >> 3),
        priority: Priority::from_code(pri & 0b111),
    }
}

/// Decode a raw PRI field; an absent field decodes as 0.
pub fn decode_field(raw: Option<&str>) -> DecodedPri {
    decode(raw.map_or(0, lenient_int))
}
