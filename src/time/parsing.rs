//! Parsing of UTC offset and timezone strings from configuration.

use super::error::TimeError;
use super::structs::OffsetSource;
use chrono::FixedOffset;
use chrono_tz::Tz;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static RE_OFFSET: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([+-])(\d{2}):?(\d{2})$").ok());

/// Parses an offset string like "+02:00", "-0500", or "Z" into offset seconds.
pub fn parse_offset_string(offset_str: &str) -> Option<i32> {
    if offset_str == "Z" {
        return Some(0);
    }
    let caps = RE_OFFSET.as_ref()?.captures(offset_str)?;
    let sign = if caps.get(1)?.as_str() == "-" { -1 } else { 1 };
    let hours = caps.get(2)?.as_str().parse::<i32>().ok()?;
    let minutes = caps.get(3)?.as_str().parse::<i32>().ok()?;
    if hours > 14 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}

impl FromStr for OffsetSource {
    type Err = TimeError;

    /// Accepts a fixed offset (`+01:00`, `-0500`, `Z`), an IANA zone name
    /// (`Europe/Madrid`), or `auto` to use the zone at the photo's location.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::FromLocation);
        }
        if let Some(offset) = parse_offset_string(s).and_then(FixedOffset::east_opt) {
            return Ok(Self::Fixed(offset));
        }
        Tz::from_str(s)
            .map(Self::Zone)
            .map_err(|_| TimeError::InvalidOffset(s.to_string()))
    }
}
