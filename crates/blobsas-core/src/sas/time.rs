//! SAS start/expiry and snapshot timestamp formats.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

/// Rendering of an absent user-delegation key start/expiry time.
pub(crate) const ZERO_SAS_TIME: &str = "0001-01-01T00:00:00Z";

/// Width of the fractional part written by the fractional-second format.
pub const CANONICAL_FRACTION_DIGITS: u8 = 7;

/// One of the ISO 8601 variants the service accepts for `st` and `se`.
///
/// Decoding records which variant matched so that re-encoding writes the same
/// text back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SasTimeFormat {
    /// `yyyy-MM-ddTHH:mm:ss.fffffffZ`; `digits` is the fractional width as written.
    Fractional { digits: u8 },
    /// `yyyy-MM-ddTHH:mm:ssZ`.
    #[default]
    Seconds,
    /// `yyyy-MM-ddTHH:mmZ`.
    Minutes,
    /// `yyyy-MM-dd`.
    Date,
}

impl SasTimeFormat {
    /// Accepted formats in decode priority order.
    pub const ALL: [SasTimeFormat; 4] = [
        SasTimeFormat::Fractional {
            digits: CANONICAL_FRACTION_DIGITS,
        },
        SasTimeFormat::Seconds,
        SasTimeFormat::Minutes,
        SasTimeFormat::Date,
    ];

    /// Human-readable layout, e.g. for help output.
    pub fn layout(&self) -> String {
        match *self {
            SasTimeFormat::Fractional { digits } => {
                format!("yyyy-MM-ddTHH:mm:ss.{}Z", "f".repeat(usize::from(digits)))
            }
            SasTimeFormat::Seconds => "yyyy-MM-ddTHH:mm:ssZ".to_string(),
            SasTimeFormat::Minutes => "yyyy-MM-ddTHH:mmZ".to_string(),
            SasTimeFormat::Date => "yyyy-MM-dd".to_string(),
        }
    }

    pub fn format(&self, t: &DateTime<Utc>) -> String {
        match *self {
            SasTimeFormat::Fractional { digits } => {
                let digits = usize::from(digits.clamp(1, 9));
                let nanos = format!("{:09}", t.nanosecond() % 1_000_000_000);
                format!("{}.{}Z", t.format("%Y-%m-%dT%H:%M:%S"), &nanos[..digits])
            }
            SasTimeFormat::Seconds => t.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            SasTimeFormat::Minutes => t.format("%Y-%m-%dT%H:%MZ").to_string(),
            SasTimeFormat::Date => t.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Parses a SAS start/expiry time, trying each accepted format from most to
/// least precise. Returns the instant and the format that matched.
pub fn parse_sas_time(value: &str) -> Option<(DateTime<Utc>, SasTimeFormat)> {
    if let Some(digits) = fraction_digits(value) {
        if let Ok(t) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.fZ") {
            return Some((Utc.from_utc_datetime(&t), SasTimeFormat::Fractional { digits }));
        }
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%SZ") {
        return Some((Utc.from_utc_datetime(&t), SasTimeFormat::Seconds));
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%MZ") {
        return Some((Utc.from_utc_datetime(&t), SasTimeFormat::Minutes));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let t = date.and_hms_opt(0, 0, 0)?;
    Some((Utc.from_utc_datetime(&t), SasTimeFormat::Date))
}

/// Width of a `.ddd` fraction directly before a trailing `Z`, if well formed.
fn fraction_digits(value: &str) -> Option<u8> {
    let body = value.strip_suffix('Z')?;
    let (_, fraction) = body.rsplit_once('.')?;
    if fraction.is_empty() || fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    u8::try_from(fraction.len()).ok()
}

/// Parses a snapshot timestamp: seven fractional digits followed by `Z` or a
/// `±hh:mm` offset.
pub fn parse_snapshot_time(value: &str) -> Option<DateTime<FixedOffset>> {
    let (_, rest) = value.split_once('.')?;
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits != usize::from(CANONICAL_FRACTION_DIGITS) {
        return None;
    }
    DateTime::parse_from_rfc3339(value).ok()
}

/// Formats a snapshot timestamp; a zero offset is written as `Z`.
pub fn format_snapshot_time(t: &DateTime<FixedOffset>) -> String {
    let zone = if t.offset().local_minus_utc() == 0 {
        "Z".to_string()
    } else {
        t.format("%:z").to_string()
    };
    format!(
        "{}.{:07}{}",
        t.format("%Y-%m-%dT%H:%M:%S"),
        t.nanosecond() % 1_000_000_000 / 100,
        zone
    )
}

/// Renders the start, expiry and snapshot times the way a string-to-sign
/// expects them. Absent times become empty strings.
pub fn format_times_for_sas_signing(
    start: Option<DateTime<Utc>>,
    expiry: Option<DateTime<Utc>>,
    snapshot: Option<DateTime<FixedOffset>>,
) -> (String, String, String) {
    let st = start
        .map(|t| SasTimeFormat::Seconds.format(&t))
        .unwrap_or_default();
    let se = expiry
        .map(|t| SasTimeFormat::Seconds.format(&t))
        .unwrap_or_default();
    let sh = snapshot
        .map(|t| format_snapshot_time(&t))
        .unwrap_or_default();
    (st, se, sh)
}
