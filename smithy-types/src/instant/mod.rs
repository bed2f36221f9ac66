/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum InstantParseError {
    Invalid(String),
    OutOfRange,
}

impl Display for InstantParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InstantParseError::Invalid(reason) => write!(f, "invalid timestamp: {}", reason),
            InstantParseError::OutOfRange => write!(f, "timestamp out of range"),
        }
    }
}

impl Error for InstantParseError {}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * NANOS_PER_SECOND as f64) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let mut seconds = -(duration.as_secs() as i64);
                let mut nanos = duration.subsec_nanos();
                if nanos != 0 {
                    seconds -= 1;
                    nanos = NANOS_PER_SECOND - nanos;
                }
                Instant::from_secs_and_nanos(seconds, nanos)
            }
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, InstantParseError> {
        match format {
            Format::DateTime => DateTime::parse_from_rfc3339(s)
                .map(|dt| Instant::from_secs_and_nanos(dt.timestamp(), dt.timestamp_subsec_nanos()))
                .map_err(|err| InstantParseError::Invalid(err.to_string())),
            Format::HttpDate => DateTime::parse_from_rfc2822(s)
                .map(|dt| Instant::from_secs_and_nanos(dt.timestamp(), dt.timestamp_subsec_nanos()))
                .map_err(|err| InstantParseError::Invalid(err.to_string())),
            Format::EpochSeconds => parse_epoch_seconds(s),
        }
    }

    fn to_chrono(self) -> Result<DateTime<Utc>, InstantParseError> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos)
            .single()
            .ok_or(InstantParseError::OutOfRange)
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                Ok(date) => {
                    let rfc3339 = date.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                    trim_fraction(rfc3339.trim_end_matches('Z')) + "Z"
                }
                Err(_) => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else if self.seconds < 0 {
                    // -1.25 is stored as -2 seconds + 750ms
                    let fraction = format!("{:0>9}", NANOS_PER_SECOND - self.subsecond_nanos);
                    format!("-{}.{}", -(self.seconds + 1), fraction.trim_end_matches('0'))
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
            Format::HttpDate => match self.to_chrono() {
                Ok(date) => date.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
                Err(_) => self.fmt(Format::EpochSeconds),
            },
        }
    }
}

/// chrono pads fractional seconds to 3, 6 or 9 digits; trailing zeros are dropped
fn trim_fraction(timestamp: &str) -> String {
    match timestamp.find('.') {
        Some(_) => timestamp
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string(),
        None => timestamp.to_string(),
    }
}

fn parse_epoch_seconds(s: &str) -> Result<Instant, InstantParseError> {
    let invalid = || InstantParseError::Invalid(format!("`{}` is not an epoch timestamp", s));
    let mut parts = s.splitn(2, '.');
    let seconds: i64 = parts
        .next()
        .and_then(|secs| secs.parse().ok())
        .ok_or_else(invalid)?;
    let nanos = match parts.next() {
        None => 0,
        Some(fraction) if fraction.is_empty() || fraction.len() > 9 => return Err(invalid()),
        Some(fraction) => {
            let digits: u32 = fraction.parse().map_err(|_| invalid())?;
            digits * 10_u32.pow(9 - fraction.len() as u32)
        }
    };
    // `-0.5` parses its integral part as 0, so the sign comes from the input
    if s.starts_with('-') && nanos != 0 {
        return Ok(Instant::from_secs_and_nanos(
            seconds - 1,
            NANOS_PER_SECOND - nanos,
        ));
    }
    Ok(Instant::from_secs_and_nanos(seconds, nanos))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    DateTime,
    HttpDate,
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::proptest;

    #[test]
    fn parse_date_time() {
        let parsed = Instant::from_str("2019-12-16T23:48:18.52Z", Format::DateTime).unwrap();
        assert_eq!(parsed, Instant::from_secs_and_nanos(1576540098, 520_000_000));
        Instant::from_str("2019-12-16 23:48", Format::DateTime).expect_err("not rfc3339");
    }

    #[test]
    fn parse_http_date() {
        let parsed = Instant::from_str("Mon, 16 Dec 2019 23:48:18 GMT", Format::HttpDate).unwrap();
        assert_eq!(parsed, Instant::from_epoch_seconds(1576540098));
    }

    #[test]
    fn parse_epoch_seconds() {
        assert_eq!(
            Instant::from_str("1576540098", Format::EpochSeconds).unwrap(),
            Instant::from_epoch_seconds(1576540098)
        );
        assert_eq!(
            Instant::from_str("1576540098.25", Format::EpochSeconds).unwrap(),
            Instant::from_secs_and_nanos(1576540098, 250_000_000)
        );
        Instant::from_str("1576540098.", Format::EpochSeconds).expect_err("empty fraction");
        Instant::from_str("abc", Format::EpochSeconds).expect_err("not a number");
    }

    #[test]
    fn negative_fractional_epoch_seconds() {
        let parsed = Instant::from_str("-1.5", Format::EpochSeconds).unwrap();
        assert_eq!(parsed, Instant::from_secs_and_nanos(-2, 500_000_000));
        assert_eq!(parsed.epoch_fractional_seconds(), -1.5);
        assert_eq!(parsed.fmt(Format::EpochSeconds), "-1.5");

        let parsed = Instant::from_str("-0.25", Format::EpochSeconds).unwrap();
        assert_eq!(parsed, Instant::from_secs_and_nanos(-1, 750_000_000));
        assert_eq!(parsed.fmt(Format::EpochSeconds), "-0.25");
        assert_eq!(parsed, Instant::from_f64(-0.25));
    }

    #[test]
    fn whole_seconds_keep_trailing_zero() {
        let instant = Instant::from_epoch_seconds(1576540100);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:20Z");
    }

    proptest! {
        #[test]
        fn epoch_seconds_survive_formatting(secs in -4_102_444_800_i64..4_102_444_800, nanos in 0_u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(secs, nanos);
            let formatted = instant.fmt(Format::EpochSeconds);
            assert_eq!(Instant::from_str(&formatted, Format::EpochSeconds).unwrap(), instant);
        }
    }
}
