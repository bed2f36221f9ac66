/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, NaiveDateTime, ParseError, TimeZone, Utc};

const DATE_FORMAT: &str = "%Y%m%d";
const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Formats the date portion of a signing time: `20150830`
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats a signing time as used by `x-amz-date`: `20150830T123600Z`
pub fn format_date_time(date_time: &DateTime<Utc>) -> String {
    date_time.format(DATE_TIME_FORMAT).to_string()
}

pub fn parse_date_time(date_time_str: &str) -> Result<DateTime<Utc>, ParseError> {
    let naive = NaiveDateTime::parse_from_str(date_time_str, DATE_TIME_FORMAT)?;
    Ok(Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use crate::date_fmt::{format_date, format_date_time, parse_date_time};

    #[test]
    fn date_time_round_trip() {
        let date_time = parse_date_time("20150830T123600Z").unwrap();
        assert_eq!(format_date_time(&date_time), "20150830T123600Z");
        assert_eq!(format_date(&date_time), "20150830");
    }

    #[test]
    fn rejects_other_formats() {
        parse_date_time("2015-08-30T12:36:00Z").expect_err("iso 8601 is not the signing format");
    }
}
