/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for writing Smithy values into a query string.
//!
//! Formatting values into the query string as specified in
//! [httpQuery](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httpquery-trait)

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use smithy_types::instant::Format;
use smithy_types::Instant;

/// Everything except the RFC 3986 unreserved characters is encoded
pub(crate) const BASE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(crate) const GREEDY: &AsciiSet = &BASE_SET.remove(b'/');

pub fn fmt_default<T: ToString>(t: T) -> String {
    fmt_string(t.to_string())
}

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), BASE_SET).to_string()
}

pub fn fmt_timestamp(t: &Instant, format: Format) -> String {
    fmt_string(t.fmt(format))
}

/// Writes `key=value` pairs onto a URI that may or may not already carry a query string
#[derive(Debug)]
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        let prefix = if out.contains('?') { '&' } else { '?' };
        Writer { out, prefix }
    }

    /// `value` must already be formatted with one of the `fmt_` functions
    pub fn push_kv(&mut self, key: &str, value: &str) {
        self.out.push(self.prefix);
        self.out.push_str(&fmt_string(key));
        self.out.push('=');
        self.out.push_str(value);
        self.prefix = '&';
    }
}

#[cfg(test)]
mod test {
    use crate::query::{fmt_default, fmt_string, fmt_timestamp, Writer};
    use smithy_types::instant::Format;
    use smithy_types::Instant;

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=").as_str(), "%26%3D");
        assert_eq!(fmt_default(10).as_str(), "10");
    }

    #[test]
    fn timestamps_are_escaped() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(
            fmt_timestamp(&instant, Format::DateTime),
            "2019-12-16T23%3A48%3A18Z"
        );
    }

    #[test]
    fn writer_picks_separator() {
        let mut uri = String::from("/-/vaults");
        let mut writer = Writer::new(&mut uri);
        writer.push_kv("marker", &fmt_string("abc"));
        writer.push_kv("limit", &fmt_default(5));
        assert_eq!(uri, "/-/vaults?marker=abc&limit=5");

        let mut uri = String::from("/path?x=1");
        Writer::new(&mut uri).push_kv("y", "2");
        assert_eq!(uri, "/path?x=1&y=2");
    }
}
