/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for parsing information from headers

use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug)]
pub struct ParseError {
    header: String,
}

impl ParseError {
    fn new(header: &str) -> Self {
        ParseError {
            header: header.to_string(),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse header `{}`", self.header)
    }
}

impl Error for ParseError {}

/// Read a single header value at `key`. A missing header is not an error.
pub fn one_or_none<T>(headers: &http::HeaderMap, key: &str) -> Result<Option<T>, ParseError>
where
    T: FromStr,
{
    let mut values = headers.get_all(key).iter();
    let value = match values.next() {
        Some(value) => value,
        None => return Ok(None),
    };
    if values.next().is_some() {
        return Err(ParseError::new(key));
    }
    let value = value.to_str().map_err(|_| ParseError::new(key))?;
    T::from_str(value.trim())
        .map(Some)
        .map_err(|_| ParseError::new(key))
}

/// Read many comma / header delimited values from HTTP headers for `FromStr` types
pub fn read_many<T>(headers: &http::HeaderMap, key: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
{
    let mut out = vec![];
    for header in headers.get_all(key).iter() {
        let mut header = header.as_bytes();
        while !header.is_empty() {
            let (v, next) = read_one::<T>(&header).map_err(|_| ParseError::new(key))?;
            out.push(v);
            header = next;
        }
    }
    Ok(out)
}

/// Read one comma delimited value for `FromStr` types
pub fn read_one<T>(s: &[u8]) -> Result<(T, &[u8]), ParseError>
where
    T: FromStr,
{
    let (head, rest) = split_at_delim(s)?;
    let head = std::str::from_utf8(head).map_err(|_| ParseError::new("<non-utf8>"))?;
    let value = T::from_str(head.trim()).map_err(|_| ParseError::new(head))?;
    Ok((value, rest))
}

fn split_at_delim(s: &[u8]) -> Result<(&[u8], &[u8]), ParseError> {
    let next_delim = s.iter().position(|b| b == &b',').unwrap_or_else(|| s.len());
    let (first, next) = s.split_at(next_delim);
    Ok((first, then_delim(next)?))
}

fn then_delim(s: &[u8]) -> Result<&[u8], ParseError> {
    if s.is_empty() {
        Ok(&s)
    } else if s.starts_with(b",") {
        Ok(&s[1..])
    } else {
        Err(ParseError::new("<delimiter>"))
    }
}

#[cfg(test)]
mod test {
    use crate::header::{one_or_none, read_many};

    #[test]
    fn read_many_bools() {
        let test_request = http::Request::builder()
            .header("X-Bool-Multi", "true,false")
            .header("X-Bool-Multi", "true")
            .header("X-Bool", "true")
            .header("X-Bool-Invalid", "truth,falsy")
            .header("X-Bool-Single", "true,false,true,true")
            .body(())
            .unwrap();
        assert_eq!(
            read_many::<bool>(test_request.headers(), "X-Bool-Multi").expect("valid"),
            vec![true, false, true]
        );

        assert_eq!(
            read_many::<bool>(test_request.headers(), "X-Bool").unwrap(),
            vec![true]
        );
        assert_eq!(
            read_many::<bool>(test_request.headers(), "X-Bool-Single").unwrap(),
            vec![true, false, true, true]
        );
        read_many::<bool>(test_request.headers(), "X-Bool-Invalid").expect_err("invalid");
    }

    #[test]
    fn read_one_header() {
        let test_request = http::Request::builder()
            .header("x-amz-archive-id", "NkbByEejwEggmBz2fTHgJrg0XBoDfjP4q6iu87-TjhqG6eGoOY9Z8i1_AUyUsuhPAdTqLHy8pTl5nfCFJmDl2yEZONi5L26Omw12vcs01MNGntHEQL8MBfGlqrEXAMPLEArchiveId")
            .header("x-count", "12")
            .header("x-count-dup", "1")
            .header("x-count-dup", "2")
            .body(())
            .unwrap();
        let headers = test_request.headers();
        assert_eq!(one_or_none::<u64>(headers, "x-count").unwrap(), Some(12));
        assert_eq!(one_or_none::<u64>(headers, "x-missing").unwrap(), None);
        one_or_none::<u64>(headers, "x-count-dup").expect_err("duplicate header");
        assert!(one_or_none::<String>(headers, "x-amz-archive-id")
            .unwrap()
            .unwrap()
            .ends_with("EXAMPLEArchiveId"));
    }
}
