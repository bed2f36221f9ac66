/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::url_escape::percent_encode;
use super::{PayloadChecksumKind, SignableBody, SigningError, SigningSettings, UriEncoding};
use crate::date_fmt::{format_date, format_date_time};
use crate::http_request::sign::SignableRequest;
use crate::sign::sha256_hex_string;
use chrono::{DateTime, Utc};
use http::header::{HeaderName, HOST, USER_AGENT};
use http::{HeaderMap, HeaderValue, Method, Uri};
use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;

pub(crate) const HMAC_256: &str = "AWS4-HMAC-SHA256";
pub(crate) const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";
pub(crate) const X_AMZ_DATE: &str = "x-amz-date";
pub(crate) const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";

const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

#[derive(Debug, PartialEq)]
pub(crate) struct CanonicalRequest<'a> {
    pub(crate) method: &'a Method,
    pub(crate) path: String,
    pub(crate) params: Option<String>,
    /// Headers added on top of the request's own: `host` (if missing), `x-amz-date`, and the
    /// optional token/payload hash headers
    pub(crate) headers: HeaderMap,
    pub(crate) canonical_headers: Vec<(HeaderName, String)>,
    pub(crate) signed_headers: SignedHeaders,
    pub(crate) date_time: String,
    pub(crate) content_sha256: Cow<'a, str>,
}

impl<'a> CanonicalRequest<'a> {
    /// Construct a CanonicalRequest from a SignableRequest
    ///
    /// - a session token is added as `x-amz-security-token` and signed
    /// - `UriEncoding::Double` re-encodes `%` in the path as `%25`
    /// - `PayloadChecksumKind::XAmzSha256` adds (and signs) `x-amz-content-sha256`
    pub(crate) fn from(
        req: &'a SignableRequest<'a>,
        settings: &SigningSettings,
        date: &DateTime<Utc>,
        security_token: Option<&str>,
    ) -> Result<CanonicalRequest<'a>, SigningError> {
        let path = match req.uri().path() {
            "" => "/",
            path => path,
        };
        let path = match settings.uri_encoding {
            UriEncoding::Double => path.replace('%', "%25"),
            UriEncoding::Single => path.to_string(),
        };
        let content_sha256 = Self::payload_hash(req.body());
        let date_time = format_date_time(date);
        let headers = Self::added_headers(req, settings, &content_sha256, &date_time, security_token)?;
        let canonical_headers = Self::canonical_headers(req.headers(), &headers);
        let signed_headers =
            SignedHeaders::new(canonical_headers.iter().map(|(name, _)| name.clone()));
        Ok(CanonicalRequest {
            method: req.method(),
            path,
            params: Self::params(req.uri()),
            headers,
            canonical_headers,
            signed_headers,
            date_time,
            content_sha256,
        })
    }

    fn added_headers(
        req: &SignableRequest,
        settings: &SigningSettings,
        payload_hash: &str,
        date_time: &str,
        security_token: Option<&str>,
    ) -> Result<HeaderMap, SigningError> {
        let mut added = HeaderMap::new();
        if !req.headers().contains_key(HOST) {
            let authority = req.uri().authority().ok_or(SigningError::MissingHost)?;
            added.insert(HOST, HeaderValue::try_from(authority.as_str())?);
        }
        added.insert(
            HeaderName::from_static(X_AMZ_DATE),
            HeaderValue::try_from(date_time)?,
        );
        if let Some(security_token) = security_token {
            let mut token = HeaderValue::try_from(security_token)?;
            token.set_sensitive(true);
            added.insert(HeaderName::from_static(X_AMZ_SECURITY_TOKEN), token);
        }
        if settings.payload_checksum_kind == PayloadChecksumKind::XAmzSha256 {
            added.insert(
                HeaderName::from_static(X_AMZ_CONTENT_SHA_256),
                HeaderValue::try_from(payload_hash)?,
            );
        }
        Ok(added)
    }

    /// Lowercase names (guaranteed by `http`), sorted; repeated headers joined with `,`
    fn canonical_headers(original: &HeaderMap, added: &HeaderMap) -> Vec<(HeaderName, String)> {
        let mut out: Vec<(HeaderName, String)> = Vec::new();
        for name in original.keys().chain(added.keys()) {
            // the user agent may be rewritten by proxies
            if *name == USER_AGENT || out.iter().any(|(existing, _)| existing == name) {
                continue;
            }
            let values = match added.get(name) {
                Some(value) => vec![canonical_value(value)],
                None => original.get_all(name).iter().map(canonical_value).collect(),
            };
            out.push((name.clone(), values.join(",")));
        }
        out.sort_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()));
        out
    }

    fn payload_hash<'b>(body: &SignableBody<'b>) -> Cow<'b, str> {
        match body {
            SignableBody::Bytes(data) => Cow::Owned(sha256_hex_string(data)),
            SignableBody::Precomputed(digest) => Cow::Owned(digest.clone()),
            SignableBody::UnsignedPayload => Cow::Borrowed(UNSIGNED_PAYLOAD),
        }
    }

    fn params(uri: &Uri) -> Option<String> {
        let query = uri.query()?;
        let mut params: Vec<(Cow<str>, Cow<str>)> =
            form_urlencoded::parse(query.as_bytes()).collect();
        // Sort by param name, and then by param value
        params.sort();
        let encoded: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
            .collect();
        Some(encoded.join("&"))
    }
}

/// Trim and collapse sequential spaces
fn canonical_value(value: &HeaderValue) -> String {
    let value = String::from_utf8_lossy(value.as_bytes());
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl<'a> fmt::Display for CanonicalRequest<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        writeln!(f, "{}", self.params.as_deref().unwrap_or(""))?;
        for (name, value) in &self.canonical_headers {
            writeln!(f, "{}:{}", name.as_str(), value)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers)?;
        write!(f, "{}", self.content_sha256)
    }
}

#[derive(Debug, PartialEq, Default)]
pub(crate) struct SignedHeaders {
    inner: Vec<HeaderName>,
}

impl SignedHeaders {
    fn new(names: impl Iterator<Item = HeaderName>) -> Self {
        let mut inner: Vec<_> = names.collect();
        inner.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        SignedHeaders { inner }
    }
}

impl fmt::Display for SignedHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.inner.iter().map(|name| name.as_str()).collect();
        write!(f, "{}", names.join(";"))
    }
}

#[derive(PartialEq, Debug, Clone)]
pub(crate) struct Scope<'a> {
    pub(crate) date: DateTime<Utc>,
    pub(crate) region: &'a str,
    pub(crate) service: &'a str,
}

impl<'a> fmt::Display for Scope<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/aws4_request",
            format_date(&self.date),
            self.region,
            self.service
        )
    }
}

#[derive(PartialEq, Debug)]
pub(crate) struct StringToSign<'a> {
    pub(crate) scope: Scope<'a>,
    pub(crate) date: DateTime<Utc>,
    pub(crate) hashed_creq: &'a str,
}

impl<'a> StringToSign<'a> {
    pub(crate) fn new(
        date: DateTime<Utc>,
        region: &'a str,
        service: &'a str,
        hashed_creq: &'a str,
    ) -> Self {
        let scope = Scope {
            date,
            region,
            service,
        };
        Self {
            scope,
            date,
            hashed_creq,
        }
    }
}

impl<'a> fmt::Display for StringToSign<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}",
            HMAC_256,
            format_date_time(&self.date),
            self.scope,
            self.hashed_creq
        )
    }
}
