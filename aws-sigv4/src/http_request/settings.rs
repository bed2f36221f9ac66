/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::SigningError;
use std::fmt;
use std::time::SystemTime;

/// HTTP-specific signing settings
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct SigningSettings {
    /// How the URI path is encoded in the canonical request
    pub uri_encoding: UriEncoding,

    /// Whether the payload hash is also sent as `x-amz-content-sha256`
    pub payload_checksum_kind: PayloadChecksumKind,
}

/// Config value to specify how to encode the request URL when signing.
///
/// Paths are expected to be percent-encoded already. `Double` re-encodes them (`%` becomes
/// `%25`), which every service except S3 requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriEncoding {
    Double,
    Single,
}

impl Default for UriEncoding {
    fn default() -> Self {
        UriEncoding::Double
    }
}

/// Config value to specify whether the payload hash is added as a header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadChecksumKind {
    /// Add an `x-amz-content-sha256` header holding the hex-encoded SHA-256 of the body
    XAmzSha256,

    /// Do not add a header
    NoHeader,
}

impl Default for PayloadChecksumKind {
    fn default() -> Self {
        PayloadChecksumKind::NoHeader
    }
}

/// Everything needed to sign one request
#[non_exhaustive]
pub struct SigningParams<'a> {
    pub(crate) access_key: &'a str,
    pub(crate) secret_key: &'a str,
    pub(crate) security_token: Option<&'a str>,
    pub(crate) region: &'a str,
    pub(crate) service_name: &'a str,
    pub(crate) date_time: SystemTime,
    pub(crate) settings: SigningSettings,
}

impl fmt::Debug for SigningParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningParams")
            .field("access_key", &self.access_key)
            .field("secret_key", &"** redacted **")
            .field("security_token", &self.security_token.map(|_| "** redacted **"))
            .field("region", &self.region)
            .field("service_name", &self.service_name)
            .field("date_time", &self.date_time)
            .field("settings", &self.settings)
            .finish()
    }
}

impl<'a> SigningParams<'a> {
    pub fn builder() -> Builder<'a> {
        Builder::default()
    }

    pub fn region(&self) -> &str {
        self.region
    }

    pub fn service_name(&self) -> &str {
        self.service_name
    }
}

#[derive(Debug, Default)]
pub struct Builder<'a> {
    access_key: Option<&'a str>,
    secret_key: Option<&'a str>,
    security_token: Option<&'a str>,
    region: Option<&'a str>,
    service_name: Option<&'a str>,
    date_time: Option<SystemTime>,
    settings: Option<SigningSettings>,
}

impl<'a> Builder<'a> {
    pub fn access_key(mut self, access_key: &'a str) -> Self {
        self.access_key = Some(access_key);
        self
    }

    pub fn secret_key(mut self, secret_key: &'a str) -> Self {
        self.secret_key = Some(secret_key);
        self
    }

    pub fn security_token(mut self, security_token: &'a str) -> Self {
        self.security_token = Some(security_token);
        self
    }

    pub fn set_security_token(&mut self, security_token: Option<&'a str>) {
        self.security_token = security_token;
    }

    pub fn region(mut self, region: &'a str) -> Self {
        self.region = Some(region);
        self
    }

    pub fn service_name(mut self, service_name: &'a str) -> Self {
        self.service_name = Some(service_name);
        self
    }

    pub fn date_time(mut self, date_time: SystemTime) -> Self {
        self.date_time = Some(date_time);
        self
    }

    pub fn settings(mut self, settings: SigningSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn build(self) -> Result<SigningParams<'a>, SigningError> {
        Ok(SigningParams {
            access_key: self
                .access_key
                .ok_or(SigningError::InvalidParams("access key is required"))?,
            secret_key: self
                .secret_key
                .ok_or(SigningError::InvalidParams("secret key is required"))?,
            security_token: self.security_token,
            region: self
                .region
                .ok_or(SigningError::InvalidParams("region is required"))?,
            service_name: self
                .service_name
                .ok_or(SigningError::InvalidParams("service name is required"))?,
            date_time: self.date_time.unwrap_or_else(SystemTime::now),
            settings: self.settings.unwrap_or_default(),
        })
    }
}
