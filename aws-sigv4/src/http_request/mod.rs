/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities to sign HTTP requests.

mod canonical_request;
mod settings;
mod sign;
mod url_escape;

pub use settings::{PayloadChecksumKind, SigningParams, SigningSettings, UriEncoding};
pub use sign::{sign, SignableBody, SignableRequest, SigningInstructions};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("the request URI has no authority and no `host` header was set")]
    MissingHost,
    #[error("a signed header could not be represented as a header value")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
    #[error("signing parameters were incomplete: {0}")]
    InvalidParams(&'static str),
}
