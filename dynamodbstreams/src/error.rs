/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use smithy_types::retry::{ErrorKind as RetryErrorKind, ProvideErrorKind};
use std::fmt;
use std::fmt::{Display, Formatter};

/// An error returned by Amazon DynamoDB Streams
#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub(crate) meta: smithy_types::Error,
}

#[derive(Debug)]
pub enum ErrorKind {
    /// The shard iterator has expired and can no longer be used to retrieve stream records.
    ExpiredIteratorException,
    /// An error occurred on the server side.
    InternalServerError,
    /// There is no limit exceeded condition for DynamoDB Streams as such, but the underlying
    /// table may be throttling.
    LimitExceededException,
    /// The operation tried to access a nonexistent stream.
    ResourceNotFoundException,
    /// The operation attempted to read past the oldest stream record in a shard.
    TrimmedDataAccessException,
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    pub fn new(kind: ErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ErrorKind::Unhandled(err.into()),
        }
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn is_expired_iterator_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::ExpiredIteratorException)
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, ErrorKind::InternalServerError)
    }

    pub fn is_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::LimitExceededException)
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::ResourceNotFoundException)
    }

    pub fn is_trimmed_data_access_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::TrimmedDataAccessException)
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<RetryErrorKind> {
        match &self.kind {
            ErrorKind::InternalServerError => Some(RetryErrorKind::ServerError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Unhandled(inner) => write!(f, "{}", inner),
            kind => {
                write!(f, "{:?}", kind)?;
                if let Some(message) = self.message() {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Unhandled(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

/// Map a generic error onto the modeled exceptions of DynamoDB Streams
pub(crate) fn from_generic(generic: smithy_types::Error) -> Error {
    let kind = match generic.code() {
        Some("ExpiredIteratorException") => ErrorKind::ExpiredIteratorException,
        Some("InternalServerError") => ErrorKind::InternalServerError,
        Some("LimitExceededException") => ErrorKind::LimitExceededException,
        Some("ResourceNotFoundException") => ErrorKind::ResourceNotFoundException,
        Some("TrimmedDataAccessException") => ErrorKind::TrimmedDataAccessException,
        _ => return Error::generic(generic),
    };
    Error::new(kind, generic)
}

/// Parse an awsJson1_0 error response
pub(crate) fn parse_error(response: &http::Response<Bytes>) -> Error {
    match aws_http::json_errors::parse_generic_error(response) {
        Ok(generic) => from_generic(generic),
        Err(err) => {
            tracing::debug!(status = %response.status(), error = %err, "failed to parse error body");
            Error::unhandled(err)
        }
    }
}
