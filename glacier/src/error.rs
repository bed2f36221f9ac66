/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use smithy_types::retry::{ErrorKind as RetryErrorKind, ProvideErrorKind};
use std::fmt;
use std::fmt::{Display, Formatter};

/// An error returned by Amazon S3 Glacier
#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub(crate) meta: smithy_types::Error,
}

#[derive(Debug)]
pub enum ErrorKind {
    /// Returned if a parameter of the request is incorrectly specified.
    InvalidParameterValueException,
    /// Returned if the request results in a vault or account limit being exceeded.
    LimitExceededException,
    /// Returned if a required header or parameter is missing from the request.
    MissingParameterValueException,
    /// Returned if, when uploading an archive, Amazon S3 Glacier times out while receiving the
    /// upload.
    RequestTimeoutException,
    /// Returned if the specified resource (such as a vault, upload ID, or job ID) doesn't exist.
    ResourceNotFoundException,
    /// Returned if the service cannot complete the request.
    ServiceUnavailableException,
    /// An unexpected error, eg. an invalid JSON body or an unknown error code
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

    pub fn is_invalid_parameter_value_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::InvalidParameterValueException)
    }

    pub fn is_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::LimitExceededException)
    }

    pub fn is_missing_parameter_value_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::MissingParameterValueException)
    }

    pub fn is_request_timeout_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::RequestTimeoutException)
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::ResourceNotFoundException)
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::ServiceUnavailableException)
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<RetryErrorKind> {
        match &self.kind {
            ErrorKind::ServiceUnavailableException => Some(RetryErrorKind::ServerError),
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

pub(crate) fn from_generic(generic: smithy_types::Error) -> Error {
    let kind = match generic.code() {
        Some("InvalidParameterValueException") => ErrorKind::InvalidParameterValueException,
        Some("LimitExceededException") => ErrorKind::LimitExceededException,
        Some("MissingParameterValueException") => ErrorKind::MissingParameterValueException,
        Some("RequestTimeoutException") => ErrorKind::RequestTimeoutException,
        Some("ResourceNotFoundException") => ErrorKind::ResourceNotFoundException,
        Some("ServiceUnavailableException") => ErrorKind::ServiceUnavailableException,
        _ => return Error::generic(generic),
    };
    Error::new(kind, generic)
}

/// Parse a restJson1 error: `{"code": "...", "message": "...", "type": "Client"}`
pub(crate) fn parse_error(response: &http::Response<Bytes>) -> Error {
    match aws_http::json_errors::parse_generic_error(response) {
        Ok(generic) => from_generic(generic),
        Err(err) => {
            tracing::debug!(status = %response.status(), error = %err, "failed to parse error body");
            Error::unhandled(err)
        }
    }
}

#[cfg(test)]
mod test {
    use crate::error::{parse_error, ErrorKind};
    use bytes::Bytes;
    use smithy_types::retry::{ErrorKind as RetryErrorKind, ProvideErrorKind};

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .header("x-amzn-RequestId", "AAABZpJrTyioDC_HsOmHae8EZp_uBSJr6cnGOLKp_XJCl-Q")
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn resource_not_found() {
        let err = parse_error(&response(
            404,
            r#"{"code":"ResourceNotFoundException","message":"Vault not found for ARN: arn:aws:glacier:us-west-2:012345678901:vaults/examplevault","type":"Client"}"#,
        ));
        assert!(err.is_resource_not_found_exception());
        assert_eq!(
            err.request_id(),
            Some("AAABZpJrTyioDC_HsOmHae8EZp_uBSJr6cnGOLKp_XJCl-Q")
        );
        assert_eq!(err.retryable_error_kind(), None);
    }

    #[test]
    fn service_unavailable_is_retryable() {
        let err = parse_error(&response(
            500,
            r#"{"code":"ServiceUnavailableException","message":"Service unavailable","type":"Server"}"#,
        ));
        assert!(err.is_service_unavailable_exception());
        assert_eq!(err.retryable_error_kind(), Some(RetryErrorKind::ServerError));
    }

    #[test]
    fn unknown_code() {
        let err = parse_error(&response(
            403,
            r#"{"code":"AccessDeniedException","message":"denied","type":"Client"}"#,
        ));
        assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
        assert_eq!(err.message(), Some("denied"));
    }

    #[test]
    fn error_code_table() {
        let table: &[(&str, fn(&ErrorKind) -> bool, Option<RetryErrorKind>)] = &[
            (
                "InvalidParameterValueException",
                |k| matches!(k, ErrorKind::InvalidParameterValueException),
                None,
            ),
            ("LimitExceededException", |k| matches!(k, ErrorKind::LimitExceededException), None),
            (
                "MissingParameterValueException",
                |k| matches!(k, ErrorKind::MissingParameterValueException),
                None,
            ),
            ("RequestTimeoutException", |k| matches!(k, ErrorKind::RequestTimeoutException), None),
            (
                "ResourceNotFoundException",
                |k| matches!(k, ErrorKind::ResourceNotFoundException),
                None,
            ),
            (
                "ServiceUnavailableException",
                |k| matches!(k, ErrorKind::ServiceUnavailableException),
                Some(RetryErrorKind::ServerError),
            ),
        ];
        for (code, expected, retry) in table {
            let body = format!(r#"{{"code":"{}","type":"Client","message":"m"}}"#, code);
            let err = parse_error(
                &http::Response::builder()
                    .status(400)
                    .body(Bytes::from(body))
                    .unwrap(),
            );
            assert!(expected(&err.kind), "{} parsed as {:?}", code, err.kind);
            assert_eq!(err.retryable_error_kind(), *retry, "{}", code);
        }
    }
}
