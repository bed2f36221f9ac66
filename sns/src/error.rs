/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use smithy_types::retry::{ErrorKind as RetryErrorKind, ProvideErrorKind};
use std::fmt;
use std::fmt::{Display, Formatter};

/// An error returned by Amazon SNS
#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub(crate) meta: smithy_types::Error,
}

#[derive(Debug)]
pub enum ErrorKind {
    /// Indicates that the user has been denied access to the requested resource.
    AuthorizationErrorException,
    /// Exception error indicating endpoint disabled.
    EndpointDisabledException,
    /// Indicates an internal service error.
    InternalErrorException,
    /// Indicates that a request parameter does not comply with the associated constraints.
    InvalidParameterException,
    /// Indicates that a request parameter does not comply with the associated constraints.
    InvalidParameterValueException,
    /// The request was rejected because the specified customer master key (CMK) isn't enabled.
    KmsDisabledException,
    /// Indicates that the requested resource does not exist.
    NotFoundException,
    /// Indicates that the customer already owns the maximum allowed number of subscriptions.
    SubscriptionLimitExceededException,
    /// Indicates that the rate at which requests have been submitted for this action exceeds
    /// the limit for your account.
    ThrottledException,
    /// Indicates that the customer already owns the maximum allowed number of topics.
    TopicLimitExceededException,
    /// An unexpected error, eg. an invalid XML body or an unknown error code
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

    pub fn is_authorization_error_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::AuthorizationErrorException)
    }

    pub fn is_endpoint_disabled_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::EndpointDisabledException)
    }

    pub fn is_internal_error_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::InternalErrorException)
    }

    pub fn is_invalid_parameter_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::InvalidParameterException)
    }

    pub fn is_invalid_parameter_value_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::InvalidParameterValueException)
    }

    pub fn is_kms_disabled_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::KmsDisabledException)
    }

    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::NotFoundException)
    }

    pub fn is_subscription_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::SubscriptionLimitExceededException)
    }

    pub fn is_throttled_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::ThrottledException)
    }

    pub fn is_topic_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::TopicLimitExceededException)
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<RetryErrorKind> {
        match &self.kind {
            ErrorKind::InternalErrorException => Some(RetryErrorKind::ServerError),
            ErrorKind::ThrottledException => Some(RetryErrorKind::ThrottlingError),
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

/// SNS reports `InvalidParameterValueException` with the code `ParameterValueInvalid`
pub(crate) fn from_generic(generic: smithy_types::Error) -> Error {
    let kind = match generic.code() {
        Some("AuthorizationError") => ErrorKind::AuthorizationErrorException,
        Some("EndpointDisabled") => ErrorKind::EndpointDisabledException,
        Some("InternalError") => ErrorKind::InternalErrorException,
        Some("InvalidParameter") => ErrorKind::InvalidParameterException,
        Some("ParameterValueInvalid") => ErrorKind::InvalidParameterValueException,
        Some("KMSDisabled") => ErrorKind::KmsDisabledException,
        Some("NotFound") => ErrorKind::NotFoundException,
        Some("SubscriptionLimitExceeded") => ErrorKind::SubscriptionLimitExceededException,
        Some("Throttled") => ErrorKind::ThrottledException,
        Some("TopicLimitExceeded") => ErrorKind::TopicLimitExceededException,
        _ => return Error::generic(generic),
    };
    Error::new(kind, generic)
}

pub(crate) fn parse_error(response: &http::Response<Bytes>) -> Error {
    match aws_http::query_errors::parse_generic_error(response.body()) {
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
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn not_found() {
        let err = parse_error(&response(
            404,
            r#"<ErrorResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
              <Error>
                <Type>Sender</Type>
                <Code>NotFound</Code>
                <Message>Topic does not exist</Message>
              </Error>
              <RequestId>9dd01905-5012-5f99-8663-4b3ecd0dfaef</RequestId>
            </ErrorResponse>"#,
        ));
        assert!(err.is_not_found_exception());
        assert_eq!(err.retryable_error_kind(), None);
        assert_eq!(err.message(), Some("Topic does not exist"));
    }

    #[test]
    fn parameter_value_invalid() {
        let err = parse_error(&response(
            400,
            "<ErrorResponse><Error><Code>ParameterValueInvalid</Code></Error></ErrorResponse>",
        ));
        assert!(err.is_invalid_parameter_value_exception());
        assert!(!err.is_invalid_parameter_exception());
    }

    #[test]
    fn retryable_kinds() {
        let internal = parse_error(&response(
            500,
            "<ErrorResponse><Error><Type>Receiver</Type><Code>InternalError</Code></Error></ErrorResponse>",
        ));
        assert_eq!(
            internal.retryable_error_kind(),
            Some(RetryErrorKind::ServerError)
        );
        let throttled = parse_error(&response(
            400,
            "<ErrorResponse><Error><Code>Throttled</Code></Error></ErrorResponse>",
        ));
        assert!(throttled.is_throttled_exception());
        assert_eq!(
            throttled.retryable_error_kind(),
            Some(RetryErrorKind::ThrottlingError)
        );
    }

    #[test]
    fn kms_disabled() {
        let err = parse_error(&response(
            400,
            "<ErrorResponse><Error><Code>KMSDisabled</Code><Message>disabled</Message></Error></ErrorResponse>",
        ));
        assert!(err.is_kms_disabled_exception());
        assert_eq!(err.to_string(), "KmsDisabledException: disabled");
        let unknown = parse_error(&response(
            400,
            "<ErrorResponse><Error><Code>FilterPolicyLimitExceeded</Code></Error></ErrorResponse>",
        ));
        assert!(matches!(unknown.kind, ErrorKind::Unhandled(_)));
    }

    #[test]
    fn error_code_table() {
        let table: &[(&str, fn(&ErrorKind) -> bool, Option<RetryErrorKind>)] = &[
            ("AuthorizationError", |k| matches!(k, ErrorKind::AuthorizationErrorException), None),
            ("EndpointDisabled", |k| matches!(k, ErrorKind::EndpointDisabledException), None),
            (
                "InternalError",
                |k| matches!(k, ErrorKind::InternalErrorException),
                Some(RetryErrorKind::ServerError),
            ),
            ("InvalidParameter", |k| matches!(k, ErrorKind::InvalidParameterException), None),
            (
                "ParameterValueInvalid",
                |k| matches!(k, ErrorKind::InvalidParameterValueException),
                None,
            ),
            ("KMSDisabled", |k| matches!(k, ErrorKind::KmsDisabledException), None),
            ("NotFound", |k| matches!(k, ErrorKind::NotFoundException), None),
            (
                "SubscriptionLimitExceeded",
                |k| matches!(k, ErrorKind::SubscriptionLimitExceededException),
                None,
            ),
            (
                "Throttled",
                |k| matches!(k, ErrorKind::ThrottledException),
                Some(RetryErrorKind::ThrottlingError),
            ),
            (
                "TopicLimitExceeded",
                |k| matches!(k, ErrorKind::TopicLimitExceededException),
                None,
            ),
        ];
        for (code, expected, retry) in table {
            let body = format!(
                "<ErrorResponse><Error><Type>Sender</Type><Code>{}</Code></Error></ErrorResponse>",
                code
            );
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
