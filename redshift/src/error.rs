/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use smithy_types::retry::{ErrorKind as RetryErrorKind, ProvideErrorKind};
use std::fmt;
use std::fmt::{Display, Formatter};

/// An error returned by Amazon Redshift
#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub(crate) meta: smithy_types::Error,
}

#[derive(Debug)]
pub enum ErrorKind {
    /// The account already has a cluster with the given identifier.
    ClusterAlreadyExistsFault,
    /// The `ClusterIdentifier` parameter does not refer to an existing cluster.
    ClusterNotFoundFault,
    /// The request would exceed the allowed number of cluster instances for this account.
    ClusterQuotaExceededFault,
    /// The value specified as a snapshot identifier is already used by an existing snapshot.
    ClusterSnapshotAlreadyExistsFault,
    /// The number of nodes specified exceeds the allotted capacity of the cluster.
    InsufficientClusterCapacityFault,
    /// The specified cluster is not in the `available` state.
    InvalidClusterStateFault,
    /// The value of a parameter is out of range or otherwise invalid.
    InvalidParameterValueException,
    /// The operation would exceed the number of nodes allotted to the account.
    NumberOfNodesQuotaExceededFault,
    /// You have exceeded the number of tags allowed.
    TagLimitExceededFault,
    /// Your account is not authorized to perform the requested operation.
    UnauthorizedOperation,
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

    pub fn is_cluster_already_exists_fault(&self) -> bool {
        matches!(&self.kind, ErrorKind::ClusterAlreadyExistsFault)
    }

    pub fn is_cluster_not_found_fault(&self) -> bool {
        matches!(&self.kind, ErrorKind::ClusterNotFoundFault)
    }

    pub fn is_cluster_quota_exceeded_fault(&self) -> bool {
        matches!(&self.kind, ErrorKind::ClusterQuotaExceededFault)
    }

    pub fn is_cluster_snapshot_already_exists_fault(&self) -> bool {
        matches!(&self.kind, ErrorKind::ClusterSnapshotAlreadyExistsFault)
    }

    pub fn is_insufficient_cluster_capacity_fault(&self) -> bool {
        matches!(&self.kind, ErrorKind::InsufficientClusterCapacityFault)
    }

    pub fn is_invalid_cluster_state_fault(&self) -> bool {
        matches!(&self.kind, ErrorKind::InvalidClusterStateFault)
    }

    pub fn is_invalid_parameter_value_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::InvalidParameterValueException)
    }

    pub fn is_number_of_nodes_quota_exceeded_fault(&self) -> bool {
        matches!(&self.kind, ErrorKind::NumberOfNodesQuotaExceededFault)
    }

    pub fn is_tag_limit_exceeded_fault(&self) -> bool {
        matches!(&self.kind, ErrorKind::TagLimitExceededFault)
    }

    pub fn is_unauthorized_operation(&self) -> bool {
        matches!(&self.kind, ErrorKind::UnauthorizedOperation)
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<RetryErrorKind> {
        None
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
        Some("ClusterAlreadyExists") => ErrorKind::ClusterAlreadyExistsFault,
        Some("ClusterNotFound") => ErrorKind::ClusterNotFoundFault,
        Some("ClusterQuotaExceeded") => ErrorKind::ClusterQuotaExceededFault,
        Some("ClusterSnapshotAlreadyExists") => ErrorKind::ClusterSnapshotAlreadyExistsFault,
        Some("InsufficientClusterCapacity") => ErrorKind::InsufficientClusterCapacityFault,
        Some("InvalidClusterState") => ErrorKind::InvalidClusterStateFault,
        Some("InvalidParameterValue") => ErrorKind::InvalidParameterValueException,
        Some("NumberOfNodesQuotaExceeded") => ErrorKind::NumberOfNodesQuotaExceededFault,
        Some("TagLimitExceededFault") => ErrorKind::TagLimitExceededFault,
        Some("UnauthorizedOperation") => ErrorKind::UnauthorizedOperation,
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
    use smithy_types::retry::ProvideErrorKind;

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn cluster_not_found() {
        let err = parse_error(&response(
            404,
            r#"<ErrorResponse xmlns="http://redshift.amazonaws.com/doc/2012-12-01/">
              <Error>
                <Type>Sender</Type>
                <Code>ClusterNotFound</Code>
                <Message>Cluster examplecluster not found.</Message>
              </Error>
              <RequestId>b4b2b1e8-3a4b-11e3-a5d9-e7a5e3a3c3a1</RequestId>
            </ErrorResponse>"#,
        ));
        assert!(err.is_cluster_not_found_fault());
        assert_eq!(
            err.to_string(),
            "ClusterNotFoundFault: Cluster examplecluster not found."
        );
        assert_eq!(
            err.request_id(),
            Some("b4b2b1e8-3a4b-11e3-a5d9-e7a5e3a3c3a1")
        );
    }

    #[test]
    fn tag_limit_keeps_fault_suffix() {
        let err = parse_error(&response(
            400,
            "<ErrorResponse><Error><Code>TagLimitExceededFault</Code></Error></ErrorResponse>",
        ));
        assert!(err.is_tag_limit_exceeded_fault());
        assert!(!err.is_cluster_quota_exceeded_fault());
    }

    #[test]
    fn unknown_codes_are_unhandled() {
        let err = parse_error(&response(
            400,
            "<ErrorResponse><Error><Code>HsmClientCertificateNotFoundFault</Code></Error></ErrorResponse>",
        ));
        assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
        assert_eq!(err.code(), Some("HsmClientCertificateNotFoundFault"));
    }

    #[test]
    fn error_code_table() {
        let table: &[(&str, fn(&ErrorKind) -> bool)] = &[
            ("ClusterAlreadyExists", |k| matches!(k, ErrorKind::ClusterAlreadyExistsFault)),
            ("ClusterNotFound", |k| matches!(k, ErrorKind::ClusterNotFoundFault)),
            ("ClusterQuotaExceeded", |k| matches!(k, ErrorKind::ClusterQuotaExceededFault)),
            ("ClusterSnapshotAlreadyExists", |k| {
                matches!(k, ErrorKind::ClusterSnapshotAlreadyExistsFault)
            }),
            ("InsufficientClusterCapacity", |k| {
                matches!(k, ErrorKind::InsufficientClusterCapacityFault)
            }),
            ("InvalidClusterState", |k| matches!(k, ErrorKind::InvalidClusterStateFault)),
            ("InvalidParameterValue", |k| {
                matches!(k, ErrorKind::InvalidParameterValueException)
            }),
            ("NumberOfNodesQuotaExceeded", |k| {
                matches!(k, ErrorKind::NumberOfNodesQuotaExceededFault)
            }),
            ("TagLimitExceededFault", |k| matches!(k, ErrorKind::TagLimitExceededFault)),
            ("UnauthorizedOperation", |k| matches!(k, ErrorKind::UnauthorizedOperation)),
        ];
        for (code, expected) in table {
            let body = format!(
                "<ErrorResponse><Error><Code>{}</Code></Error></ErrorResponse>",
                code
            );
            let err = parse_error(
                &http::Response::builder()
                    .status(400)
                    .body(Bytes::from(body))
                    .unwrap(),
            );
            assert!(expected(&err.kind), "{} parsed as {:?}", code, err.kind);
            assert_eq!(err.code(), Some(*code));
            assert_eq!(err.retryable_error_kind(), None, "{}", code);
        }
    }
}
