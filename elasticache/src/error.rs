/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use smithy_types::retry::{ErrorKind as RetryErrorKind, ProvideErrorKind};
use std::fmt;
use std::fmt::{Display, Formatter};

/// An error returned by Amazon ElastiCache
#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub(crate) meta: smithy_types::Error,
}

#[derive(Debug)]
pub enum ErrorKind {
    /// You already have a cluster with the given identifier.
    CacheClusterAlreadyExistsFault,
    /// The requested cluster ID does not refer to an existing cluster.
    CacheClusterNotFoundFault,
    /// The request cannot be processed because it would exceed the allowed number of clusters
    /// per customer.
    ClusterQuotaForCustomerExceededFault,
    /// The requested cache node type is not available in the specified Availability Zone.
    InsufficientCacheClusterCapacityFault,
    /// The requested cluster is not in the `available` state.
    InvalidCacheClusterStateFault,
    /// Two or more incompatible parameters were specified.
    InvalidParameterCombinationException,
    /// The value for a parameter is invalid.
    InvalidParameterValueException,
    /// The request cannot be processed because it would exceed the allowed number of cache
    /// nodes per customer.
    NodeQuotaForCustomerExceededFault,
    /// You already have a snapshot with the given name.
    SnapshotAlreadyExistsFault,
    /// The request cannot be processed because it would cause the resource to have more than
    /// the allowed number of tags. The maximum number of tags permitted on a resource is 50.
    TagQuotaPerResourceExceeded,
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

    pub fn is_cache_cluster_already_exists_fault(&self) -> bool {
        matches!(&self.kind, ErrorKind::CacheClusterAlreadyExistsFault)
    }

    pub fn is_cache_cluster_not_found_fault(&self) -> bool {
        matches!(&self.kind, ErrorKind::CacheClusterNotFoundFault)
    }

    pub fn is_cluster_quota_for_customer_exceeded_fault(&self) -> bool {
        matches!(&self.kind, ErrorKind::ClusterQuotaForCustomerExceededFault)
    }

    pub fn is_insufficient_cache_cluster_capacity_fault(&self) -> bool {
        matches!(&self.kind, ErrorKind::InsufficientCacheClusterCapacityFault)
    }

    pub fn is_invalid_cache_cluster_state_fault(&self) -> bool {
        matches!(&self.kind, ErrorKind::InvalidCacheClusterStateFault)
    }

    pub fn is_invalid_parameter_combination_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::InvalidParameterCombinationException)
    }

    pub fn is_invalid_parameter_value_exception(&self) -> bool {
        matches!(&self.kind, ErrorKind::InvalidParameterValueException)
    }

    pub fn is_node_quota_for_customer_exceeded_fault(&self) -> bool {
        matches!(&self.kind, ErrorKind::NodeQuotaForCustomerExceededFault)
    }

    pub fn is_snapshot_already_exists_fault(&self) -> bool {
        matches!(&self.kind, ErrorKind::SnapshotAlreadyExistsFault)
    }

    pub fn is_tag_quota_per_resource_exceeded(&self) -> bool {
        matches!(&self.kind, ErrorKind::TagQuotaPerResourceExceeded)
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

/// Error codes of the modeled exceptions. Query codes differ from the shape names.
pub(crate) fn from_generic(generic: smithy_types::Error) -> Error {
    let kind = match generic.code() {
        Some("CacheClusterAlreadyExists") => ErrorKind::CacheClusterAlreadyExistsFault,
        Some("CacheClusterNotFound") => ErrorKind::CacheClusterNotFoundFault,
        Some("ClusterQuotaForCustomerExceeded") => ErrorKind::ClusterQuotaForCustomerExceededFault,
        Some("InsufficientCacheClusterCapacity") => {
            ErrorKind::InsufficientCacheClusterCapacityFault
        }
        Some("InvalidCacheClusterState") => ErrorKind::InvalidCacheClusterStateFault,
        Some("InvalidParameterCombination") => ErrorKind::InvalidParameterCombinationException,
        Some("InvalidParameterValue") => ErrorKind::InvalidParameterValueException,
        Some("NodeQuotaForCustomerExceeded") => ErrorKind::NodeQuotaForCustomerExceededFault,
        Some("SnapshotAlreadyExistsFault") => ErrorKind::SnapshotAlreadyExistsFault,
        Some("TagQuotaPerResourceExceeded") => ErrorKind::TagQuotaPerResourceExceeded,
        _ => return Error::generic(generic),
    };
    Error::new(kind, generic)
}

/// Parse an awsQuery `<ErrorResponse>`
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
    use crate::error::{parse_error, Error, ErrorKind};
    use bytes::Bytes;
    use smithy_types::retry::ProvideErrorKind;

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn query_codes_map_to_faults() {
        let err = parse_error(&response(
            404,
            r#"<ErrorResponse xmlns="http://elasticache.amazonaws.com/doc/2015-02-02/">
              <Error>
                <Type>Sender</Type>
                <Code>CacheClusterNotFound</Code>
                <Message>CacheCluster not found: my-mem-cluster</Message>
              </Error>
              <RequestId>a8dec8b3-33a4-11df-8963-01868b7c937a</RequestId>
            </ErrorResponse>"#,
        ));
        assert!(err.is_cache_cluster_not_found_fault());
        assert_eq!(err.code(), Some("CacheClusterNotFound"));
        assert_eq!(err.message(), Some("CacheCluster not found: my-mem-cluster"));
        assert_eq!(
            err.request_id(),
            Some("a8dec8b3-33a4-11df-8963-01868b7c937a")
        );
        assert_eq!(
            err.to_string(),
            "CacheClusterNotFoundFault: CacheCluster not found: my-mem-cluster"
        );
    }

    #[test]
    fn unknown_codes_are_unhandled() {
        let err = parse_error(&response(
            403,
            "<ErrorResponse><Error><Code>AccessDenied</Code></Error></ErrorResponse>",
        ));
        assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
        assert_eq!(err.code(), Some("AccessDenied"));
    }

    #[test]
    fn non_xml_bodies_are_unhandled() {
        let err = parse_error(&response(502, "Bad Gateway"));
        assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
        assert_eq!(err.code(), None);
    }

    #[test]
    fn every_modeled_code_is_recognized() {
        let table: &[(&str, fn(&Error) -> bool)] = &[
            ("CacheClusterAlreadyExists", Error::is_cache_cluster_already_exists_fault),
            ("CacheClusterNotFound", Error::is_cache_cluster_not_found_fault),
            (
                "ClusterQuotaForCustomerExceeded",
                Error::is_cluster_quota_for_customer_exceeded_fault,
            ),
            (
                "InsufficientCacheClusterCapacity",
                Error::is_insufficient_cache_cluster_capacity_fault,
            ),
            ("InvalidCacheClusterState", Error::is_invalid_cache_cluster_state_fault),
            (
                "InvalidParameterCombination",
                Error::is_invalid_parameter_combination_exception,
            ),
            ("InvalidParameterValue", Error::is_invalid_parameter_value_exception),
            (
                "NodeQuotaForCustomerExceeded",
                Error::is_node_quota_for_customer_exceeded_fault,
            ),
            ("SnapshotAlreadyExistsFault", Error::is_snapshot_already_exists_fault),
            ("TagQuotaPerResourceExceeded", Error::is_tag_quota_per_resource_exceeded),
        ];
        for (code, is_kind) in table {
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
            assert!(is_kind(&err), "{} parsed as {:?}", code, err.kind);
            assert_eq!(err.retryable_error_kind(), None, "{}", code);
        }
    }
}
