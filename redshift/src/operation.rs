/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::Error;
use crate::output::{
    CreateClusterOutput, DeleteClusterOutput, DescribeClustersOutput, RebootClusterOutput,
};
use bytes::Bytes;
use smithy_http::response::ParseStrictResponse;
use smithy_xml::decode::XmlError;

fn parse_response<T>(
    response: &http::Response<Bytes>,
    deserialize: fn(&[u8]) -> Result<T, XmlError>,
) -> Result<T, Error> {
    if !response.status().is_success() {
        return Err(crate::error::parse_error(response));
    }
    deserialize(response.body()).map_err(|err| {
        tracing::warn!(error = %err, "response body could not be deserialized");
        Error::unhandled(err)
    })
}

/// Creates a new cluster with the specified parameters.
///
/// To create a cluster in a VPC, provide a cluster subnet group name.
#[derive(Clone, Default, Debug)]
pub struct CreateCluster {
    _private: (),
}

impl CreateCluster {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for CreateCluster {
    type Output = Result<CreateClusterOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::create_cluster)
    }
}

/// Returns properties of provisioned clusters including general cluster properties, cluster
/// database properties, maintenance and backup properties, and security and access properties.
#[derive(Clone, Default, Debug)]
pub struct DescribeClusters {
    _private: (),
}

impl DescribeClusters {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for DescribeClusters {
    type Output = Result<DescribeClustersOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::describe_clusters)
    }
}

/// Deletes a previously provisioned cluster without its final snapshot being created.
#[derive(Clone, Default, Debug)]
pub struct DeleteCluster {
    _private: (),
}

impl DeleteCluster {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for DeleteCluster {
    type Output = Result<DeleteClusterOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::delete_cluster)
    }
}

/// Reboots a cluster. The cluster status is set to `rebooting` while it restarts.
#[derive(Clone, Default, Debug)]
pub struct RebootCluster {
    _private: (),
}

impl RebootCluster {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for RebootCluster {
    type Output = Result<RebootClusterOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::reboot_cluster)
    }
}

#[cfg(test)]
mod test {
    use crate::error::ErrorKind;
    use crate::operation::{DeleteCluster, RebootCluster};
    use bytes::Bytes;
    use smithy_http::response::ParseStrictResponse;

    #[test]
    fn error_response() {
        let response = http::Response::builder()
            .status(400)
            .body(Bytes::from_static(
                b"<ErrorResponse><Error><Type>Sender</Type><Code>InvalidClusterState</Code>\
                  <Message>There is an operation running on the Cluster.</Message></Error>\
                  <RequestId>req-2</RequestId></ErrorResponse>",
            ))
            .unwrap();
        let err = RebootCluster::new().parse(&response).expect_err("error");
        assert!(err.is_invalid_cluster_state_fault());
        assert_eq!(
            err.message(),
            Some("There is an operation running on the Cluster.")
        );
    }

    #[test]
    fn malformed_success_is_unhandled() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(b"not xml"))
            .unwrap();
        let err = DeleteCluster::new().parse(&response).expect_err("invalid body");
        assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
    }
}
