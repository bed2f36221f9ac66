/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::Error;
use crate::output::{
    CreateCacheClusterOutput, DeleteCacheClusterOutput, DescribeCacheClustersOutput,
    RebootCacheClusterOutput,
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

/// Creates a cluster. All nodes in the cluster run the same protocol-compliant cache engine
/// software, either Memcached or Redis.
#[derive(Clone, Default, Debug)]
pub struct CreateCacheCluster {
    _private: (),
}

impl CreateCacheCluster {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for CreateCacheCluster {
    type Output = Result<CreateCacheClusterOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::create_cache_cluster)
    }
}

/// Returns information about all provisioned clusters if no cluster identifier is specified,
/// or about a specific cache cluster if a cluster identifier is supplied.
#[derive(Clone, Default, Debug)]
pub struct DescribeCacheClusters {
    _private: (),
}

impl DescribeCacheClusters {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for DescribeCacheClusters {
    type Output = Result<DescribeCacheClustersOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::describe_cache_clusters)
    }
}

/// Deletes a previously provisioned cluster. The cluster must be in the `available` state.
#[derive(Clone, Default, Debug)]
pub struct DeleteCacheCluster {
    _private: (),
}

impl DeleteCacheCluster {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for DeleteCacheCluster {
    type Output = Result<DeleteCacheClusterOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::delete_cache_cluster)
    }
}

/// Reboots some, or all, of the cache nodes within a provisioned cluster.
///
/// The cluster status is set to `rebooting cluster nodes` while the nodes restart.
#[derive(Clone, Default, Debug)]
pub struct RebootCacheCluster {
    _private: (),
}

impl RebootCacheCluster {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for RebootCacheCluster {
    type Output = Result<RebootCacheClusterOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::reboot_cache_cluster)
    }
}
