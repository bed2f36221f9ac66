/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::CacheCluster;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateCacheClusterOutput {
    pub cache_cluster: Option<CacheCluster>,
}

/// Represents the output of a `DescribeCacheClusters` operation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DescribeCacheClustersOutput {
    /// Provides an identifier to allow retrieval of paginated results.
    pub marker: Option<String>,
    pub cache_clusters: Option<Vec<CacheCluster>>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteCacheClusterOutput {
    pub cache_cluster: Option<CacheCluster>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RebootCacheClusterOutput {
    pub cache_cluster: Option<CacheCluster>,
}
