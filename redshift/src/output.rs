/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::Cluster;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateClusterOutput {
    pub cluster: Option<Cluster>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DescribeClustersOutput {
    /// Set when more clusters are available; pass it as `marker` to fetch the next page
    pub marker: Option<String>,
    pub clusters: Option<Vec<Cluster>>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteClusterOutput {
    pub cluster: Option<Cluster>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RebootClusterOutput {
    pub cluster: Option<Cluster>,
}
