/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_types::Instant;

/// Contains all of the attributes of a specific cluster.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CacheCluster {
    pub cache_cluster_id: Option<String>,
    /// Present for Memcached clusters only: the endpoint that discovers every node
    pub configuration_endpoint: Option<Endpoint>,
    pub client_download_landing_page: Option<String>,
    pub cache_node_type: Option<String>,
    /// `memcached` or `redis`
    pub engine: Option<String>,
    pub engine_version: Option<String>,
    pub cache_cluster_status: Option<String>,
    pub num_cache_nodes: Option<i32>,
    pub preferred_availability_zone: Option<String>,
    pub cache_cluster_create_time: Option<Instant>,
    pub preferred_maintenance_window: Option<String>,
    pub cache_security_groups: Option<Vec<CacheSecurityGroupMembership>>,
    pub cache_subnet_group_name: Option<String>,
    /// Only returned when `ShowCacheNodeInfo` was requested
    pub cache_nodes: Option<Vec<CacheNode>>,
    pub auto_minor_version_upgrade: Option<bool>,
    pub security_groups: Option<Vec<SecurityGroupMembership>>,
    pub replication_group_id: Option<String>,
    pub snapshot_retention_limit: Option<i32>,
    pub snapshot_window: Option<String>,
    pub transit_encryption_enabled: Option<bool>,
    pub at_rest_encryption_enabled: Option<bool>,
    pub arn: Option<String>,
}

/// The address and port of a cluster or cache node
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Endpoint {
    pub address: Option<String>,
    pub port: Option<i32>,
}

/// Represents an individual cache node within a cluster.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CacheNode {
    /// Cache node IDs are numbered 0001, 0002, and so on
    pub cache_node_id: Option<String>,
    pub cache_node_status: Option<String>,
    pub cache_node_create_time: Option<Instant>,
    pub endpoint: Option<Endpoint>,
    pub parameter_group_status: Option<String>,
    pub source_cache_node_id: Option<String>,
    pub customer_availability_zone: Option<String>,
}

/// Represents a single cache security group and its status.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CacheSecurityGroupMembership {
    pub cache_security_group_name: Option<String>,
    pub status: Option<String>,
}

/// Represents a single VPC security group and its status.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SecurityGroupMembership {
    pub security_group_id: Option<String>,
    pub status: Option<String>,
}

/// A tag that can be added to an ElastiCache cluster or replication group.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}
