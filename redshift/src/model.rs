/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_types::Instant;

/// Describes a cluster.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cluster {
    /// The unique identifier of the cluster.
    pub cluster_identifier: Option<String>,
    /// The node type for the nodes in the cluster, eg. `ra3.4xlarge`
    pub node_type: Option<String>,
    /// The current state of the cluster, eg. `available`, `creating`, `deleting`, `rebooting`
    pub cluster_status: Option<String>,
    /// `Available`, `Unavailable`, `Maintenance`, `Modifying` or `Failed`
    pub cluster_availability_status: Option<String>,
    pub modify_status: Option<String>,
    pub master_username: Option<String>,
    pub db_name: Option<String>,
    /// Not set until the cluster finished creating
    pub endpoint: Option<Endpoint>,
    pub cluster_create_time: Option<Instant>,
    pub automated_snapshot_retention_period: Option<i32>,
    pub vpc_security_groups: Option<Vec<VpcSecurityGroupMembership>>,
    pub cluster_subnet_group_name: Option<String>,
    pub vpc_id: Option<String>,
    pub availability_zone: Option<String>,
    pub preferred_maintenance_window: Option<String>,
    pub cluster_version: Option<String>,
    pub allow_version_upgrade: Option<bool>,
    pub number_of_nodes: Option<i32>,
    pub publicly_accessible: Option<bool>,
    pub encrypted: Option<bool>,
    pub cluster_nodes: Option<Vec<ClusterNode>>,
    pub tags: Option<Vec<Tag>>,
    pub kms_key_id: Option<String>,
    pub enhanced_vpc_routing: Option<bool>,
}

/// Describes a connection endpoint.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Endpoint {
    pub address: Option<String>,
    pub port: Option<i32>,
}

/// The identifier of a node in a cluster.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterNode {
    /// `LEADER`, `COMPUTE-0`, `COMPUTE-1`…
    pub node_role: Option<String>,
    pub private_ip_address: Option<String>,
    pub public_ip_address: Option<String>,
}

/// A tag consisting of a name/value pair for a resource.
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

/// Describes the members of a VPC security group.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VpcSecurityGroupMembership {
    pub vpc_security_group_id: Option<String>,
    pub status: Option<String>,
}
