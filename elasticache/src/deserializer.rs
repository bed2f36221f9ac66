/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{
    CacheCluster, CacheNode, CacheSecurityGroupMembership, Endpoint, SecurityGroupMembership,
};
use crate::output::{
    CreateCacheClusterOutput, DeleteCacheClusterOutput, DescribeCacheClustersOutput,
    RebootCacheClusterOutput,
};
use smithy_types::instant::Format;
use smithy_types::Instant;
use smithy_xml::decode::{Document, Element, XmlError};

/// Parse `<{Op}Response><{Op}Result>…` and hand the result element to `parse`
///
/// Operations without output members may omit the result element entirely.
fn parse_result<T: Default>(
    body: &[u8],
    operation: &str,
    parse: impl FnOnce(&Element) -> Result<T, XmlError>,
) -> Result<T, XmlError> {
    let body = std::str::from_utf8(body).map_err(|_| XmlError::custom("invalid utf-8"))?;
    let root = Document::parse(body)?;
    let response_name = format!("{}Response", operation);
    if root.name() != response_name {
        return Err(XmlError::custom(format!(
            "expected <{}>, found <{}>",
            response_name,
            root.name()
        )));
    }
    match root.child(&format!("{}Result", operation)) {
        Some(result) => parse(result),
        None => Ok(T::default()),
    }
}

fn string(el: &Element, name: &str) -> Option<String> {
    el.child_text(name).map(str::to_owned)
}

fn timestamp(el: &Element, name: &str) -> Result<Option<Instant>, XmlError> {
    el.child_text(name)
        .map(|text| {
            Instant::from_str(text, Format::DateTime)
                .map_err(|err| XmlError::custom(format!("invalid <{}>: {}", name, err)))
        })
        .transpose()
}

/// Lists are wrapped: `<Wrapper><Member>…</Member><Member>…</Member></Wrapper>`
fn list<T>(
    el: &Element,
    wrapper: &str,
    member: &str,
    parse: fn(&Element) -> Result<T, XmlError>,
) -> Result<Option<Vec<T>>, XmlError> {
    el.child(wrapper)
        .map(|items| {
            items
                .children_named(member)
                .map(parse)
                .collect::<Result<Vec<T>, XmlError>>()
        })
        .transpose()
}

fn endpoint(el: &Element) -> Result<Endpoint, XmlError> {
    Ok(Endpoint {
        address: string(el, "Address"),
        port: el.parse_child("Port")?,
    })
}

fn cache_node(el: &Element) -> Result<CacheNode, XmlError> {
    Ok(CacheNode {
        cache_node_id: string(el, "CacheNodeId"),
        cache_node_status: string(el, "CacheNodeStatus"),
        cache_node_create_time: timestamp(el, "CacheNodeCreateTime")?,
        endpoint: el.child("Endpoint").map(endpoint).transpose()?,
        parameter_group_status: string(el, "ParameterGroupStatus"),
        source_cache_node_id: string(el, "SourceCacheNodeId"),
        customer_availability_zone: string(el, "CustomerAvailabilityZone"),
    })
}

fn cache_security_group(el: &Element) -> Result<CacheSecurityGroupMembership, XmlError> {
    Ok(CacheSecurityGroupMembership {
        cache_security_group_name: string(el, "CacheSecurityGroupName"),
        status: string(el, "Status"),
    })
}

fn security_group(el: &Element) -> Result<SecurityGroupMembership, XmlError> {
    Ok(SecurityGroupMembership {
        security_group_id: string(el, "SecurityGroupId"),
        status: string(el, "Status"),
    })
}

fn cache_cluster(el: &Element) -> Result<CacheCluster, XmlError> {
    Ok(CacheCluster {
        cache_cluster_id: string(el, "CacheClusterId"),
        configuration_endpoint: el.child("ConfigurationEndpoint").map(endpoint).transpose()?,
        client_download_landing_page: string(el, "ClientDownloadLandingPage"),
        cache_node_type: string(el, "CacheNodeType"),
        engine: string(el, "Engine"),
        engine_version: string(el, "EngineVersion"),
        cache_cluster_status: string(el, "CacheClusterStatus"),
        num_cache_nodes: el.parse_child("NumCacheNodes")?,
        preferred_availability_zone: string(el, "PreferredAvailabilityZone"),
        cache_cluster_create_time: timestamp(el, "CacheClusterCreateTime")?,
        preferred_maintenance_window: string(el, "PreferredMaintenanceWindow"),
        cache_security_groups: list(
            el,
            "CacheSecurityGroups",
            "CacheSecurityGroup",
            cache_security_group,
        )?,
        cache_subnet_group_name: string(el, "CacheSubnetGroupName"),
        cache_nodes: list(el, "CacheNodes", "CacheNode", cache_node)?,
        auto_minor_version_upgrade: el.parse_child("AutoMinorVersionUpgrade")?,
        security_groups: list(el, "SecurityGroups", "member", security_group)?,
        replication_group_id: string(el, "ReplicationGroupId"),
        snapshot_retention_limit: el.parse_child("SnapshotRetentionLimit")?,
        snapshot_window: string(el, "SnapshotWindow"),
        transit_encryption_enabled: el.parse_child("TransitEncryptionEnabled")?,
        at_rest_encryption_enabled: el.parse_child("AtRestEncryptionEnabled")?,
        arn: string(el, "ARN"),
    })
}

fn single_cluster(result: &Element) -> Result<Option<CacheCluster>, XmlError> {
    result.child("CacheCluster").map(cache_cluster).transpose()
}

pub(crate) fn create_cache_cluster(body: &[u8]) -> Result<CreateCacheClusterOutput, XmlError> {
    parse_result(body, "CreateCacheCluster", |result| {
        Ok(CreateCacheClusterOutput {
            cache_cluster: single_cluster(result)?,
        })
    })
}

pub(crate) fn describe_cache_clusters(
    body: &[u8],
) -> Result<DescribeCacheClustersOutput, XmlError> {
    parse_result(body, "DescribeCacheClusters", |result| {
        Ok(DescribeCacheClustersOutput {
            marker: string(result, "Marker"),
            cache_clusters: list(result, "CacheClusters", "CacheCluster", cache_cluster)?,
        })
    })
}

pub(crate) fn delete_cache_cluster(body: &[u8]) -> Result<DeleteCacheClusterOutput, XmlError> {
    parse_result(body, "DeleteCacheCluster", |result| {
        Ok(DeleteCacheClusterOutput {
            cache_cluster: single_cluster(result)?,
        })
    })
}

pub(crate) fn reboot_cache_cluster(body: &[u8]) -> Result<RebootCacheClusterOutput, XmlError> {
    parse_result(body, "RebootCacheCluster", |result| {
        Ok(RebootCacheClusterOutput {
            cache_cluster: single_cluster(result)?,
        })
    })
}
