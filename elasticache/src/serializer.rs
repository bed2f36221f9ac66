/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::input::{
    CreateCacheClusterInput, DeleteCacheClusterInput, DescribeCacheClustersInput,
    RebootCacheClusterInput,
};
use crate::model::Tag;
use smithy_query::{QueryValueWriter, QueryWriter};
use smithy_types::Number;

pub(crate) const API_VERSION: &str = "2015-02-02";

fn opt_string(writer: &mut QueryWriter, name: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        writer.prefix(name).string(value);
    }
}

fn opt_int(writer: &mut QueryWriter, name: &'static str, value: Option<i32>) {
    if let Some(value) = value {
        writer.prefix(name).number(Number::from(value));
    }
}

fn string_list(writer: QueryValueWriter, member: &'static str, values: &[String]) {
    let mut list = writer.start_list(false, Some(member));
    for value in values {
        list.entry().string(value);
    }
    list.finish();
}

fn tags(writer: QueryValueWriter, tags: &[Tag]) {
    let mut list = writer.start_list(false, Some("Tag"));
    for tag in tags {
        let mut entry = list.entry();
        if let Some(key) = &tag.key {
            entry.prefix("Key").string(key);
        }
        if let Some(value) = &tag.value {
            entry.prefix("Value").string(value);
        }
    }
    list.finish();
}

pub(crate) fn create_cache_cluster(input: &CreateCacheClusterInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "CreateCacheCluster", API_VERSION);
    writer
        .prefix("CacheClusterId")
        .string(&input.cache_cluster_id);
    opt_string(&mut writer, "ReplicationGroupId", &input.replication_group_id);
    opt_string(&mut writer, "AZMode", &input.az_mode);
    opt_string(
        &mut writer,
        "PreferredAvailabilityZone",
        &input.preferred_availability_zone,
    );
    opt_int(&mut writer, "NumCacheNodes", input.num_cache_nodes);
    opt_string(&mut writer, "CacheNodeType", &input.cache_node_type);
    opt_string(&mut writer, "Engine", &input.engine);
    opt_string(&mut writer, "EngineVersion", &input.engine_version);
    opt_string(
        &mut writer,
        "CacheParameterGroupName",
        &input.cache_parameter_group_name,
    );
    opt_string(
        &mut writer,
        "CacheSubnetGroupName",
        &input.cache_subnet_group_name,
    );
    if let Some(names) = &input.cache_security_group_names {
        string_list(
            writer.prefix("CacheSecurityGroupNames"),
            "CacheSecurityGroupName",
            names,
        );
    }
    if let Some(ids) = &input.security_group_ids {
        string_list(writer.prefix("SecurityGroupIds"), "SecurityGroupId", ids);
    }
    if let Some(input_tags) = &input.tags {
        tags(writer.prefix("Tags"), input_tags);
    }
    opt_int(
        &mut writer,
        "SnapshotRetentionLimit",
        input.snapshot_retention_limit,
    );
    opt_string(
        &mut writer,
        "PreferredMaintenanceWindow",
        &input.preferred_maintenance_window,
    );
    opt_int(&mut writer, "Port", input.port);
    if let Some(upgrade) = input.auto_minor_version_upgrade {
        writer.prefix("AutoMinorVersionUpgrade").boolean(upgrade);
    }
    writer.finish();
    out
}

pub(crate) fn describe_cache_clusters(input: &DescribeCacheClustersInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DescribeCacheClusters", API_VERSION);
    opt_string(&mut writer, "CacheClusterId", &input.cache_cluster_id);
    opt_int(&mut writer, "MaxRecords", input.max_records);
    opt_string(&mut writer, "Marker", &input.marker);
    if let Some(show) = input.show_cache_node_info {
        writer.prefix("ShowCacheNodeInfo").boolean(show);
    }
    writer.finish();
    out
}

pub(crate) fn delete_cache_cluster(input: &DeleteCacheClusterInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DeleteCacheCluster", API_VERSION);
    writer
        .prefix("CacheClusterId")
        .string(&input.cache_cluster_id);
    opt_string(
        &mut writer,
        "FinalSnapshotIdentifier",
        &input.final_snapshot_identifier,
    );
    writer.finish();
    out
}

pub(crate) fn reboot_cache_cluster(input: &RebootCacheClusterInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "RebootCacheCluster", API_VERSION);
    writer
        .prefix("CacheClusterId")
        .string(&input.cache_cluster_id);
    string_list(
        writer.prefix("CacheNodeIdsToReboot"),
        "CacheNodeId",
        &input.cache_node_ids_to_reboot,
    );
    writer.finish();
    out
}
