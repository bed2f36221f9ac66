/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::input::{
    CreateClusterInput, DeleteClusterInput, DescribeClustersInput, RebootClusterInput,
};
use crate::model::Tag;
use smithy_query::{QueryValueWriter, QueryWriter};
use smithy_types::Number;

pub(crate) const API_VERSION: &str = "2012-12-01";

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

fn opt_bool(writer: &mut QueryWriter, name: &'static str, value: Option<bool>) {
    if let Some(value) = value {
        writer.prefix(name).boolean(value);
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

pub(crate) fn create_cluster(input: &CreateClusterInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "CreateCluster", API_VERSION);
    opt_string(&mut writer, "DBName", &input.db_name);
    writer
        .prefix("ClusterIdentifier")
        .string(&input.cluster_identifier);
    opt_string(&mut writer, "ClusterType", &input.cluster_type);
    writer.prefix("NodeType").string(&input.node_type);
    writer.prefix("MasterUsername").string(&input.master_username);
    writer
        .prefix("MasterUserPassword")
        .string(&input.master_user_password);
    if let Some(groups) = &input.cluster_security_groups {
        string_list(
            writer.prefix("ClusterSecurityGroups"),
            "ClusterSecurityGroupName",
            groups,
        );
    }
    if let Some(ids) = &input.vpc_security_group_ids {
        string_list(
            writer.prefix("VpcSecurityGroupIds"),
            "VpcSecurityGroupId",
            ids,
        );
    }
    opt_string(
        &mut writer,
        "ClusterSubnetGroupName",
        &input.cluster_subnet_group_name,
    );
    opt_string(&mut writer, "AvailabilityZone", &input.availability_zone);
    opt_string(
        &mut writer,
        "PreferredMaintenanceWindow",
        &input.preferred_maintenance_window,
    );
    opt_int(
        &mut writer,
        "AutomatedSnapshotRetentionPeriod",
        input.automated_snapshot_retention_period,
    );
    opt_int(&mut writer, "Port", input.port);
    opt_string(&mut writer, "ClusterVersion", &input.cluster_version);
    opt_bool(&mut writer, "AllowVersionUpgrade", input.allow_version_upgrade);
    opt_int(&mut writer, "NumberOfNodes", input.number_of_nodes);
    opt_bool(&mut writer, "PubliclyAccessible", input.publicly_accessible);
    opt_bool(&mut writer, "Encrypted", input.encrypted);
    if let Some(input_tags) = &input.tags {
        tags(writer.prefix("Tags"), input_tags);
    }
    opt_string(&mut writer, "KmsKeyId", &input.kms_key_id);
    writer.finish();
    out
}

pub(crate) fn describe_clusters(input: &DescribeClustersInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DescribeClusters", API_VERSION);
    opt_string(&mut writer, "ClusterIdentifier", &input.cluster_identifier);
    opt_int(&mut writer, "MaxRecords", input.max_records);
    opt_string(&mut writer, "Marker", &input.marker);
    if let Some(keys) = &input.tag_keys {
        string_list(writer.prefix("TagKeys"), "TagKey", keys);
    }
    if let Some(values) = &input.tag_values {
        string_list(writer.prefix("TagValues"), "TagValue", values);
    }
    writer.finish();
    out
}

pub(crate) fn delete_cluster(input: &DeleteClusterInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DeleteCluster", API_VERSION);
    writer
        .prefix("ClusterIdentifier")
        .string(&input.cluster_identifier);
    opt_bool(
        &mut writer,
        "SkipFinalClusterSnapshot",
        input.skip_final_cluster_snapshot,
    );
    opt_string(
        &mut writer,
        "FinalClusterSnapshotIdentifier",
        &input.final_cluster_snapshot_identifier,
    );
    opt_int(
        &mut writer,
        "FinalClusterSnapshotRetentionPeriod",
        input.final_cluster_snapshot_retention_period,
    );
    writer.finish();
    out
}

pub(crate) fn reboot_cluster(input: &RebootClusterInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "RebootCluster", API_VERSION);
    writer
        .prefix("ClusterIdentifier")
        .string(&input.cluster_identifier);
    writer.finish();
    out
}
