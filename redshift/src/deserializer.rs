/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{Cluster, ClusterNode, Endpoint, Tag, VpcSecurityGroupMembership};
use crate::output::{
    CreateClusterOutput, DeleteClusterOutput, DescribeClustersOutput, RebootClusterOutput,
};
use smithy_types::instant::Format;
use smithy_types::Instant;
use smithy_xml::decode::{Document, Element, XmlError};

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

fn cluster_node(el: &Element) -> Result<ClusterNode, XmlError> {
    Ok(ClusterNode {
        node_role: string(el, "NodeRole"),
        private_ip_address: string(el, "PrivateIPAddress"),
        public_ip_address: string(el, "PublicIPAddress"),
    })
}

fn tag(el: &Element) -> Result<Tag, XmlError> {
    Ok(Tag {
        key: string(el, "Key"),
        value: string(el, "Value"),
    })
}

fn vpc_security_group(el: &Element) -> Result<VpcSecurityGroupMembership, XmlError> {
    Ok(VpcSecurityGroupMembership {
        vpc_security_group_id: string(el, "VpcSecurityGroupId"),
        status: string(el, "Status"),
    })
}

fn cluster(el: &Element) -> Result<Cluster, XmlError> {
    Ok(Cluster {
        cluster_identifier: string(el, "ClusterIdentifier"),
        node_type: string(el, "NodeType"),
        cluster_status: string(el, "ClusterStatus"),
        cluster_availability_status: string(el, "ClusterAvailabilityStatus"),
        modify_status: string(el, "ModifyStatus"),
        master_username: string(el, "MasterUsername"),
        db_name: string(el, "DBName"),
        endpoint: el.child("Endpoint").map(endpoint).transpose()?,
        cluster_create_time: timestamp(el, "ClusterCreateTime")?,
        automated_snapshot_retention_period: el.parse_child("AutomatedSnapshotRetentionPeriod")?,
        vpc_security_groups: list(
            el,
            "VpcSecurityGroups",
            "VpcSecurityGroup",
            vpc_security_group,
        )?,
        cluster_subnet_group_name: string(el, "ClusterSubnetGroupName"),
        vpc_id: string(el, "VpcId"),
        availability_zone: string(el, "AvailabilityZone"),
        preferred_maintenance_window: string(el, "PreferredMaintenanceWindow"),
        cluster_version: string(el, "ClusterVersion"),
        allow_version_upgrade: el.parse_child("AllowVersionUpgrade")?,
        number_of_nodes: el.parse_child("NumberOfNodes")?,
        publicly_accessible: el.parse_child("PubliclyAccessible")?,
        encrypted: el.parse_child("Encrypted")?,
        cluster_nodes: list(el, "ClusterNodes", "member", cluster_node)?,
        tags: list(el, "Tags", "Tag", tag)?,
        kms_key_id: string(el, "KmsKeyId"),
        enhanced_vpc_routing: el.parse_child("EnhancedVpcRouting")?,
    })
}

fn single_cluster(result: &Element) -> Result<Option<Cluster>, XmlError> {
    result.child("Cluster").map(cluster).transpose()
}

pub(crate) fn create_cluster(body: &[u8]) -> Result<CreateClusterOutput, XmlError> {
    parse_result(body, "CreateCluster", |result| {
        Ok(CreateClusterOutput {
            cluster: single_cluster(result)?,
        })
    })
}

pub(crate) fn describe_clusters(body: &[u8]) -> Result<DescribeClustersOutput, XmlError> {
    parse_result(body, "DescribeClusters", |result| {
        Ok(DescribeClustersOutput {
            marker: string(result, "Marker"),
            clusters: list(result, "Clusters", "Cluster", cluster)?,
        })
    })
}

pub(crate) fn delete_cluster(body: &[u8]) -> Result<DeleteClusterOutput, XmlError> {
    parse_result(body, "DeleteCluster", |result| {
        Ok(DeleteClusterOutput {
            cluster: single_cluster(result)?,
        })
    })
}

pub(crate) fn reboot_cluster(body: &[u8]) -> Result<RebootClusterOutput, XmlError> {
    parse_result(body, "RebootCluster", |result| {
        Ok(RebootClusterOutput {
            cluster: single_cluster(result)?,
        })
    })
}

#[cfg(test)]
mod test {
    use crate::deserializer::{describe_clusters, reboot_cluster};
    use crate::model::Tag;
    use smithy_types::Instant;

    #[test]
    fn describe_clusters_response() {
        let body = br#"<DescribeClustersResponse xmlns="http://redshift.amazonaws.com/doc/2012-12-01/">
  <DescribeClustersResult>
    <Clusters>
      <Cluster>
        <ClusterIdentifier>examplecluster</ClusterIdentifier>
        <NodeType>dc2.large</NodeType>
        <ClusterStatus>available</ClusterStatus>
        <ClusterAvailabilityStatus>Available</ClusterAvailabilityStatus>
        <MasterUsername>adminuser</MasterUsername>
        <DBName>dev</DBName>
        <Endpoint>
          <Address>examplecluster.cg034hpkmmjt.us-east-1.redshift.amazonaws.com</Address>
          <Port>5439</Port>
        </Endpoint>
        <ClusterCreateTime>2013-01-22T21:59:29.559Z</ClusterCreateTime>
        <AutomatedSnapshotRetentionPeriod>1</AutomatedSnapshotRetentionPeriod>
        <VpcSecurityGroups>
          <VpcSecurityGroup>
            <VpcSecurityGroupId>sg-8fb07be3</VpcSecurityGroupId>
            <Status>active</Status>
          </VpcSecurityGroup>
        </VpcSecurityGroups>
        <AvailabilityZone>us-east-1a</AvailabilityZone>
        <ClusterVersion>1.0</ClusterVersion>
        <AllowVersionUpgrade>true</AllowVersionUpgrade>
        <NumberOfNodes>2</NumberOfNodes>
        <PubliclyAccessible>false</PubliclyAccessible>
        <Encrypted>false</Encrypted>
        <ClusterNodes>
          <member>
            <NodeRole>LEADER</NodeRole>
            <PrivateIPAddress>10.0.0.10</PrivateIPAddress>
          </member>
          <member>
            <NodeRole>COMPUTE-0</NodeRole>
            <PrivateIPAddress>10.0.0.11</PrivateIPAddress>
          </member>
        </ClusterNodes>
        <Tags>
          <Tag><Key>env</Key><Value>test</Value></Tag>
        </Tags>
      </Cluster>
    </Clusters>
  </DescribeClustersResult>
  <ResponseMetadata>
    <RequestId>837d45d6-64f0-11e2-b07c-f7fbdd006c67</RequestId>
  </ResponseMetadata>
</DescribeClustersResponse>"#;
        let output = describe_clusters(body).expect("valid response");
        assert_eq!(output.marker, None);
        let clusters = output.clusters.expect("clusters");
        let cluster = &clusters[0];
        assert_eq!(cluster.db_name.as_deref(), Some("dev"));
        assert_eq!(
            cluster.endpoint.as_ref().and_then(|e| e.port),
            Some(5439)
        );
        assert_eq!(
            cluster.cluster_create_time,
            Some(Instant::from_secs_and_nanos(1358891969, 559_000_000))
        );
        assert_eq!(cluster.publicly_accessible, Some(false));
        let nodes = cluster.cluster_nodes.as_ref().expect("nodes");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].node_role.as_deref(), Some("COMPUTE-0"));
        assert_eq!(nodes[1].public_ip_address, None);
        assert_eq!(cluster.tags, Some(vec![Tag::new("env", "test")]));
        assert_eq!(
            cluster.vpc_security_groups.as_ref().map(|groups| groups.len()),
            Some(1)
        );
    }

    #[test]
    fn reboot_without_result() {
        let output = reboot_cluster(
            b"<RebootClusterResponse><ResponseMetadata><RequestId>1</RequestId></ResponseMetadata></RebootClusterResponse>",
        )
        .expect("valid response");
        assert_eq!(output.cluster, None);
    }
}
