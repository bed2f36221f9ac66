/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use crate::model::Tag;
use aws_http::AwsErrorRetryPolicy;
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::{BuildError, Metadata, Operation};
use std::fmt;
use std::fmt::{Debug, Formatter};

fn operation<H>(
    config: &Config,
    operation_name: &'static str,
    body: String,
    handler: H,
) -> Result<Operation<H, AwsErrorRetryPolicy>, BuildError> {
    let request = http::Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(SdkBody::from(body))?;
    let mut request = operation::Request::new(request);
    config.configure(&mut request.properties_mut());
    Ok(Operation::new(request, handler)
        .with_metadata(Metadata::new(operation_name, "redshift"))
        .with_retry_policy(AwsErrorRetryPolicy::new()))
}

pub mod create_cluster_input {
    use crate::input::CreateClusterInput;
    use crate::model::Tag;
    use smithy_http::operation::BuildError;
    use std::fmt;
    use std::fmt::{Debug, Formatter};

    /// A builder for [`CreateClusterInput`](crate::input::CreateClusterInput)
    #[non_exhaustive]
    #[derive(Clone, Default)]
    pub struct Builder {
        db_name: Option<String>,
        cluster_identifier: Option<String>,
        cluster_type: Option<String>,
        node_type: Option<String>,
        master_username: Option<String>,
        master_user_password: Option<String>,
        cluster_security_groups: Option<Vec<String>>,
        vpc_security_group_ids: Option<Vec<String>>,
        cluster_subnet_group_name: Option<String>,
        availability_zone: Option<String>,
        preferred_maintenance_window: Option<String>,
        automated_snapshot_retention_period: Option<i32>,
        port: Option<i32>,
        cluster_version: Option<String>,
        allow_version_upgrade: Option<bool>,
        number_of_nodes: Option<i32>,
        publicly_accessible: Option<bool>,
        encrypted: Option<bool>,
        tags: Option<Vec<Tag>>,
        kms_key_id: Option<String>,
    }

    impl Debug for Builder {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.debug_struct("Builder")
                .field("cluster_identifier", &self.cluster_identifier)
                .field("node_type", &self.node_type)
                .field("master_username", &self.master_username)
                .field("master_user_password", &"** redacted **")
                .field("number_of_nodes", &self.number_of_nodes)
                .finish()
        }
    }

    impl Builder {
        /// The name of the first database created with the cluster. Defaults to `dev`.
        pub fn db_name(mut self, inp: impl Into<String>) -> Self {
            self.db_name = Some(inp.into());
            self
        }

        /// A unique identifier for the cluster, eg. `myexamplecluster`. Stored as a
        /// lowercase string.
        pub fn cluster_identifier(mut self, inp: impl Into<String>) -> Self {
            self.cluster_identifier = Some(inp.into());
            self
        }

        /// `single-node` or `multi-node`. When `single-node`, `number_of_nodes` is not
        /// required.
        pub fn cluster_type(mut self, inp: impl Into<String>) -> Self {
            self.cluster_type = Some(inp.into());
            self
        }

        pub fn node_type(mut self, inp: impl Into<String>) -> Self {
            self.node_type = Some(inp.into());
            self
        }

        pub fn master_username(mut self, inp: impl Into<String>) -> Self {
            self.master_username = Some(inp.into());
            self
        }

        pub fn master_user_password(mut self, inp: impl Into<String>) -> Self {
            self.master_user_password = Some(inp.into());
            self
        }

        /// Appends a cluster security group name
        pub fn cluster_security_groups(mut self, inp: impl Into<String>) -> Self {
            self.cluster_security_groups
                .get_or_insert_with(Vec::new)
                .push(inp.into());
            self
        }

        /// Appends a VPC security group id
        pub fn vpc_security_group_ids(mut self, inp: impl Into<String>) -> Self {
            self.vpc_security_group_ids
                .get_or_insert_with(Vec::new)
                .push(inp.into());
            self
        }

        pub fn cluster_subnet_group_name(mut self, inp: impl Into<String>) -> Self {
            self.cluster_subnet_group_name = Some(inp.into());
            self
        }

        pub fn availability_zone(mut self, inp: impl Into<String>) -> Self {
            self.availability_zone = Some(inp.into());
            self
        }

        pub fn preferred_maintenance_window(mut self, inp: impl Into<String>) -> Self {
            self.preferred_maintenance_window = Some(inp.into());
            self
        }

        pub fn automated_snapshot_retention_period(mut self, inp: i32) -> Self {
            self.automated_snapshot_retention_period = Some(inp);
            self
        }

        /// The port for client connections. Defaults to 5439.
        pub fn port(mut self, inp: i32) -> Self {
            self.port = Some(inp);
            self
        }

        pub fn cluster_version(mut self, inp: impl Into<String>) -> Self {
            self.cluster_version = Some(inp.into());
            self
        }

        pub fn allow_version_upgrade(mut self, inp: bool) -> Self {
            self.allow_version_upgrade = Some(inp);
            self
        }

        pub fn number_of_nodes(mut self, inp: i32) -> Self {
            self.number_of_nodes = Some(inp);
            self
        }

        pub fn publicly_accessible(mut self, inp: bool) -> Self {
            self.publicly_accessible = Some(inp);
            self
        }

        pub fn encrypted(mut self, inp: bool) -> Self {
            self.encrypted = Some(inp);
            self
        }

        pub fn tags(mut self, inp: Tag) -> Self {
            self.tags.get_or_insert_with(Vec::new).push(inp);
            self
        }

        pub fn kms_key_id(mut self, inp: impl Into<String>) -> Self {
            self.kms_key_id = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<CreateClusterInput, BuildError> {
            Ok(CreateClusterInput {
                db_name: self.db_name,
                cluster_identifier: self.cluster_identifier.ok_or(BuildError::MissingField {
                    field: "cluster_identifier",
                    details: "cluster_identifier is required when building CreateClusterInput",
                })?,
                cluster_type: self.cluster_type,
                node_type: self.node_type.ok_or(BuildError::MissingField {
                    field: "node_type",
                    details: "node_type is required when building CreateClusterInput",
                })?,
                master_username: self.master_username.ok_or(BuildError::MissingField {
                    field: "master_username",
                    details: "master_username is required when building CreateClusterInput",
                })?,
                master_user_password: self.master_user_password.ok_or(
                    BuildError::MissingField {
                        field: "master_user_password",
                        details:
                            "master_user_password is required when building CreateClusterInput",
                    },
                )?,
                cluster_security_groups: self.cluster_security_groups,
                vpc_security_group_ids: self.vpc_security_group_ids,
                cluster_subnet_group_name: self.cluster_subnet_group_name,
                availability_zone: self.availability_zone,
                preferred_maintenance_window: self.preferred_maintenance_window,
                automated_snapshot_retention_period: self.automated_snapshot_retention_period,
                port: self.port,
                cluster_version: self.cluster_version,
                allow_version_upgrade: self.allow_version_upgrade,
                number_of_nodes: self.number_of_nodes,
                publicly_accessible: self.publicly_accessible,
                encrypted: self.encrypted,
                tags: self.tags,
                kms_key_id: self.kms_key_id,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, PartialEq)]
pub struct CreateClusterInput {
    pub db_name: Option<String>,
    pub cluster_identifier: String,
    pub cluster_type: Option<String>,
    pub node_type: String,
    pub master_username: String,
    pub master_user_password: String,
    pub cluster_security_groups: Option<Vec<String>>,
    pub vpc_security_group_ids: Option<Vec<String>>,
    pub cluster_subnet_group_name: Option<String>,
    pub availability_zone: Option<String>,
    pub preferred_maintenance_window: Option<String>,
    pub automated_snapshot_retention_period: Option<i32>,
    pub port: Option<i32>,
    pub cluster_version: Option<String>,
    pub allow_version_upgrade: Option<bool>,
    pub number_of_nodes: Option<i32>,
    pub publicly_accessible: Option<bool>,
    pub encrypted: Option<bool>,
    pub tags: Option<Vec<Tag>>,
    pub kms_key_id: Option<String>,
}

impl Debug for CreateClusterInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateClusterInput")
            .field("cluster_identifier", &self.cluster_identifier)
            .field("node_type", &self.node_type)
            .field("master_username", &self.master_username)
            .field("master_user_password", &"** redacted **")
            .field("number_of_nodes", &self.number_of_nodes)
            .finish()
    }
}

impl CreateClusterInput {
    pub fn builder() -> create_cluster_input::Builder {
        create_cluster_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateCluster, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "CreateCluster",
            crate::serializer::create_cluster(self),
            crate::operation::CreateCluster::new(),
        )
    }
}

pub mod describe_clusters_input {
    use crate::input::DescribeClustersInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DescribeClustersInput`](crate::input::DescribeClustersInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        cluster_identifier: Option<String>,
        max_records: Option<i32>,
        marker: Option<String>,
        tag_keys: Option<Vec<String>>,
        tag_values: Option<Vec<String>>,
    }

    impl Builder {
        pub fn cluster_identifier(mut self, inp: impl Into<String>) -> Self {
            self.cluster_identifier = Some(inp.into());
            self
        }

        /// Between 20 and 100. Defaults to 100.
        pub fn max_records(mut self, inp: i32) -> Self {
            self.max_records = Some(inp);
            self
        }

        pub fn marker(mut self, inp: impl Into<String>) -> Self {
            self.marker = Some(inp.into());
            self
        }

        /// Appends a tag key: only clusters carrying one of these keys are returned
        pub fn tag_keys(mut self, inp: impl Into<String>) -> Self {
            self.tag_keys.get_or_insert_with(Vec::new).push(inp.into());
            self
        }

        pub fn tag_values(mut self, inp: impl Into<String>) -> Self {
            self.tag_values
                .get_or_insert_with(Vec::new)
                .push(inp.into());
            self
        }

        pub fn build(self) -> Result<DescribeClustersInput, BuildError> {
            Ok(DescribeClustersInput {
                cluster_identifier: self.cluster_identifier,
                max_records: self.max_records,
                marker: self.marker,
                tag_keys: self.tag_keys,
                tag_values: self.tag_values,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeClustersInput {
    pub cluster_identifier: Option<String>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
    pub tag_keys: Option<Vec<String>>,
    pub tag_values: Option<Vec<String>>,
}

impl DescribeClustersInput {
    pub fn builder() -> describe_clusters_input::Builder {
        describe_clusters_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeClusters, AwsErrorRetryPolicy>, BuildError>
    {
        operation(
            config,
            "DescribeClusters",
            crate::serializer::describe_clusters(self),
            crate::operation::DescribeClusters::new(),
        )
    }
}

pub mod delete_cluster_input {
    use crate::input::DeleteClusterInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DeleteClusterInput`](crate::input::DeleteClusterInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        cluster_identifier: Option<String>,
        skip_final_cluster_snapshot: Option<bool>,
        final_cluster_snapshot_identifier: Option<String>,
        final_cluster_snapshot_retention_period: Option<i32>,
    }

    impl Builder {
        pub fn cluster_identifier(mut self, inp: impl Into<String>) -> Self {
            self.cluster_identifier = Some(inp.into());
            self
        }

        /// When `false` (the default), `final_cluster_snapshot_identifier` must be set.
        pub fn skip_final_cluster_snapshot(mut self, inp: bool) -> Self {
            self.skip_final_cluster_snapshot = Some(inp);
            self
        }

        pub fn final_cluster_snapshot_identifier(mut self, inp: impl Into<String>) -> Self {
            self.final_cluster_snapshot_identifier = Some(inp.into());
            self
        }

        /// Days to retain the final snapshot; `-1` retains it indefinitely
        pub fn final_cluster_snapshot_retention_period(mut self, inp: i32) -> Self {
            self.final_cluster_snapshot_retention_period = Some(inp);
            self
        }

        pub fn build(self) -> Result<DeleteClusterInput, BuildError> {
            Ok(DeleteClusterInput {
                cluster_identifier: self.cluster_identifier.ok_or(BuildError::MissingField {
                    field: "cluster_identifier",
                    details: "cluster_identifier is required when building DeleteClusterInput",
                })?,
                skip_final_cluster_snapshot: self.skip_final_cluster_snapshot,
                final_cluster_snapshot_identifier: self.final_cluster_snapshot_identifier,
                final_cluster_snapshot_retention_period: self
                    .final_cluster_snapshot_retention_period,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteClusterInput {
    pub cluster_identifier: String,
    pub skip_final_cluster_snapshot: Option<bool>,
    pub final_cluster_snapshot_identifier: Option<String>,
    pub final_cluster_snapshot_retention_period: Option<i32>,
}

impl DeleteClusterInput {
    pub fn builder() -> delete_cluster_input::Builder {
        delete_cluster_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteCluster, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "DeleteCluster",
            crate::serializer::delete_cluster(self),
            crate::operation::DeleteCluster::new(),
        )
    }
}

pub mod reboot_cluster_input {
    use crate::input::RebootClusterInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`RebootClusterInput`](crate::input::RebootClusterInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        cluster_identifier: Option<String>,
    }

    impl Builder {
        pub fn cluster_identifier(mut self, inp: impl Into<String>) -> Self {
            self.cluster_identifier = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<RebootClusterInput, BuildError> {
            Ok(RebootClusterInput {
                cluster_identifier: self.cluster_identifier.ok_or(BuildError::MissingField {
                    field: "cluster_identifier",
                    details: "cluster_identifier is required when building RebootClusterInput",
                })?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct RebootClusterInput {
    pub cluster_identifier: String,
}

impl RebootClusterInput {
    pub fn builder() -> reboot_cluster_input::Builder {
        reboot_cluster_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::RebootCluster, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "RebootCluster",
            crate::serializer::reboot_cluster(self),
            crate::operation::RebootCluster::new(),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::input::{CreateClusterInput, DescribeClustersInput};
    use crate::model::Tag;
    use crate::{Credentials, Region};
    use smithy_http::operation::BuildError;

    fn config() -> Config {
        Config::builder()
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::from_keys("akid", "secret", None))
            .build()
    }

    fn create_input() -> CreateClusterInput {
        CreateClusterInput::builder()
            .cluster_identifier("examplecluster")
            .node_type("dc2.large")
            .master_username("adminuser")
            .master_user_password("TopSecret1")
            .cluster_type("multi-node")
            .number_of_nodes(2)
            .vpc_security_group_ids("sg-8fb07be3")
            .tags(Tag::new("env", "test"))
            .build()
            .expect("valid input")
    }

    #[test]
    fn create_cluster_form() {
        let op = create_input().make_operation(&config()).expect("valid operation");
        assert_eq!(
            std::str::from_utf8(op.request().http().body().bytes().unwrap()).unwrap(),
            "Action=CreateCluster&Version=2012-12-01\
             &ClusterIdentifier=examplecluster\
             &ClusterType=multi-node\
             &NodeType=dc2.large\
             &MasterUsername=adminuser\
             &MasterUserPassword=TopSecret1\
             &VpcSecurityGroupIds.VpcSecurityGroupId.1=sg-8fb07be3\
             &NumberOfNodes=2\
             &Tags.Tag.1.Key=env\
             &Tags.Tag.1.Value=test"
        );
    }

    #[test]
    fn password_is_redacted() {
        let input = create_input();
        let debug = format!("{:?}", input);
        assert!(!debug.contains("TopSecret1"), "{}", debug);
        assert!(debug.contains("examplecluster"));
        let builder = CreateClusterInput::builder().master_user_password("TopSecret1");
        assert!(!format!("{:?}", builder).contains("TopSecret1"));
    }

    #[test]
    fn required_members() {
        let err = CreateClusterInput::builder()
            .cluster_identifier("examplecluster")
            .node_type("dc2.large")
            .master_username("adminuser")
            .build()
            .expect_err("password is required");
        assert!(matches!(
            err,
            BuildError::MissingField {
                field: "master_user_password",
                ..
            }
        ));
    }

    #[test]
    fn describe_with_tag_filters() {
        let op = DescribeClustersInput::builder()
            .tag_keys("env")
            .tag_keys("team")
            .tag_values("test")
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(
            op.request().http().body().bytes().unwrap(),
            &b"Action=DescribeClusters&Version=2012-12-01&TagKeys.TagKey.1=env&TagKeys.TagKey.2=team&TagValues.TagValue.1=test"[..]
        );
        assert_eq!(op.metadata().map(|m| m.service()), Some("redshift"));
    }
}
