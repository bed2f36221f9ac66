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
        .with_metadata(Metadata::new(operation_name, "elasticache"))
        .with_retry_policy(AwsErrorRetryPolicy::new()))
}

pub mod create_cache_cluster_input {
    use crate::input::CreateCacheClusterInput;
    use crate::model::Tag;
    use smithy_http::operation::BuildError;

    /// A builder for [`CreateCacheClusterInput`](crate::input::CreateCacheClusterInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        cache_cluster_id: Option<String>,
        replication_group_id: Option<String>,
        az_mode: Option<String>,
        preferred_availability_zone: Option<String>,
        num_cache_nodes: Option<i32>,
        cache_node_type: Option<String>,
        engine: Option<String>,
        engine_version: Option<String>,
        cache_parameter_group_name: Option<String>,
        cache_subnet_group_name: Option<String>,
        cache_security_group_names: Option<Vec<String>>,
        security_group_ids: Option<Vec<String>>,
        tags: Option<Vec<Tag>>,
        snapshot_retention_limit: Option<i32>,
        preferred_maintenance_window: Option<String>,
        port: Option<i32>,
        auto_minor_version_upgrade: Option<bool>,
    }

    impl Builder {
        /// The node group (shard) identifier. Stored as a lowercase string.
        ///
        /// Must contain 1 to 50 alphanumeric characters or hyphens and begin with a letter.
        pub fn cache_cluster_id(mut self, inp: impl Into<String>) -> Self {
            self.cache_cluster_id = Some(inp.into());
            self
        }

        /// The ID of the replication group to which this cluster should belong.
        pub fn replication_group_id(mut self, inp: impl Into<String>) -> Self {
            self.replication_group_id = Some(inp.into());
            self
        }

        /// `single-az` or `cross-az`. Memcached only.
        pub fn az_mode(mut self, inp: impl Into<String>) -> Self {
            self.az_mode = Some(inp.into());
            self
        }

        pub fn preferred_availability_zone(mut self, inp: impl Into<String>) -> Self {
            self.preferred_availability_zone = Some(inp.into());
            self
        }

        /// The initial number of cache nodes. For Redis this value must be 1.
        pub fn num_cache_nodes(mut self, inp: i32) -> Self {
            self.num_cache_nodes = Some(inp);
            self
        }

        pub fn cache_node_type(mut self, inp: impl Into<String>) -> Self {
            self.cache_node_type = Some(inp.into());
            self
        }

        pub fn engine(mut self, inp: impl Into<String>) -> Self {
            self.engine = Some(inp.into());
            self
        }

        pub fn engine_version(mut self, inp: impl Into<String>) -> Self {
            self.engine_version = Some(inp.into());
            self
        }

        pub fn cache_parameter_group_name(mut self, inp: impl Into<String>) -> Self {
            self.cache_parameter_group_name = Some(inp.into());
            self
        }

        pub fn cache_subnet_group_name(mut self, inp: impl Into<String>) -> Self {
            self.cache_subnet_group_name = Some(inp.into());
            self
        }

        /// Appends a cache security group. Only for clusters outside of a VPC.
        pub fn cache_security_group_names(mut self, inp: impl Into<String>) -> Self {
            self.cache_security_group_names
                .get_or_insert_with(Vec::new)
                .push(inp.into());
            self
        }

        /// Appends a VPC security group
        pub fn security_group_ids(mut self, inp: impl Into<String>) -> Self {
            self.security_group_ids
                .get_or_insert_with(Vec::new)
                .push(inp.into());
            self
        }

        pub fn tags(mut self, inp: Tag) -> Self {
            self.tags.get_or_insert_with(Vec::new).push(inp);
            self
        }

        pub fn snapshot_retention_limit(mut self, inp: i32) -> Self {
            self.snapshot_retention_limit = Some(inp);
            self
        }

        /// Format: `ddd:hh24:mi-ddd:hh24:mi`, eg. `sun:23:00-mon:01:30`
        pub fn preferred_maintenance_window(mut self, inp: impl Into<String>) -> Self {
            self.preferred_maintenance_window = Some(inp.into());
            self
        }

        pub fn port(mut self, inp: i32) -> Self {
            self.port = Some(inp);
            self
        }

        pub fn auto_minor_version_upgrade(mut self, inp: bool) -> Self {
            self.auto_minor_version_upgrade = Some(inp);
            self
        }

        pub fn build(self) -> Result<CreateCacheClusterInput, BuildError> {
            Ok(CreateCacheClusterInput {
                cache_cluster_id: self.cache_cluster_id.ok_or(BuildError::MissingField {
                    field: "cache_cluster_id",
                    details: "cache_cluster_id is required when building CreateCacheClusterInput",
                })?,
                replication_group_id: self.replication_group_id,
                az_mode: self.az_mode,
                preferred_availability_zone: self.preferred_availability_zone,
                num_cache_nodes: self.num_cache_nodes,
                cache_node_type: self.cache_node_type,
                engine: self.engine,
                engine_version: self.engine_version,
                cache_parameter_group_name: self.cache_parameter_group_name,
                cache_subnet_group_name: self.cache_subnet_group_name,
                cache_security_group_names: self.cache_security_group_names,
                security_group_ids: self.security_group_ids,
                tags: self.tags,
                snapshot_retention_limit: self.snapshot_retention_limit,
                preferred_maintenance_window: self.preferred_maintenance_window,
                port: self.port,
                auto_minor_version_upgrade: self.auto_minor_version_upgrade,
            })
        }
    }
}

/// Represents the input of a `CreateCacheCluster` operation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCacheClusterInput {
    pub cache_cluster_id: String,
    pub replication_group_id: Option<String>,
    pub az_mode: Option<String>,
    pub preferred_availability_zone: Option<String>,
    pub num_cache_nodes: Option<i32>,
    pub cache_node_type: Option<String>,
    pub engine: Option<String>,
    pub engine_version: Option<String>,
    pub cache_parameter_group_name: Option<String>,
    pub cache_subnet_group_name: Option<String>,
    pub cache_security_group_names: Option<Vec<String>>,
    pub security_group_ids: Option<Vec<String>>,
    pub tags: Option<Vec<Tag>>,
    pub snapshot_retention_limit: Option<i32>,
    pub preferred_maintenance_window: Option<String>,
    pub port: Option<i32>,
    pub auto_minor_version_upgrade: Option<bool>,
}

impl CreateCacheClusterInput {
    pub fn builder() -> create_cache_cluster_input::Builder {
        create_cache_cluster_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateCacheCluster, AwsErrorRetryPolicy>, BuildError>
    {
        operation(
            config,
            "CreateCacheCluster",
            crate::serializer::create_cache_cluster(self),
            crate::operation::CreateCacheCluster::new(),
        )
    }
}

pub mod describe_cache_clusters_input {
    use crate::input::DescribeCacheClustersInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DescribeCacheClustersInput`](crate::input::DescribeCacheClustersInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        cache_cluster_id: Option<String>,
        max_records: Option<i32>,
        marker: Option<String>,
        show_cache_node_info: Option<bool>,
    }

    impl Builder {
        /// Only describe this cluster. When unset, every cluster is described (up to
        /// `MaxRecords` per page).
        pub fn cache_cluster_id(mut self, inp: impl Into<String>) -> Self {
            self.cache_cluster_id = Some(inp.into());
            self
        }

        /// Page size, between 20 and 100. Defaults to 100.
        pub fn max_records(mut self, inp: i32) -> Self {
            self.max_records = Some(inp);
            self
        }

        pub fn marker(mut self, inp: impl Into<String>) -> Self {
            self.marker = Some(inp.into());
            self
        }

        pub fn show_cache_node_info(mut self, inp: bool) -> Self {
            self.show_cache_node_info = Some(inp);
            self
        }

        pub fn build(self) -> Result<DescribeCacheClustersInput, BuildError> {
            Ok(DescribeCacheClustersInput {
                cache_cluster_id: self.cache_cluster_id,
                max_records: self.max_records,
                marker: self.marker,
                show_cache_node_info: self.show_cache_node_info,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeCacheClustersInput {
    pub cache_cluster_id: Option<String>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
    pub show_cache_node_info: Option<bool>,
}

impl DescribeCacheClustersInput {
    pub fn builder() -> describe_cache_clusters_input::Builder {
        describe_cache_clusters_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeCacheClusters, AwsErrorRetryPolicy>, BuildError>
    {
        operation(
            config,
            "DescribeCacheClusters",
            crate::serializer::describe_cache_clusters(self),
            crate::operation::DescribeCacheClusters::new(),
        )
    }
}

pub mod delete_cache_cluster_input {
    use crate::input::DeleteCacheClusterInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DeleteCacheClusterInput`](crate::input::DeleteCacheClusterInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        cache_cluster_id: Option<String>,
        final_snapshot_identifier: Option<String>,
    }

    impl Builder {
        pub fn cache_cluster_id(mut self, inp: impl Into<String>) -> Self {
            self.cache_cluster_id = Some(inp.into());
            self
        }

        /// Name of a final Redis snapshot taken before the cluster is deleted
        pub fn final_snapshot_identifier(mut self, inp: impl Into<String>) -> Self {
            self.final_snapshot_identifier = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<DeleteCacheClusterInput, BuildError> {
            Ok(DeleteCacheClusterInput {
                cache_cluster_id: self.cache_cluster_id.ok_or(BuildError::MissingField {
                    field: "cache_cluster_id",
                    details: "cache_cluster_id is required when building DeleteCacheClusterInput",
                })?,
                final_snapshot_identifier: self.final_snapshot_identifier,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCacheClusterInput {
    pub cache_cluster_id: String,
    pub final_snapshot_identifier: Option<String>,
}

impl DeleteCacheClusterInput {
    pub fn builder() -> delete_cache_cluster_input::Builder {
        delete_cache_cluster_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteCacheCluster, AwsErrorRetryPolicy>, BuildError>
    {
        operation(
            config,
            "DeleteCacheCluster",
            crate::serializer::delete_cache_cluster(self),
            crate::operation::DeleteCacheCluster::new(),
        )
    }
}

pub mod reboot_cache_cluster_input {
    use crate::input::RebootCacheClusterInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`RebootCacheClusterInput`](crate::input::RebootCacheClusterInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        cache_cluster_id: Option<String>,
        cache_node_ids_to_reboot: Option<Vec<String>>,
    }

    impl Builder {
        pub fn cache_cluster_id(mut self, inp: impl Into<String>) -> Self {
            self.cache_cluster_id = Some(inp.into());
            self
        }

        /// Appends a cache node to reboot, eg. `0001`
        pub fn cache_node_ids_to_reboot(mut self, inp: impl Into<String>) -> Self {
            self.cache_node_ids_to_reboot
                .get_or_insert_with(Vec::new)
                .push(inp.into());
            self
        }

        pub fn build(self) -> Result<RebootCacheClusterInput, BuildError> {
            Ok(RebootCacheClusterInput {
                cache_cluster_id: self.cache_cluster_id.ok_or(BuildError::MissingField {
                    field: "cache_cluster_id",
                    details: "cache_cluster_id is required when building RebootCacheClusterInput",
                })?,
                cache_node_ids_to_reboot: self.cache_node_ids_to_reboot.ok_or(
                    BuildError::MissingField {
                        field: "cache_node_ids_to_reboot",
                        details: "at least one cache node id is required when building RebootCacheClusterInput",
                    },
                )?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct RebootCacheClusterInput {
    pub cache_cluster_id: String,
    pub cache_node_ids_to_reboot: Vec<String>,
}

impl RebootCacheClusterInput {
    pub fn builder() -> reboot_cache_cluster_input::Builder {
        reboot_cache_cluster_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::RebootCacheCluster, AwsErrorRetryPolicy>, BuildError>
    {
        operation(
            config,
            "RebootCacheCluster",
            crate::serializer::reboot_cache_cluster(self),
            crate::operation::RebootCacheCluster::new(),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::input::{CreateCacheClusterInput, RebootCacheClusterInput};
    use crate::model::Tag;
    use crate::{Credentials, Region};
    use smithy_http::operation::BuildError;

    fn config() -> Config {
        Config::builder()
            .region(Region::new("us-west-2"))
            .credentials_provider(Credentials::from_keys("akid", "secret", None))
            .build()
    }

    #[test]
    fn create_cache_cluster_form() {
        let op = CreateCacheClusterInput::builder()
            .cache_cluster_id("my-memcached-cluster")
            .az_mode("cross-az")
            .num_cache_nodes(2)
            .cache_node_type("cache.m5.large")
            .engine("memcached")
            .security_group_ids("sg-1")
            .security_group_ids("sg-2")
            .tags(Tag::new("team", "caching & search"))
            .auto_minor_version_upgrade(true)
            .build()
            .expect("valid input")
            .make_operation(&config())
            .expect("valid operation");
        let request = op.request().http();
        assert_eq!(request.method(), "POST");
        assert_eq!(
            request.headers()["content-type"],
            "application/x-www-form-urlencoded"
        );
        assert_eq!(
            std::str::from_utf8(request.body().bytes().unwrap()).unwrap(),
            "Action=CreateCacheCluster&Version=2015-02-02\
             &CacheClusterId=my-memcached-cluster\
             &AZMode=cross-az\
             &NumCacheNodes=2\
             &CacheNodeType=cache.m5.large\
             &Engine=memcached\
             &SecurityGroupIds.SecurityGroupId.1=sg-1\
             &SecurityGroupIds.SecurityGroupId.2=sg-2\
             &Tags.Tag.1.Key=team\
             &Tags.Tag.1.Value=caching%20%26%20search\
             &AutoMinorVersionUpgrade=true"
        );
        assert_eq!(op.metadata().map(|m| m.name()), Some("CreateCacheCluster"));
    }

    #[test]
    fn reboot_requires_node_ids() {
        let err = RebootCacheClusterInput::builder()
            .cache_cluster_id("my-redis")
            .build()
            .expect_err("node ids are required");
        assert!(matches!(
            err,
            BuildError::MissingField {
                field: "cache_node_ids_to_reboot",
                ..
            }
        ));
        let op = RebootCacheClusterInput::builder()
            .cache_cluster_id("my-redis")
            .cache_node_ids_to_reboot("0001")
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(
            op.request().http().body().bytes().unwrap(),
            &b"Action=RebootCacheCluster&Version=2015-02-02&CacheClusterId=my-redis&CacheNodeIdsToReboot.CacheNodeId.1=0001"[..]
        );
    }
}
