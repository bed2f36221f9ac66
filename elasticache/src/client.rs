/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */
use crate::config::Config;
use crate::error::Error;
use aws_hyper::conn::Standard;
use aws_hyper::SdkError;
use std::sync::Arc;

#[derive(Debug)]
pub(crate) struct Handle {
    client: aws_hyper::Client<Standard>,
    conf: Config,
}
/// Client for Amazon ElastiCache
///
/// Every method returns a fluent builder; the request is sent with `send().await`.
#[derive(Clone, Debug)]
pub struct Client {
    handle: Arc<Handle>,
}

impl Client {
    pub fn from_conf(conf: Config) -> Self {
        Self::from_conf_conn(conf, Standard::https())
    }

    pub fn from_conf_conn(conf: Config, conn: Standard) -> Self {
        Self::from_parts(aws_hyper::Client::new(conn), conf)
    }

    /// Build a client around a preconfigured `aws_hyper::Client`, eg. one with a custom retry
    /// configuration
    pub fn from_parts(client: aws_hyper::Client<Standard>, conf: Config) -> Self {
        Self {
            handle: Arc::new(Handle { client, conf }),
        }
    }

    pub fn conf(&self) -> &Config {
        &self.handle.conf
    }

    pub fn create_cache_cluster(&self) -> fluent_builders::CreateCacheCluster {
        fluent_builders::CreateCacheCluster::new(self.handle.clone())
    }

    pub fn describe_cache_clusters(&self) -> fluent_builders::DescribeCacheClusters {
        fluent_builders::DescribeCacheClusters::new(self.handle.clone())
    }

    pub fn delete_cache_cluster(&self) -> fluent_builders::DeleteCacheCluster {
        fluent_builders::DeleteCacheCluster::new(self.handle.clone())
    }

    pub fn reboot_cache_cluster(&self) -> fluent_builders::RebootCacheCluster {
        fluent_builders::RebootCacheCluster::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use super::{Error, Handle, SdkError};
    use crate::model::Tag;
    use crate::output::{
        CreateCacheClusterOutput,
        DeleteCacheClusterOutput,
        DescribeCacheClustersOutput,
        RebootCacheClusterOutput,
    };
    use std::sync::Arc;

    #[derive(Debug)]
    pub struct CreateCacheCluster {
        handle: Arc<Handle>,
        inner: crate::input::create_cache_cluster_input::Builder,
    }

    impl CreateCacheCluster {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<CreateCacheClusterOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn cache_cluster_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cache_cluster_id(inp);
            self
        }

        pub fn replication_group_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.replication_group_id(inp);
            self
        }

        pub fn az_mode(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.az_mode(inp);
            self
        }

        pub fn preferred_availability_zone(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.preferred_availability_zone(inp);
            self
        }

        pub fn num_cache_nodes(mut self, inp: i32) -> Self {
            self.inner = self.inner.num_cache_nodes(inp);
            self
        }

        pub fn cache_node_type(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cache_node_type(inp);
            self
        }

        pub fn engine(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.engine(inp);
            self
        }

        pub fn engine_version(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.engine_version(inp);
            self
        }

        pub fn cache_parameter_group_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cache_parameter_group_name(inp);
            self
        }

        pub fn cache_subnet_group_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cache_subnet_group_name(inp);
            self
        }

        pub fn cache_security_group_names(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cache_security_group_names(inp);
            self
        }

        pub fn security_group_ids(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.security_group_ids(inp);
            self
        }

        pub fn tags(mut self, inp: Tag) -> Self {
            self.inner = self.inner.tags(inp);
            self
        }

        pub fn snapshot_retention_limit(mut self, inp: i32) -> Self {
            self.inner = self.inner.snapshot_retention_limit(inp);
            self
        }

        pub fn preferred_maintenance_window(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.preferred_maintenance_window(inp);
            self
        }

        pub fn port(mut self, inp: i32) -> Self {
            self.inner = self.inner.port(inp);
            self
        }

        pub fn auto_minor_version_upgrade(mut self, inp: bool) -> Self {
            self.inner = self.inner.auto_minor_version_upgrade(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DescribeCacheClusters {
        handle: Arc<Handle>,
        inner: crate::input::describe_cache_clusters_input::Builder,
    }

    impl DescribeCacheClusters {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<DescribeCacheClustersOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn cache_cluster_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cache_cluster_id(inp);
            self
        }

        pub fn max_records(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_records(inp);
            self
        }

        pub fn marker(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.marker(inp);
            self
        }

        pub fn show_cache_node_info(mut self, inp: bool) -> Self {
            self.inner = self.inner.show_cache_node_info(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DeleteCacheCluster {
        handle: Arc<Handle>,
        inner: crate::input::delete_cache_cluster_input::Builder,
    }

    impl DeleteCacheCluster {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<DeleteCacheClusterOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn cache_cluster_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cache_cluster_id(inp);
            self
        }

        pub fn final_snapshot_identifier(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.final_snapshot_identifier(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct RebootCacheCluster {
        handle: Arc<Handle>,
        inner: crate::input::reboot_cache_cluster_input::Builder,
    }

    impl RebootCacheCluster {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<RebootCacheClusterOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn cache_cluster_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cache_cluster_id(inp);
            self
        }

        pub fn cache_node_ids_to_reboot(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cache_node_ids_to_reboot(inp);
            self
        }
    }
}
