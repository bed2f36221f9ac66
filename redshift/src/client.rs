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
/// Client for Amazon Redshift
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

    pub fn create_cluster(&self) -> fluent_builders::CreateCluster {
        fluent_builders::CreateCluster::new(self.handle.clone())
    }

    pub fn describe_clusters(&self) -> fluent_builders::DescribeClusters {
        fluent_builders::DescribeClusters::new(self.handle.clone())
    }

    pub fn delete_cluster(&self) -> fluent_builders::DeleteCluster {
        fluent_builders::DeleteCluster::new(self.handle.clone())
    }

    pub fn reboot_cluster(&self) -> fluent_builders::RebootCluster {
        fluent_builders::RebootCluster::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use super::{Error, Handle, SdkError};
    use crate::model::Tag;
    use crate::output::{
        CreateClusterOutput,
        DeleteClusterOutput,
        DescribeClustersOutput,
        RebootClusterOutput,
    };
    use std::sync::Arc;

    #[derive(Debug)]
    pub struct CreateCluster {
        handle: Arc<Handle>,
        inner: crate::input::create_cluster_input::Builder,
    }

    impl CreateCluster {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<CreateClusterOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn db_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.db_name(inp);
            self
        }

        pub fn cluster_identifier(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cluster_identifier(inp);
            self
        }

        pub fn cluster_type(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cluster_type(inp);
            self
        }

        pub fn node_type(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.node_type(inp);
            self
        }

        pub fn master_username(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.master_username(inp);
            self
        }

        pub fn master_user_password(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.master_user_password(inp);
            self
        }

        pub fn cluster_security_groups(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cluster_security_groups(inp);
            self
        }

        pub fn vpc_security_group_ids(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.vpc_security_group_ids(inp);
            self
        }

        pub fn cluster_subnet_group_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cluster_subnet_group_name(inp);
            self
        }

        pub fn availability_zone(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.availability_zone(inp);
            self
        }

        pub fn preferred_maintenance_window(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.preferred_maintenance_window(inp);
            self
        }

        pub fn automated_snapshot_retention_period(mut self, inp: i32) -> Self {
            self.inner = self.inner.automated_snapshot_retention_period(inp);
            self
        }

        pub fn port(mut self, inp: i32) -> Self {
            self.inner = self.inner.port(inp);
            self
        }

        pub fn cluster_version(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cluster_version(inp);
            self
        }

        pub fn allow_version_upgrade(mut self, inp: bool) -> Self {
            self.inner = self.inner.allow_version_upgrade(inp);
            self
        }

        pub fn number_of_nodes(mut self, inp: i32) -> Self {
            self.inner = self.inner.number_of_nodes(inp);
            self
        }

        pub fn publicly_accessible(mut self, inp: bool) -> Self {
            self.inner = self.inner.publicly_accessible(inp);
            self
        }

        pub fn encrypted(mut self, inp: bool) -> Self {
            self.inner = self.inner.encrypted(inp);
            self
        }

        pub fn tags(mut self, inp: Tag) -> Self {
            self.inner = self.inner.tags(inp);
            self
        }

        pub fn kms_key_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.kms_key_id(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DescribeClusters {
        handle: Arc<Handle>,
        inner: crate::input::describe_clusters_input::Builder,
    }

    impl DescribeClusters {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<DescribeClustersOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn cluster_identifier(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cluster_identifier(inp);
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

        pub fn tag_keys(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.tag_keys(inp);
            self
        }

        pub fn tag_values(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.tag_values(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DeleteCluster {
        handle: Arc<Handle>,
        inner: crate::input::delete_cluster_input::Builder,
    }

    impl DeleteCluster {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<DeleteClusterOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn cluster_identifier(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cluster_identifier(inp);
            self
        }

        pub fn skip_final_cluster_snapshot(mut self, inp: bool) -> Self {
            self.inner = self.inner.skip_final_cluster_snapshot(inp);
            self
        }

        pub fn final_cluster_snapshot_identifier(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.final_cluster_snapshot_identifier(inp);
            self
        }

        pub fn final_cluster_snapshot_retention_period(mut self, inp: i32) -> Self {
            self.inner = self.inner.final_cluster_snapshot_retention_period(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct RebootCluster {
        handle: Arc<Handle>,
        inner: crate::input::reboot_cluster_input::Builder,
    }

    impl RebootCluster {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<RebootClusterOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn cluster_identifier(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.cluster_identifier(inp);
            self
        }
    }
}
