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
/// Client for Amazon S3 Glacier
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

    pub fn create_vault(&self) -> fluent_builders::CreateVault {
        fluent_builders::CreateVault::new(self.handle.clone())
    }

    pub fn describe_vault(&self) -> fluent_builders::DescribeVault {
        fluent_builders::DescribeVault::new(self.handle.clone())
    }

    pub fn delete_vault(&self) -> fluent_builders::DeleteVault {
        fluent_builders::DeleteVault::new(self.handle.clone())
    }

    pub fn list_vaults(&self) -> fluent_builders::ListVaults {
        fluent_builders::ListVaults::new(self.handle.clone())
    }

    pub fn upload_archive(&self) -> fluent_builders::UploadArchive {
        fluent_builders::UploadArchive::new(self.handle.clone())
    }

    pub fn delete_archive(&self) -> fluent_builders::DeleteArchive {
        fluent_builders::DeleteArchive::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use super::{Error, Handle, SdkError};
    use bytes::Bytes;
    use crate::output::{
        CreateVaultOutput,
        DeleteArchiveOutput,
        DeleteVaultOutput,
        DescribeVaultOutput,
        ListVaultsOutput,
        UploadArchiveOutput,
    };
    use std::sync::Arc;

    #[derive(Debug)]
    pub struct CreateVault {
        handle: Arc<Handle>,
        inner: crate::input::create_vault_input::Builder,
    }

    impl CreateVault {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<CreateVaultOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn account_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.account_id(inp);
            self
        }

        pub fn vault_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.vault_name(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DescribeVault {
        handle: Arc<Handle>,
        inner: crate::input::describe_vault_input::Builder,
    }

    impl DescribeVault {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<DescribeVaultOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn account_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.account_id(inp);
            self
        }

        pub fn vault_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.vault_name(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DeleteVault {
        handle: Arc<Handle>,
        inner: crate::input::delete_vault_input::Builder,
    }

    impl DeleteVault {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<DeleteVaultOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn account_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.account_id(inp);
            self
        }

        pub fn vault_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.vault_name(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct ListVaults {
        handle: Arc<Handle>,
        inner: crate::input::list_vaults_input::Builder,
    }

    impl ListVaults {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<ListVaultsOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn account_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.account_id(inp);
            self
        }

        pub fn marker(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.marker(inp);
            self
        }

        pub fn limit(mut self, inp: i32) -> Self {
            self.inner = self.inner.limit(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct UploadArchive {
        handle: Arc<Handle>,
        inner: crate::input::upload_archive_input::Builder,
    }

    impl UploadArchive {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<UploadArchiveOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn account_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.account_id(inp);
            self
        }

        pub fn vault_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.vault_name(inp);
            self
        }

        pub fn archive_description(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.archive_description(inp);
            self
        }

        pub fn checksum(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.checksum(inp);
            self
        }

        pub fn body(mut self, inp: impl Into<Bytes>) -> Self {
            self.inner = self.inner.body(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DeleteArchive {
        handle: Arc<Handle>,
        inner: crate::input::delete_archive_input::Builder,
    }

    impl DeleteArchive {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<DeleteArchiveOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn account_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.account_id(inp);
            self
        }

        pub fn vault_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.vault_name(inp);
            self
        }

        pub fn archive_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.archive_id(inp);
            self
        }
    }
}
