/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use aws_http::AwsErrorRetryPolicy;
use bytes::Bytes;
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::{BuildError, Metadata, Operation};

/// The account that owns a vault when the caller did not name one
const CURRENT_ACCOUNT: &str = "-";

fn account_id(account_id: Option<String>) -> String {
    match account_id {
        Some(id) if !id.is_empty() => id,
        _ => CURRENT_ACCOUNT.to_string(),
    }
}

fn vault_name(vault_name: Option<String>, input: &'static str) -> Result<String, BuildError> {
    vault_name.ok_or(BuildError::MissingField {
        field: "vault_name",
        details: input,
    })
}

fn operation<H>(
    config: &Config,
    operation_name: &'static str,
    request: http::Request<SdkBody>,
    handler: H,
) -> Result<Operation<H, AwsErrorRetryPolicy>, BuildError> {
    let mut request = operation::Request::new(request);
    config.configure(&mut request.properties_mut());
    Ok(Operation::new(request, handler)
        .with_metadata(Metadata::new(operation_name, "glacier"))
        .with_retry_policy(AwsErrorRetryPolicy::new()))
}

pub mod create_vault_input {
    use crate::input::CreateVaultInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`CreateVaultInput`](crate::input::CreateVaultInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        account_id: Option<String>,
        vault_name: Option<String>,
    }

    impl Builder {
        /// The `AccountId` value is the AWS account ID. Defaults to `-`, the account of the
        /// credentials used to sign the request.
        pub fn account_id(mut self, inp: impl Into<String>) -> Self {
            self.account_id = Some(inp.into());
            self
        }

        pub fn vault_name(mut self, inp: impl Into<String>) -> Self {
            self.vault_name = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<CreateVaultInput, BuildError> {
            Ok(CreateVaultInput {
                account_id: super::account_id(self.account_id),
                vault_name: super::vault_name(
                    self.vault_name,
                    "vault_name is required when building CreateVaultInput",
                )?,
            })
        }
    }
}

/// Provides options to create a vault.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct CreateVaultInput {
    pub account_id: String,
    pub vault_name: String,
}

impl CreateVaultInput {
    pub fn builder() -> create_vault_input::Builder {
        create_vault_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateVault, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "CreateVault",
            crate::serializer::create_vault(self)?,
            crate::operation::CreateVault::new(),
        )
    }
}

pub mod describe_vault_input {
    use crate::input::DescribeVaultInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DescribeVaultInput`](crate::input::DescribeVaultInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        account_id: Option<String>,
        vault_name: Option<String>,
    }

    impl Builder {
        pub fn account_id(mut self, inp: impl Into<String>) -> Self {
            self.account_id = Some(inp.into());
            self
        }

        pub fn vault_name(mut self, inp: impl Into<String>) -> Self {
            self.vault_name = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<DescribeVaultInput, BuildError> {
            Ok(DescribeVaultInput {
                account_id: super::account_id(self.account_id),
                vault_name: super::vault_name(
                    self.vault_name,
                    "vault_name is required when building DescribeVaultInput",
                )?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeVaultInput {
    pub account_id: String,
    pub vault_name: String,
}

impl DescribeVaultInput {
    pub fn builder() -> describe_vault_input::Builder {
        describe_vault_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeVault, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "DescribeVault",
            crate::serializer::describe_vault(self)?,
            crate::operation::DescribeVault::new(),
        )
    }
}

pub mod delete_vault_input {
    use crate::input::DeleteVaultInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DeleteVaultInput`](crate::input::DeleteVaultInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        account_id: Option<String>,
        vault_name: Option<String>,
    }

    impl Builder {
        pub fn account_id(mut self, inp: impl Into<String>) -> Self {
            self.account_id = Some(inp.into());
            self
        }

        pub fn vault_name(mut self, inp: impl Into<String>) -> Self {
            self.vault_name = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<DeleteVaultInput, BuildError> {
            Ok(DeleteVaultInput {
                account_id: super::account_id(self.account_id),
                vault_name: super::vault_name(
                    self.vault_name,
                    "vault_name is required when building DeleteVaultInput",
                )?,
            })
        }
    }
}

/// A vault can only be deleted once it holds no archives as of the last inventory.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteVaultInput {
    pub account_id: String,
    pub vault_name: String,
}

impl DeleteVaultInput {
    pub fn builder() -> delete_vault_input::Builder {
        delete_vault_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteVault, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "DeleteVault",
            crate::serializer::delete_vault(self)?,
            crate::operation::DeleteVault::new(),
        )
    }
}

pub mod list_vaults_input {
    use crate::input::ListVaultsInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`ListVaultsInput`](crate::input::ListVaultsInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        account_id: Option<String>,
        marker: Option<String>,
        limit: Option<i32>,
    }

    impl Builder {
        pub fn account_id(mut self, inp: impl Into<String>) -> Self {
            self.account_id = Some(inp.into());
            self
        }

        /// The `Marker` returned by a previous `ListVaults` call
        pub fn marker(mut self, inp: impl Into<String>) -> Self {
            self.marker = Some(inp.into());
            self
        }

        /// The maximum number of vaults to return, between 1 and 1000. The service defaults
        /// to 10.
        pub fn limit(mut self, inp: i32) -> Self {
            self.limit = Some(inp);
            self
        }

        pub fn build(self) -> Result<ListVaultsInput, BuildError> {
            Ok(ListVaultsInput {
                account_id: super::account_id(self.account_id),
                marker: self.marker,
                limit: self.limit,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ListVaultsInput {
    pub account_id: String,
    pub marker: Option<String>,
    pub limit: Option<i32>,
}

impl ListVaultsInput {
    pub fn builder() -> list_vaults_input::Builder {
        list_vaults_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListVaults, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "ListVaults",
            crate::serializer::list_vaults(self)?,
            crate::operation::ListVaults::new(),
        )
    }
}

pub mod upload_archive_input {
    use crate::input::UploadArchiveInput;
    use bytes::Bytes;
    use smithy_http::operation::BuildError;

    /// A builder for [`UploadArchiveInput`](crate::input::UploadArchiveInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        account_id: Option<String>,
        vault_name: Option<String>,
        archive_description: Option<String>,
        checksum: Option<String>,
        body: Option<Bytes>,
    }

    impl Builder {
        pub fn account_id(mut self, inp: impl Into<String>) -> Self {
            self.account_id = Some(inp.into());
            self
        }

        pub fn vault_name(mut self, inp: impl Into<String>) -> Self {
            self.vault_name = Some(inp.into());
            self
        }

        /// The optional description of the archive, up to 1,024 printable ASCII characters
        pub fn archive_description(mut self, inp: impl Into<String>) -> Self {
            self.archive_description = Some(inp.into());
            self
        }

        /// The SHA256 tree hash of the body. Computed from the body when not set.
        pub fn checksum(mut self, inp: impl Into<String>) -> Self {
            self.checksum = Some(inp.into());
            self
        }

        /// The data to upload
        pub fn body(mut self, inp: impl Into<Bytes>) -> Self {
            self.body = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<UploadArchiveInput, BuildError> {
            Ok(UploadArchiveInput {
                account_id: super::account_id(self.account_id),
                vault_name: super::vault_name(
                    self.vault_name,
                    "vault_name is required when building UploadArchiveInput",
                )?,
                archive_description: self.archive_description,
                checksum: self.checksum,
                body: self.body.unwrap_or_default(),
            })
        }
    }
}

/// Provides options to add an archive to a vault.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct UploadArchiveInput {
    pub account_id: String,
    pub vault_name: String,
    pub archive_description: Option<String>,
    pub checksum: Option<String>,
    pub body: Bytes,
}

impl UploadArchiveInput {
    pub fn builder() -> upload_archive_input::Builder {
        upload_archive_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::UploadArchive, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "UploadArchive",
            crate::serializer::upload_archive(self)?,
            crate::operation::UploadArchive::new(),
        )
    }
}

pub mod delete_archive_input {
    use crate::input::DeleteArchiveInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DeleteArchiveInput`](crate::input::DeleteArchiveInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        account_id: Option<String>,
        vault_name: Option<String>,
        archive_id: Option<String>,
    }

    impl Builder {
        pub fn account_id(mut self, inp: impl Into<String>) -> Self {
            self.account_id = Some(inp.into());
            self
        }

        pub fn vault_name(mut self, inp: impl Into<String>) -> Self {
            self.vault_name = Some(inp.into());
            self
        }

        pub fn archive_id(mut self, inp: impl Into<String>) -> Self {
            self.archive_id = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<DeleteArchiveInput, BuildError> {
            Ok(DeleteArchiveInput {
                account_id: super::account_id(self.account_id),
                vault_name: super::vault_name(
                    self.vault_name,
                    "vault_name is required when building DeleteArchiveInput",
                )?,
                archive_id: self.archive_id.ok_or(BuildError::MissingField {
                    field: "archive_id",
                    details: "archive_id is required when building DeleteArchiveInput",
                })?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteArchiveInput {
    pub account_id: String,
    pub vault_name: String,
    pub archive_id: String,
}

impl DeleteArchiveInput {
    pub fn builder() -> delete_archive_input::Builder {
        delete_archive_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteArchive, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "DeleteArchive",
            crate::serializer::delete_archive(self)?,
            crate::operation::DeleteArchive::new(),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::input::{
        CreateVaultInput, DeleteArchiveInput, ListVaultsInput, UploadArchiveInput,
    };
    use crate::{Credentials, Region};
    use smithy_http::operation::BuildError;

    fn config() -> Config {
        Config::builder()
            .region(Region::new("us-west-2"))
            .credentials_provider(Credentials::from_keys("akid", "secret", None))
            .build()
    }

    #[test]
    fn account_id_defaults_to_current_account() {
        let op = CreateVaultInput::builder()
            .vault_name("examplevault")
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        let request = op.request().http();
        assert_eq!(request.method(), "PUT");
        assert_eq!(request.uri(), "/-/vaults/examplevault");
        assert_eq!(request.headers()["x-amz-glacier-version"], "2012-06-01");

        let input = CreateVaultInput::builder()
            .account_id("")
            .vault_name("examplevault")
            .build()
            .unwrap();
        assert_eq!(input.account_id, "-");
    }

    #[test]
    fn empty_labels_are_invalid() {
        let err = CreateVaultInput::builder()
            .vault_name("")
            .build()
            .unwrap()
            .make_operation(&config())
            .expect_err("empty vault name");
        assert!(matches!(
            err,
            BuildError::InvalidField {
                field: "vault_name",
                ..
            }
        ));
        let err = DeleteArchiveInput::builder()
            .vault_name("examplevault")
            .build()
            .expect_err("archive id is required");
        assert!(matches!(
            err,
            BuildError::MissingField {
                field: "archive_id",
                ..
            }
        ));
    }

    #[test]
    fn labels_are_percent_encoded() {
        let op = DeleteArchiveInput::builder()
            .account_id("123456789012")
            .vault_name("my vault")
            .archive_id("NkbByEQw/WXWj")
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(
            op.request().http().uri(),
            "/123456789012/vaults/my%20vault/archives/NkbByEQw%2FWXWj"
        );
    }

    #[test]
    fn list_vaults_query() {
        let op = ListVaultsInput::builder()
            .marker("arn:aws:glacier:us-west-2:012345678901:vaults/examplevault")
            .limit(5)
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(
            op.request().http().uri(),
            "/-/vaults?marker=arn%3Aaws%3Aglacier%3Aus-west-2%3A012345678901%3Avaults%2Fexamplevault&limit=5"
        );
        let op = ListVaultsInput::builder()
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(op.request().http().uri(), "/-/vaults");
    }

    #[test]
    fn upload_archive_computes_tree_hash() {
        let op = UploadArchiveInput::builder()
            .vault_name("examplevault")
            .archive_description("example archive")
            .body("hello glacier")
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        let request = op.request().http();
        assert_eq!(request.method(), "POST");
        assert_eq!(request.uri(), "/-/vaults/examplevault/archives");
        assert_eq!(
            request.headers()["x-amz-archive-description"],
            "example archive"
        );
        assert_eq!(
            request.headers()["x-amz-sha256-tree-hash"],
            crate::tree_hash::tree_hash(b"hello glacier").as_str()
        );
        assert_eq!(request.body().bytes(), Some(&b"hello glacier"[..]));

        let op = UploadArchiveInput::builder()
            .vault_name("examplevault")
            .checksum("beadface")
            .body(vec![1_u8, 2, 3])
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(
            op.request().http().headers()["x-amz-sha256-tree-hash"],
            "beadface"
        );
    }
}
