/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use serde::Deserialize;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateVaultOutput {
    /// The URI of the vault that was created, from the `Location` header
    pub location: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVaultOutput {
    #[serde(rename = "VaultARN")]
    pub vault_arn: Option<String>,
    pub vault_name: Option<String>,
    pub creation_date: Option<String>,
    pub last_inventory_date: Option<String>,
    #[serde(default)]
    pub number_of_archives: i64,
    #[serde(default)]
    pub size_in_bytes: i64,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteVaultOutput {}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListVaultsOutput {
    pub vault_list: Option<Vec<crate::model::DescribeVaultOutput>>,
    /// Where to continue pagination; `None` once the last vault was returned
    pub marker: Option<String>,
}

/// Contains the Amazon S3 Glacier response to your request.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadArchiveOutput {
    /// The relative URI path of the newly added archive resource
    pub location: Option<String>,
    /// The checksum of the archive computed by Amazon S3 Glacier
    pub checksum: Option<String>,
    pub archive_id: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteArchiveOutput {}
