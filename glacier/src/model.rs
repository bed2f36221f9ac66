/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use serde::Deserialize;

/// Describes a vault, as returned in the `VaultList` of `ListVaults`
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVaultOutput {
    #[serde(rename = "VaultARN")]
    pub vault_arn: Option<String>,
    pub vault_name: Option<String>,
    /// ISO 8601 date, eg. `2012-03-20T17:03:43.221Z`
    pub creation_date: Option<String>,
    /// Unset until the first inventory of the vault completed
    pub last_inventory_date: Option<String>,
    /// As of the last inventory
    #[serde(default)]
    pub number_of_archives: i64,
    /// As of the last inventory
    #[serde(default)]
    pub size_in_bytes: i64,
}
