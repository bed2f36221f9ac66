/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::input::{
    CreateVaultInput, DeleteArchiveInput, DeleteVaultInput, DescribeVaultInput,
    ListVaultsInput, UploadArchiveInput,
};
use smithy_http::body::SdkBody;
use smithy_http::label;
use smithy_http::operation::BuildError;
use smithy_http::query;

pub(crate) const API_VERSION: &str = "2012-06-01";

/// Path labels must be non-empty
fn label(field: &'static str, value: &str) -> Result<String, BuildError> {
    if value.is_empty() {
        return Err(BuildError::InvalidField {
            field,
            details: format!("{} cannot be empty or unset", field),
        });
    }
    Ok(label::fmt_string(value, false))
}

fn vault_uri(account_id: &str, vault_name: &str) -> Result<String, BuildError> {
    Ok(format!(
        "/{}/vaults/{}",
        label("account_id", account_id)?,
        label("vault_name", vault_name)?
    ))
}

fn request(method: &str, uri: String) -> http::request::Builder {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .header("x-amz-glacier-version", API_VERSION)
}

pub(crate) fn create_vault(
    input: &CreateVaultInput,
) -> Result<http::Request<SdkBody>, BuildError> {
    let uri = vault_uri(&input.account_id, &input.vault_name)?;
    Ok(request("PUT", uri).body(SdkBody::empty())?)
}

pub(crate) fn describe_vault(
    input: &DescribeVaultInput,
) -> Result<http::Request<SdkBody>, BuildError> {
    let uri = vault_uri(&input.account_id, &input.vault_name)?;
    Ok(request("GET", uri).body(SdkBody::empty())?)
}

pub(crate) fn delete_vault(
    input: &DeleteVaultInput,
) -> Result<http::Request<SdkBody>, BuildError> {
    let uri = vault_uri(&input.account_id, &input.vault_name)?;
    Ok(request("DELETE", uri).body(SdkBody::empty())?)
}

pub(crate) fn list_vaults(input: &ListVaultsInput) -> Result<http::Request<SdkBody>, BuildError> {
    let mut uri = format!("/{}/vaults", label("account_id", &input.account_id)?);
    let mut query = query::Writer::new(&mut uri);
    if let Some(marker) = &input.marker {
        query.push_kv("marker", &query::fmt_string(marker));
    }
    if let Some(limit) = input.limit {
        query.push_kv("limit", &query::fmt_default(limit));
    }
    Ok(request("GET", uri).body(SdkBody::empty())?)
}

pub(crate) fn upload_archive(
    input: &UploadArchiveInput,
) -> Result<http::Request<SdkBody>, BuildError> {
    let uri = format!("{}/archives", vault_uri(&input.account_id, &input.vault_name)?);
    let mut builder = request("POST", uri);
    if let Some(description) = &input.archive_description {
        builder = builder.header("x-amz-archive-description", description);
    }
    let checksum = match &input.checksum {
        Some(checksum) => checksum.clone(),
        None => crate::tree_hash::tree_hash(&input.body),
    };
    Ok(builder
        .header("x-amz-sha256-tree-hash", checksum)
        .body(SdkBody::from(input.body.clone()))?)
}

pub(crate) fn delete_archive(
    input: &DeleteArchiveInput,
) -> Result<http::Request<SdkBody>, BuildError> {
    let uri = format!(
        "{}/archives/{}",
        vault_uri(&input.account_id, &input.vault_name)?,
        label("archive_id", &input.archive_id)?
    );
    Ok(request("DELETE", uri).body(SdkBody::empty())?)
}
