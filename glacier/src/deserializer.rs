/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::output::{
    CreateVaultOutput, DeleteArchiveOutput, DeleteVaultOutput, DescribeVaultOutput,
    ListVaultsOutput, UploadArchiveOutput,
};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use smithy_http::header;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"{}")
    } else {
        serde_json::from_slice(body)
    }
}

fn string_header(
    response: &http::Response<Bytes>,
    key: &str,
) -> Result<Option<String>, BoxError> {
    Ok(header::one_or_none::<String>(response.headers(), key)?)
}

pub(crate) fn create_vault(
    response: &http::Response<Bytes>,
) -> Result<CreateVaultOutput, BoxError> {
    Ok(CreateVaultOutput {
        location: string_header(response, "Location")?,
    })
}

pub(crate) fn describe_vault(
    response: &http::Response<Bytes>,
) -> Result<DescribeVaultOutput, BoxError> {
    Ok(parse_body(response.body())?)
}

pub(crate) fn delete_vault(
    _response: &http::Response<Bytes>,
) -> Result<DeleteVaultOutput, BoxError> {
    Ok(DeleteVaultOutput {})
}

pub(crate) fn list_vaults(response: &http::Response<Bytes>) -> Result<ListVaultsOutput, BoxError> {
    Ok(parse_body(response.body())?)
}

pub(crate) fn upload_archive(
    response: &http::Response<Bytes>,
) -> Result<UploadArchiveOutput, BoxError> {
    Ok(UploadArchiveOutput {
        location: string_header(response, "Location")?,
        checksum: string_header(response, "x-amz-sha256-tree-hash")?,
        archive_id: string_header(response, "x-amz-archive-id")?,
    })
}

pub(crate) fn delete_archive(
    _response: &http::Response<Bytes>,
) -> Result<DeleteArchiveOutput, BoxError> {
    Ok(DeleteArchiveOutput {})
}

#[cfg(test)]
mod test {
    use crate::deserializer::{describe_vault, list_vaults, upload_archive};
    use bytes::Bytes;

    fn response(body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(200)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn vault_list() {
        let output = list_vaults(&response(
            r#"{
              "Marker": null,
              "VaultList": [
                {
                  "CreationDate": "2015-04-06T21:23:45.708Z",
                  "LastInventoryDate": "2015-04-07T00:26:19.028Z",
                  "NumberOfArchives": 1,
                  "SizeInBytes": 3178496,
                  "VaultARN": "arn:aws:glacier:us-west-2:0123456789012:vaults/my-vault",
                  "VaultName": "my-vault"
                }
              ]
            }"#,
        ))
        .expect("valid body");
        assert_eq!(output.marker, None);
        let vaults = output.vault_list.expect("vaults");
        assert_eq!(vaults[0].vault_name.as_deref(), Some("my-vault"));
        assert_eq!(vaults[0].size_in_bytes, 3178496);
        assert_eq!(
            vaults[0].vault_arn.as_deref(),
            Some("arn:aws:glacier:us-west-2:0123456789012:vaults/my-vault")
        );
    }

    #[test]
    fn new_vaults_have_no_inventory() {
        let output = describe_vault(&response(
            r#"{"VaultName": "fresh", "CreationDate": "2021-02-15T18:40:17.000Z"}"#,
        ))
        .expect("valid body");
        assert_eq!(output.number_of_archives, 0);
        assert_eq!(output.last_inventory_date, None);
    }

    #[test]
    fn archive_headers() {
        let response = http::Response::builder()
            .status(201)
            .header("Location", "/111122223333/vaults/examplevault/archives/NkbByEQw")
            .header("x-amz-archive-id", "NkbByEQw")
            .header("x-amz-sha256-tree-hash", "beadface")
            .body(Bytes::new())
            .unwrap();
        let output = upload_archive(&response).expect("valid headers");
        assert_eq!(output.archive_id.as_deref(), Some("NkbByEQw"));
        assert_eq!(output.checksum.as_deref(), Some("beadface"));
        assert_eq!(
            output.location.as_deref(),
            Some("/111122223333/vaults/examplevault/archives/NkbByEQw")
        );
    }

    #[test]
    fn repeated_headers_are_errors() {
        let response = http::Response::builder()
            .header("x-amz-archive-id", "a")
            .header("x-amz-archive-id", "b")
            .body(Bytes::new())
            .unwrap();
        upload_archive(&response).expect_err("ambiguous archive id");
    }
}
