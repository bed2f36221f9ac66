/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::deserializer::BoxError;
use crate::error::Error;
use crate::output::{
    CreateVaultOutput, DeleteArchiveOutput, DeleteVaultOutput, DescribeVaultOutput,
    ListVaultsOutput, UploadArchiveOutput,
};
use bytes::Bytes;
use smithy_http::response::ParseStrictResponse;

fn parse_response<T>(
    response: &http::Response<Bytes>,
    deserialize: fn(&http::Response<Bytes>) -> Result<T, BoxError>,
) -> Result<T, Error> {
    if !response.status().is_success() {
        return Err(crate::error::parse_error(response));
    }
    deserialize(response).map_err(|err| {
        tracing::warn!(error = %err, "response could not be deserialized");
        Error::unhandled(err)
    })
}

/// Creates a new vault with the specified name. The name must be unique within a region for
/// an AWS account. Creating a vault that already exists is a no-op.
#[derive(Clone, Default, Debug)]
pub struct CreateVault {
    _private: (),
}

impl CreateVault {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for CreateVault {
    type Output = Result<CreateVaultOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::create_vault)
    }
}

/// Returns information about a vault, including its ARN, creation date, number of archives and
/// their total size. The counts are as of the last inventory, which runs about once a day.
#[derive(Clone, Default, Debug)]
pub struct DescribeVault {
    _private: (),
}

impl DescribeVault {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for DescribeVault {
    type Output = Result<DescribeVaultOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::describe_vault)
    }
}

/// Deletes a vault. The vault must be empty as of the last inventory and there must have been no
/// writes since then.
#[derive(Clone, Default, Debug)]
pub struct DeleteVault {
    _private: (),
}

impl DeleteVault {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for DeleteVault {
    type Output = Result<DeleteVaultOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::delete_vault)
    }
}

/// Lists all vaults owned by the calling account, sorted by vault name.
#[derive(Clone, Default, Debug)]
pub struct ListVaults {
    _private: (),
}

impl ListVaults {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for ListVaults {
    type Output = Result<ListVaultsOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::list_vaults)
    }
}

/// Adds an archive to a vault. The response carries the archive ID, which is the only way to
/// refer to the archive later.
#[derive(Clone, Default, Debug)]
pub struct UploadArchive {
    _private: (),
}

impl UploadArchive {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for UploadArchive {
    type Output = Result<UploadArchiveOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::upload_archive)
    }
}

/// Deletes an archive from a vault.
#[derive(Clone, Default, Debug)]
pub struct DeleteArchive {
    _private: (),
}

impl DeleteArchive {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for DeleteArchive {
    type Output = Result<DeleteArchiveOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::delete_archive)
    }
}

#[cfg(test)]
mod test {
    use crate::operation::{DeleteVault, DescribeVault, UploadArchive};
    use bytes::Bytes;
    use smithy_http::response::ParseStrictResponse;

    #[test]
    fn no_content_responses() {
        let response = http::Response::builder()
            .status(204)
            .body(Bytes::new())
            .unwrap();
        DeleteVault::new().parse(&response).expect("empty output");
    }

    #[test]
    fn errors_are_parsed_from_failed_responses() {
        let response = http::Response::builder()
            .status(404)
            .header("x-amzn-RequestId", "AAABZpJrTyioDC_HsOmHae8EZp_uBSJr6cnGOLKp_XJCl-Q")
            .body(Bytes::from_static(
                br#"{"code":"ResourceNotFoundException","message":"Vault not found","type":"Client"}"#,
            ))
            .unwrap();
        let err = DescribeVault::new().parse(&response).expect_err("not found");
        assert!(err.is_resource_not_found_exception());
        assert_eq!(
            err.request_id(),
            Some("AAABZpJrTyioDC_HsOmHae8EZp_uBSJr6cnGOLKp_XJCl-Q")
        );
    }

    #[test]
    fn malformed_bodies_are_unhandled() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(b"{\"VaultName\": 5}"))
            .unwrap();
        let err = DescribeVault::new().parse(&response).expect_err("invalid body");
        assert!(matches!(err.kind, crate::error::ErrorKind::Unhandled(_)));

        let response = http::Response::builder()
            .status(201)
            .header("x-amz-archive-id", "archive")
            .body(Bytes::new())
            .unwrap();
        let output = UploadArchive::new().parse(&response).expect("valid output");
        assert_eq!(output.archive_id.as_deref(), Some("archive"));
    }
}
