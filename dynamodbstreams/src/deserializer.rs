/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::output::{
    DescribeStreamOutput, GetRecordsOutput, GetShardIteratorOutput, ListStreamsOutput,
};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use smithy_types::{Blob, Instant};

/// awsJson1_0 responses may have an empty body when no members are set
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"{}")
    } else {
        serde_json::from_slice(body)
    }
}

pub(crate) fn describe_stream(body: &[u8]) -> Result<DescribeStreamOutput, serde_json::Error> {
    parse_body(body)
}

pub(crate) fn get_records(body: &[u8]) -> Result<GetRecordsOutput, serde_json::Error> {
    parse_body(body)
}

pub(crate) fn get_shard_iterator(
    body: &[u8],
) -> Result<GetShardIteratorOutput, serde_json::Error> {
    parse_body(body)
}

pub(crate) fn list_streams(body: &[u8]) -> Result<ListStreamsOutput, serde_json::Error> {
    parse_body(body)
}

/// Timestamps are sent as (possibly fractional) epoch seconds
pub(crate) fn epoch_seconds<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map(Instant::from_f64))
}

pub(crate) fn blob<'de, D>(deserializer: D) -> Result<Blob, D::Error>
where
    D: Deserializer<'de>,
{
    let encoded = String::deserialize(deserializer)?;
    smithy_http::base64::decode(&encoded)
        .map(Blob::new)
        .map_err(D::Error::custom)
}

pub(crate) fn blob_list<'de, D>(deserializer: D) -> Result<Vec<Blob>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<String>::deserialize(deserializer)?
        .into_iter()
        .map(|encoded| {
            smithy_http::base64::decode(&encoded)
                .map(Blob::new)
                .map_err(D::Error::custom)
        })
        .collect()
}
