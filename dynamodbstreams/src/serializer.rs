/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::input::{DescribeStreamInput, GetRecordsInput, GetShardIteratorInput, ListStreamsInput};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeStreamBody<'a> {
    stream_arn: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclusive_start_shard_id: Option<&'a str>,
}

pub(crate) fn describe_stream(input: &DescribeStreamInput) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&DescribeStreamBody {
        stream_arn: &input.stream_arn,
        limit: input.limit,
        exclusive_start_shard_id: input.exclusive_start_shard_id.as_deref(),
    })
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct GetRecordsBody<'a> {
    shard_iterator: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<i32>,
}

pub(crate) fn get_records(input: &GetRecordsInput) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&GetRecordsBody {
        shard_iterator: &input.shard_iterator,
        limit: input.limit,
    })
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct GetShardIteratorBody<'a> {
    stream_arn: &'a str,
    shard_id: &'a str,
    shard_iterator_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sequence_number: Option<&'a str>,
}

pub(crate) fn get_shard_iterator(
    input: &GetShardIteratorInput,
) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&GetShardIteratorBody {
        stream_arn: &input.stream_arn,
        shard_id: &input.shard_id,
        shard_iterator_type: input.shard_iterator_type.as_str(),
        sequence_number: input.sequence_number.as_deref(),
    })
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ListStreamsBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    table_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclusive_start_stream_arn: Option<&'a str>,
}

pub(crate) fn list_streams(input: &ListStreamsInput) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&ListStreamsBody {
        table_name: input.table_name.as_deref(),
        limit: input.limit,
        exclusive_start_stream_arn: input.exclusive_start_stream_arn.as_deref(),
    })
}
