/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::Error;
use crate::output::{
    DescribeStreamOutput, GetRecordsOutput, GetShardIteratorOutput, ListStreamsOutput,
};
use bytes::Bytes;
use smithy_http::response::ParseStrictResponse;

fn parse_response<T>(
    response: &http::Response<Bytes>,
    deserialize: fn(&[u8]) -> Result<T, serde_json::Error>,
) -> Result<T, Error> {
    if !response.status().is_success() {
        return Err(crate::error::parse_error(response));
    }
    deserialize(response.body()).map_err(|err| {
        tracing::warn!(error = %err, "response body could not be deserialized");
        Error::unhandled(err)
    })
}

/// Returns information about a stream, including its current status, its ARN, the composition
/// of its shards, and its corresponding DynamoDB table.
///
/// Each shard in the stream has a `SequenceNumberRange` associated with it. If the range has
/// no ending sequence number, the shard is still open and stream records are being written to it.
#[derive(Clone, Default, Debug)]
pub struct DescribeStream {
    _private: (),
}

impl DescribeStream {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for DescribeStream {
    type Output = Result<DescribeStreamOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::describe_stream)
    }
}

/// Retrieves the stream records from a given shard.
#[derive(Clone, Default, Debug)]
pub struct GetRecords {
    _private: (),
}

impl GetRecords {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for GetRecords {
    type Output = Result<GetRecordsOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::get_records)
    }
}

/// Returns a shard iterator. A shard iterator expires 15 minutes after it is returned.
#[derive(Clone, Default, Debug)]
pub struct GetShardIterator {
    _private: (),
}

impl GetShardIterator {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for GetShardIterator {
    type Output = Result<GetShardIteratorOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::get_shard_iterator)
    }
}

/// Returns an array of stream ARNs associated with the current account and endpoint.
#[derive(Clone, Default, Debug)]
pub struct ListStreams {
    _private: (),
}

impl ListStreams {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for ListStreams {
    type Output = Result<ListStreamsOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::list_streams)
    }
}

#[cfg(test)]
mod test {
    use crate::operation::{GetShardIterator, ListStreams};
    use bytes::Bytes;
    use smithy_http::response::ParseStrictResponse;

    #[test]
    fn successful_response() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(br#"{"ShardIterator": "iterator-1"}"#))
            .unwrap();
        let output = GetShardIterator::new().parse(&response).expect("success");
        assert_eq!(output.shard_iterator.as_deref(), Some("iterator-1"));
    }

    #[test]
    fn error_response() {
        let response = http::Response::builder()
            .status(400)
            .body(Bytes::from_static(
                br#"{"__type":"com.amazonaws.dynamodb.v20120810#TrimmedDataAccessException","message":"trimmed"}"#,
            ))
            .unwrap();
        let err = GetShardIterator::new().parse(&response).expect_err("error");
        assert!(err.is_trimmed_data_access_exception());
        assert_eq!(err.message(), Some("trimmed"));
    }

    #[test]
    fn malformed_success_is_unhandled() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(br#"{"Streams": 5}"#))
            .unwrap();
        let err = ListStreams::new().parse(&response).expect_err("invalid body");
        assert!(matches!(err.kind, crate::error::ErrorKind::Unhandled(_)));
    }
}
