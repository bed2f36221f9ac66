/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use crate::model::ShardIteratorType;
use aws_http::AwsErrorRetryPolicy;
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::{BuildError, Metadata, Operation};

const TARGET_PREFIX: &str = "DynamoDBStreams_20120810";

fn json_request(operation_name: &str, body: Vec<u8>) -> Result<http::Request<SdkBody>, BuildError> {
    Ok(http::Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/x-amz-json-1.0")
        .header(
            "x-amz-target",
            format!("{}.{}", TARGET_PREFIX, operation_name),
        )
        .body(SdkBody::from(body))?)
}

fn operation<H>(
    config: &Config,
    operation_name: &'static str,
    body: Result<Vec<u8>, serde_json::Error>,
    handler: H,
) -> Result<Operation<H, AwsErrorRetryPolicy>, BuildError> {
    let body = body.map_err(|err| BuildError::SerializationError(err.into()))?;
    let mut request = operation::Request::new(json_request(operation_name, body)?);
    config.configure(&mut request.properties_mut());
    Ok(Operation::new(request, handler)
        .with_metadata(Metadata::new(operation_name, "dynamodbstreams"))
        .with_retry_policy(AwsErrorRetryPolicy::new()))
}

pub mod describe_stream_input {
    use crate::input::DescribeStreamInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DescribeStreamInput`](crate::input::DescribeStreamInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        stream_arn: Option<String>,
        limit: Option<i32>,
        exclusive_start_shard_id: Option<String>,
    }

    impl Builder {
        /// The Amazon Resource Name (ARN) for the stream.
        pub fn stream_arn(mut self, inp: impl Into<String>) -> Self {
            self.stream_arn = Some(inp.into());
            self
        }

        /// The maximum number of shard objects to return. The upper limit is 100.
        pub fn limit(mut self, inp: i32) -> Self {
            self.limit = Some(inp);
            self
        }

        /// The shard ID of the first item that this operation will evaluate. Use the value that
        /// was returned for `LastEvaluatedShardId` in the previous operation.
        pub fn exclusive_start_shard_id(mut self, inp: impl Into<String>) -> Self {
            self.exclusive_start_shard_id = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<DescribeStreamInput, BuildError> {
            Ok(DescribeStreamInput {
                stream_arn: self.stream_arn.ok_or(BuildError::MissingField {
                    field: "stream_arn",
                    details: "stream_arn is required when building DescribeStreamInput",
                })?,
                limit: self.limit,
                exclusive_start_shard_id: self.exclusive_start_shard_id,
            })
        }
    }
}

/// Represents the input of a `DescribeStream` operation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeStreamInput {
    pub stream_arn: String,
    pub limit: Option<i32>,
    pub exclusive_start_shard_id: Option<String>,
}

impl DescribeStreamInput {
    pub fn builder() -> describe_stream_input::Builder {
        describe_stream_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeStream, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "DescribeStream",
            crate::serializer::describe_stream(self),
            crate::operation::DescribeStream::new(),
        )
    }
}

pub mod get_records_input {
    use crate::input::GetRecordsInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`GetRecordsInput`](crate::input::GetRecordsInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        shard_iterator: Option<String>,
        limit: Option<i32>,
    }

    impl Builder {
        /// A shard iterator that was retrieved from a previous `GetShardIterator` operation.
        pub fn shard_iterator(mut self, inp: impl Into<String>) -> Self {
            self.shard_iterator = Some(inp.into());
            self
        }

        /// The maximum number of records to return from the shard. The upper limit is 1000.
        pub fn limit(mut self, inp: i32) -> Self {
            self.limit = Some(inp);
            self
        }

        pub fn build(self) -> Result<GetRecordsInput, BuildError> {
            Ok(GetRecordsInput {
                shard_iterator: self.shard_iterator.ok_or(BuildError::MissingField {
                    field: "shard_iterator",
                    details: "shard_iterator is required when building GetRecordsInput",
                })?,
                limit: self.limit,
            })
        }
    }
}

/// Represents the input of a `GetRecords` operation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct GetRecordsInput {
    pub shard_iterator: String,
    pub limit: Option<i32>,
}

impl GetRecordsInput {
    pub fn builder() -> get_records_input::Builder {
        get_records_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetRecords, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "GetRecords",
            crate::serializer::get_records(self),
            crate::operation::GetRecords::new(),
        )
    }
}

pub mod get_shard_iterator_input {
    use crate::input::GetShardIteratorInput;
    use crate::model::ShardIteratorType;
    use smithy_http::operation::BuildError;

    /// A builder for [`GetShardIteratorInput`](crate::input::GetShardIteratorInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        stream_arn: Option<String>,
        shard_id: Option<String>,
        shard_iterator_type: Option<ShardIteratorType>,
        sequence_number: Option<String>,
    }

    impl Builder {
        pub fn stream_arn(mut self, inp: impl Into<String>) -> Self {
            self.stream_arn = Some(inp.into());
            self
        }

        /// The identifier of the shard. The iterator will be returned for this shard ID.
        pub fn shard_id(mut self, inp: impl Into<String>) -> Self {
            self.shard_id = Some(inp.into());
            self
        }

        pub fn shard_iterator_type(mut self, inp: impl Into<ShardIteratorType>) -> Self {
            self.shard_iterator_type = Some(inp.into());
            self
        }

        /// The sequence number of a stream record in the shard from which to start reading.
        ///
        /// Required by `AT_SEQUENCE_NUMBER` and `AFTER_SEQUENCE_NUMBER` iterators.
        pub fn sequence_number(mut self, inp: impl Into<String>) -> Self {
            self.sequence_number = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<GetShardIteratorInput, BuildError> {
            Ok(GetShardIteratorInput {
                stream_arn: self.stream_arn.ok_or(BuildError::MissingField {
                    field: "stream_arn",
                    details: "stream_arn is required when building GetShardIteratorInput",
                })?,
                shard_id: self.shard_id.ok_or(BuildError::MissingField {
                    field: "shard_id",
                    details: "shard_id is required when building GetShardIteratorInput",
                })?,
                shard_iterator_type: self.shard_iterator_type.ok_or(BuildError::MissingField {
                    field: "shard_iterator_type",
                    details: "shard_iterator_type is required when building GetShardIteratorInput",
                })?,
                sequence_number: self.sequence_number,
            })
        }
    }
}

/// Represents the input of a `GetShardIterator` operation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct GetShardIteratorInput {
    pub stream_arn: String,
    pub shard_id: String,
    pub shard_iterator_type: ShardIteratorType,
    pub sequence_number: Option<String>,
}

impl GetShardIteratorInput {
    pub fn builder() -> get_shard_iterator_input::Builder {
        get_shard_iterator_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetShardIterator, AwsErrorRetryPolicy>, BuildError>
    {
        operation(
            config,
            "GetShardIterator",
            crate::serializer::get_shard_iterator(self),
            crate::operation::GetShardIterator::new(),
        )
    }
}

pub mod list_streams_input {
    use crate::input::ListStreamsInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`ListStreamsInput`](crate::input::ListStreamsInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        table_name: Option<String>,
        limit: Option<i32>,
        exclusive_start_stream_arn: Option<String>,
    }

    impl Builder {
        /// If this parameter is provided, then only the streams associated with this table name
        /// are returned.
        pub fn table_name(mut self, inp: impl Into<String>) -> Self {
            self.table_name = Some(inp.into());
            self
        }

        pub fn limit(mut self, inp: i32) -> Self {
            self.limit = Some(inp);
            self
        }

        pub fn exclusive_start_stream_arn(mut self, inp: impl Into<String>) -> Self {
            self.exclusive_start_stream_arn = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<ListStreamsInput, BuildError> {
            Ok(ListStreamsInput {
                table_name: self.table_name,
                limit: self.limit,
                exclusive_start_stream_arn: self.exclusive_start_stream_arn,
            })
        }
    }
}

/// Represents the input of a `ListStreams` operation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ListStreamsInput {
    pub table_name: Option<String>,
    pub limit: Option<i32>,
    pub exclusive_start_stream_arn: Option<String>,
}

impl ListStreamsInput {
    pub fn builder() -> list_streams_input::Builder {
        list_streams_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListStreams, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "ListStreams",
            crate::serializer::list_streams(self),
            crate::operation::ListStreams::new(),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::input::{DescribeStreamInput, GetShardIteratorInput, ListStreamsInput};
    use crate::model::ShardIteratorType;
    use crate::Credentials;
    use crate::Region;
    use smithy_http::operation::BuildError;

    fn config() -> Config {
        Config::builder()
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::from_keys("akid", "secret", None))
            .build()
    }

    #[test]
    fn missing_required_member() {
        let err = DescribeStreamInput::builder()
            .limit(10)
            .build()
            .expect_err("stream_arn is required");
        assert!(matches!(
            err,
            BuildError::MissingField {
                field: "stream_arn",
                ..
            }
        ));
        let err = GetShardIteratorInput::builder()
            .stream_arn("arn")
            .shard_id("shard")
            .build()
            .expect_err("iterator type is required");
        assert!(matches!(
            err,
            BuildError::MissingField {
                field: "shard_iterator_type",
                ..
            }
        ));
    }

    #[test]
    fn describe_stream_request() {
        let op = DescribeStreamInput::builder()
            .stream_arn("arn:aws:dynamodb:us-west-2:111122223333:table/Forum/stream/2015-05-20T20:51:10.252")
            .limit(2)
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        let metadata = op.metadata().expect("metadata is set");
        assert_eq!(metadata.name(), "DescribeStream");
        assert_eq!(metadata.service(), "dynamodbstreams");
        let request = op.request().http();
        assert_eq!(request.method(), "POST");
        assert_eq!(request.uri(), "/");
        assert_eq!(
            request.headers()["x-amz-target"],
            "DynamoDBStreams_20120810.DescribeStream"
        );
        assert_eq!(
            request.headers()["content-type"],
            "application/x-amz-json-1.0"
        );
        assert_eq!(
            request.body().bytes().unwrap(),
            &br#"{"StreamArn":"arn:aws:dynamodb:us-west-2:111122223333:table/Forum/stream/2015-05-20T20:51:10.252","Limit":2}"#[..]
        );
        assert_eq!(op.request().properties().get::<Region>(), Some(&Region::new("us-east-1")));
    }

    #[test]
    fn get_shard_iterator_request() {
        let op = GetShardIteratorInput::builder()
            .stream_arn("arn")
            .shard_id("shardId-00000001414576573621-f55eea83")
            .shard_iterator_type(ShardIteratorType::AfterSequenceNumber)
            .sequence_number("40100000000000000912497")
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(
            op.request().http().body().bytes().unwrap(),
            &br#"{"StreamArn":"arn","ShardId":"shardId-00000001414576573621-f55eea83","ShardIteratorType":"AFTER_SEQUENCE_NUMBER","SequenceNumber":"40100000000000000912497"}"#[..]
        );
    }

    #[test]
    fn empty_list_streams_request() {
        let op = ListStreamsInput::builder()
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(op.request().http().body().bytes().unwrap(), b"{}");
    }
}
