/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use crate::error::Error;
use aws_hyper::conn::Standard;
use aws_hyper::SdkError;
use std::sync::Arc;

#[derive(Debug)]
pub(crate) struct Handle {
    client: aws_hyper::Client<Standard>,
    conf: Config,
}

/// Client for Amazon DynamoDB Streams
///
/// Every method returns a fluent builder; the request is sent with `send().await`.
#[derive(Clone, Debug)]
pub struct Client {
    handle: Arc<Handle>,
}

impl Client {
    pub fn from_conf(conf: Config) -> Self {
        Self::from_conf_conn(conf, Standard::https())
    }

    pub fn from_conf_conn(conf: Config, conn: Standard) -> Self {
        Self::from_parts(aws_hyper::Client::new(conn), conf)
    }

    /// Build a client around a preconfigured `aws_hyper::Client`, eg. one with a custom retry
    /// configuration
    pub fn from_parts(client: aws_hyper::Client<Standard>, conf: Config) -> Self {
        Self {
            handle: Arc::new(Handle { client, conf }),
        }
    }

    pub fn conf(&self) -> &Config {
        &self.handle.conf
    }

    pub fn describe_stream(&self) -> fluent_builders::DescribeStream {
        fluent_builders::DescribeStream::new(self.handle.clone())
    }

    pub fn get_records(&self) -> fluent_builders::GetRecords {
        fluent_builders::GetRecords::new(self.handle.clone())
    }

    pub fn get_shard_iterator(&self) -> fluent_builders::GetShardIterator {
        fluent_builders::GetShardIterator::new(self.handle.clone())
    }

    pub fn list_streams(&self) -> fluent_builders::ListStreams {
        fluent_builders::ListStreams::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use super::{Error, Handle, SdkError};
    use crate::model::ShardIteratorType;
    use crate::output::{
        DescribeStreamOutput, GetRecordsOutput, GetShardIteratorOutput, ListStreamsOutput,
    };
    use std::sync::Arc;

    #[derive(Debug)]
    pub struct DescribeStream {
        handle: Arc<Handle>,
        inner: crate::input::describe_stream_input::Builder,
    }

    impl DescribeStream {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<DescribeStreamOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn stream_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.stream_arn(inp);
            self
        }

        pub fn limit(mut self, inp: i32) -> Self {
            self.inner = self.inner.limit(inp);
            self
        }

        pub fn exclusive_start_shard_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.exclusive_start_shard_id(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct GetRecords {
        handle: Arc<Handle>,
        inner: crate::input::get_records_input::Builder,
    }

    impl GetRecords {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<GetRecordsOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn shard_iterator(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.shard_iterator(inp);
            self
        }

        pub fn limit(mut self, inp: i32) -> Self {
            self.inner = self.inner.limit(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct GetShardIterator {
        handle: Arc<Handle>,
        inner: crate::input::get_shard_iterator_input::Builder,
    }

    impl GetShardIterator {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<GetShardIteratorOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn stream_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.stream_arn(inp);
            self
        }

        pub fn shard_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.shard_id(inp);
            self
        }

        pub fn shard_iterator_type(mut self, inp: impl Into<ShardIteratorType>) -> Self {
            self.inner = self.inner.shard_iterator_type(inp);
            self
        }

        pub fn sequence_number(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.sequence_number(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct ListStreams {
        handle: Arc<Handle>,
        inner: crate::input::list_streams_input::Builder,
    }

    impl ListStreams {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<ListStreamsOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn table_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.table_name(inp);
            self
        }

        pub fn limit(mut self, inp: i32) -> Self {
            self.inner = self.inner.limit(inp);
            self
        }

        pub fn exclusive_start_stream_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.exclusive_start_stream_arn(inp);
            self
        }
    }
}
