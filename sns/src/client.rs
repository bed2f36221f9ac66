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
/// Client for Amazon Simple Notification Service
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

    pub fn create_topic(&self) -> fluent_builders::CreateTopic {
        fluent_builders::CreateTopic::new(self.handle.clone())
    }

    pub fn delete_topic(&self) -> fluent_builders::DeleteTopic {
        fluent_builders::DeleteTopic::new(self.handle.clone())
    }

    pub fn list_topics(&self) -> fluent_builders::ListTopics {
        fluent_builders::ListTopics::new(self.handle.clone())
    }

    pub fn publish(&self) -> fluent_builders::Publish {
        fluent_builders::Publish::new(self.handle.clone())
    }

    pub fn subscribe(&self) -> fluent_builders::Subscribe {
        fluent_builders::Subscribe::new(self.handle.clone())
    }

    pub fn unsubscribe(&self) -> fluent_builders::Unsubscribe {
        fluent_builders::Unsubscribe::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use super::{Error, Handle, SdkError};
    use crate::model::{MessageAttributeValue, Tag};
    use crate::output::{
        CreateTopicOutput,
        DeleteTopicOutput,
        ListTopicsOutput,
        PublishOutput,
        SubscribeOutput,
        UnsubscribeOutput,
    };
    use std::sync::Arc;

    #[derive(Debug)]
    pub struct CreateTopic {
        handle: Arc<Handle>,
        inner: crate::input::create_topic_input::Builder,
    }

    impl CreateTopic {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<CreateTopicOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.name(inp);
            self
        }

        pub fn attributes(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            self.inner = self.inner.attributes(k, v);
            self
        }

        pub fn tags(mut self, inp: Tag) -> Self {
            self.inner = self.inner.tags(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DeleteTopic {
        handle: Arc<Handle>,
        inner: crate::input::delete_topic_input::Builder,
    }

    impl DeleteTopic {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<DeleteTopicOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn topic_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.topic_arn(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct ListTopics {
        handle: Arc<Handle>,
        inner: crate::input::list_topics_input::Builder,
    }

    impl ListTopics {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<ListTopicsOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct Publish {
        handle: Arc<Handle>,
        inner: crate::input::publish_input::Builder,
    }

    impl Publish {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<PublishOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn topic_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.topic_arn(inp);
            self
        }

        pub fn target_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.target_arn(inp);
            self
        }

        pub fn phone_number(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.phone_number(inp);
            self
        }

        pub fn message(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.message(inp);
            self
        }

        pub fn subject(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.subject(inp);
            self
        }

        pub fn message_structure(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.message_structure(inp);
            self
        }

        pub fn message_attributes(
            mut self,
            k: impl Into<String>,
            v: MessageAttributeValue,
        ) -> Self {
            self.inner = self.inner.message_attributes(k, v);
            self
        }

        pub fn message_deduplication_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.message_deduplication_id(inp);
            self
        }

        pub fn message_group_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.message_group_id(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct Subscribe {
        handle: Arc<Handle>,
        inner: crate::input::subscribe_input::Builder,
    }

    impl Subscribe {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<SubscribeOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn topic_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.topic_arn(inp);
            self
        }

        pub fn protocol(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.protocol(inp);
            self
        }

        pub fn endpoint(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.endpoint(inp);
            self
        }

        pub fn attributes(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            self.inner = self.inner.attributes(k, v);
            self
        }

        pub fn return_subscription_arn(mut self, inp: bool) -> Self {
            self.inner = self.inner.return_subscription_arn(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct Unsubscribe {
        handle: Arc<Handle>,
        inner: crate::input::unsubscribe_input::Builder,
    }

    impl Unsubscribe {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<UnsubscribeOutput, SdkError<Error>> {
            let handle = self.handle;
            let op = self
                .inner
                .build()
                .and_then(|input| input.make_operation(&handle.conf))
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            handle.client.call(op).await
        }

        pub fn subscription_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.subscription_arn(inp);
            self
        }
    }
}
