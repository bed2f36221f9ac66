/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use crate::model::{MessageAttributeValue, Tag};
use aws_http::AwsErrorRetryPolicy;
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::{BuildError, Metadata, Operation};
use std::collections::HashMap;

fn operation<H>(
    config: &Config,
    operation_name: &'static str,
    body: String,
    handler: H,
) -> Result<Operation<H, AwsErrorRetryPolicy>, BuildError> {
    let request = http::Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(SdkBody::from(body))?;
    let mut request = operation::Request::new(request);
    config.configure(&mut request.properties_mut());
    Ok(Operation::new(request, handler)
        .with_metadata(Metadata::new(operation_name, "sns"))
        .with_retry_policy(AwsErrorRetryPolicy::new()))
}

pub mod create_topic_input {
    use crate::input::CreateTopicInput;
    use crate::model::Tag;
    use smithy_http::operation::BuildError;
    use std::collections::HashMap;

    /// A builder for [`CreateTopicInput`](crate::input::CreateTopicInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        attributes: Option<HashMap<String, String>>,
        tags: Option<Vec<Tag>>,
    }

    impl Builder {
        /// The name of the topic you want to create.
        ///
        /// Up to 256 characters: uppercase and lowercase ASCII letters, numbers, underscores,
        /// and hyphens. FIFO topic names must end with `.fifo`.
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }

        /// Adds a topic attribute, eg. `DisplayName`, `FifoTopic` or `KmsMasterKeyId`
        pub fn attributes(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            self.attributes
                .get_or_insert_with(HashMap::new)
                .insert(k.into(), v.into());
            self
        }

        pub fn tags(mut self, inp: Tag) -> Self {
            self.tags.get_or_insert_with(Vec::new).push(inp);
            self
        }

        pub fn build(self) -> Result<CreateTopicInput, BuildError> {
            Ok(CreateTopicInput {
                name: self.name.ok_or(BuildError::MissingField {
                    field: "name",
                    details: "name is required when building CreateTopicInput",
                })?,
                attributes: self.attributes,
                tags: self.tags,
            })
        }
    }
}

/// Input for CreateTopic action.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTopicInput {
    pub name: String,
    pub attributes: Option<HashMap<String, String>>,
    pub tags: Option<Vec<Tag>>,
}

impl CreateTopicInput {
    pub fn builder() -> create_topic_input::Builder {
        create_topic_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateTopic, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "CreateTopic",
            crate::serializer::create_topic(self),
            crate::operation::CreateTopic::new(),
        )
    }
}

pub mod delete_topic_input {
    use crate::input::DeleteTopicInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DeleteTopicInput`](crate::input::DeleteTopicInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        topic_arn: Option<String>,
    }

    impl Builder {
        pub fn topic_arn(mut self, inp: impl Into<String>) -> Self {
            self.topic_arn = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<DeleteTopicInput, BuildError> {
            Ok(DeleteTopicInput {
                topic_arn: self.topic_arn.ok_or(BuildError::MissingField {
                    field: "topic_arn",
                    details: "topic_arn is required when building DeleteTopicInput",
                })?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteTopicInput {
    pub topic_arn: String,
}

impl DeleteTopicInput {
    pub fn builder() -> delete_topic_input::Builder {
        delete_topic_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteTopic, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "DeleteTopic",
            crate::serializer::delete_topic(self),
            crate::operation::DeleteTopic::new(),
        )
    }
}

pub mod list_topics_input {
    use crate::input::ListTopicsInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`ListTopicsInput`](crate::input::ListTopicsInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        next_token: Option<String>,
    }

    impl Builder {
        /// Token returned by the previous `ListTopics` request.
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<ListTopicsInput, BuildError> {
            Ok(ListTopicsInput {
                next_token: self.next_token,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ListTopicsInput {
    pub next_token: Option<String>,
}

impl ListTopicsInput {
    pub fn builder() -> list_topics_input::Builder {
        list_topics_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListTopics, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "ListTopics",
            crate::serializer::list_topics(self),
            crate::operation::ListTopics::new(),
        )
    }
}

pub mod publish_input {
    use crate::input::PublishInput;
    use crate::model::MessageAttributeValue;
    use smithy_http::operation::BuildError;
    use std::collections::HashMap;

    /// A builder for [`PublishInput`](crate::input::PublishInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        topic_arn: Option<String>,
        target_arn: Option<String>,
        phone_number: Option<String>,
        message: Option<String>,
        subject: Option<String>,
        message_structure: Option<String>,
        message_attributes: Option<HashMap<String, MessageAttributeValue>>,
        message_deduplication_id: Option<String>,
        message_group_id: Option<String>,
    }

    impl Builder {
        /// The topic you want to publish to.
        pub fn topic_arn(mut self, inp: impl Into<String>) -> Self {
            self.topic_arn = Some(inp.into());
            self
        }

        /// A platform application endpoint to deliver the message to directly
        pub fn target_arn(mut self, inp: impl Into<String>) -> Self {
            self.target_arn = Some(inp.into());
            self
        }

        /// An E.164 phone number to send an SMS message to
        pub fn phone_number(mut self, inp: impl Into<String>) -> Self {
            self.phone_number = Some(inp.into());
            self
        }

        /// The message you want to send. At most 256 KB.
        pub fn message(mut self, inp: impl Into<String>) -> Self {
            self.message = Some(inp.into());
            self
        }

        /// Used as the "Subject" line when the message is delivered to email endpoints.
        pub fn subject(mut self, inp: impl Into<String>) -> Self {
            self.subject = Some(inp.into());
            self
        }

        /// Set to `json` to send a different message for each protocol. `message` must then
        /// be a JSON object with a `default` key.
        pub fn message_structure(mut self, inp: impl Into<String>) -> Self {
            self.message_structure = Some(inp.into());
            self
        }

        pub fn message_attributes(
            mut self,
            k: impl Into<String>,
            v: MessageAttributeValue,
        ) -> Self {
            self.message_attributes
                .get_or_insert_with(HashMap::new)
                .insert(k.into(), v);
            self
        }

        /// FIFO topics only
        pub fn message_deduplication_id(mut self, inp: impl Into<String>) -> Self {
            self.message_deduplication_id = Some(inp.into());
            self
        }

        /// FIFO topics only; required for them
        pub fn message_group_id(mut self, inp: impl Into<String>) -> Self {
            self.message_group_id = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<PublishInput, BuildError> {
            if self.topic_arn.is_none() && self.target_arn.is_none() && self.phone_number.is_none()
            {
                return Err(BuildError::MissingField {
                    field: "topic_arn",
                    details: "one of topic_arn, target_arn or phone_number must be set when building PublishInput",
                });
            }
            Ok(PublishInput {
                topic_arn: self.topic_arn,
                target_arn: self.target_arn,
                phone_number: self.phone_number,
                message: self.message.ok_or(BuildError::MissingField {
                    field: "message",
                    details: "message is required when building PublishInput",
                })?,
                subject: self.subject,
                message_structure: self.message_structure,
                message_attributes: self.message_attributes,
                message_deduplication_id: self.message_deduplication_id,
                message_group_id: self.message_group_id,
            })
        }
    }
}

/// Input for Publish action.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct PublishInput {
    pub topic_arn: Option<String>,
    pub target_arn: Option<String>,
    pub phone_number: Option<String>,
    pub message: String,
    pub subject: Option<String>,
    pub message_structure: Option<String>,
    pub message_attributes: Option<HashMap<String, MessageAttributeValue>>,
    pub message_deduplication_id: Option<String>,
    pub message_group_id: Option<String>,
}

impl PublishInput {
    pub fn builder() -> publish_input::Builder {
        publish_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::Publish, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "Publish",
            crate::serializer::publish(self),
            crate::operation::Publish::new(),
        )
    }
}

pub mod subscribe_input {
    use crate::input::SubscribeInput;
    use smithy_http::operation::BuildError;
    use std::collections::HashMap;

    /// A builder for [`SubscribeInput`](crate::input::SubscribeInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        topic_arn: Option<String>,
        protocol: Option<String>,
        endpoint: Option<String>,
        attributes: Option<HashMap<String, String>>,
        return_subscription_arn: Option<bool>,
    }

    impl Builder {
        pub fn topic_arn(mut self, inp: impl Into<String>) -> Self {
            self.topic_arn = Some(inp.into());
            self
        }

        /// `http`, `https`, `email`, `email-json`, `sms`, `sqs`, `application`, `lambda` or
        /// `firehose`
        pub fn protocol(mut self, inp: impl Into<String>) -> Self {
            self.protocol = Some(inp.into());
            self
        }

        /// The endpoint that receives notifications; its format depends on the protocol
        pub fn endpoint(mut self, inp: impl Into<String>) -> Self {
            self.endpoint = Some(inp.into());
            self
        }

        /// Adds a subscription attribute, eg. `FilterPolicy` or `RawMessageDelivery`
        pub fn attributes(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            self.attributes
                .get_or_insert_with(HashMap::new)
                .insert(k.into(), v.into());
            self
        }

        pub fn return_subscription_arn(mut self, inp: bool) -> Self {
            self.return_subscription_arn = Some(inp);
            self
        }

        pub fn build(self) -> Result<SubscribeInput, BuildError> {
            Ok(SubscribeInput {
                topic_arn: self.topic_arn.ok_or(BuildError::MissingField {
                    field: "topic_arn",
                    details: "topic_arn is required when building SubscribeInput",
                })?,
                protocol: self.protocol.ok_or(BuildError::MissingField {
                    field: "protocol",
                    details: "protocol is required when building SubscribeInput",
                })?,
                endpoint: self.endpoint,
                attributes: self.attributes,
                return_subscription_arn: self.return_subscription_arn,
            })
        }
    }
}

/// Input for Subscribe action.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct SubscribeInput {
    pub topic_arn: String,
    pub protocol: String,
    pub endpoint: Option<String>,
    pub attributes: Option<HashMap<String, String>>,
    pub return_subscription_arn: Option<bool>,
}

impl SubscribeInput {
    pub fn builder() -> subscribe_input::Builder {
        subscribe_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::Subscribe, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "Subscribe",
            crate::serializer::subscribe(self),
            crate::operation::Subscribe::new(),
        )
    }
}

pub mod unsubscribe_input {
    use crate::input::UnsubscribeInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`UnsubscribeInput`](crate::input::UnsubscribeInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        subscription_arn: Option<String>,
    }

    impl Builder {
        pub fn subscription_arn(mut self, inp: impl Into<String>) -> Self {
            self.subscription_arn = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<UnsubscribeInput, BuildError> {
            Ok(UnsubscribeInput {
                subscription_arn: self.subscription_arn.ok_or(BuildError::MissingField {
                    field: "subscription_arn",
                    details: "subscription_arn is required when building UnsubscribeInput",
                })?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct UnsubscribeInput {
    pub subscription_arn: String,
}

impl UnsubscribeInput {
    pub fn builder() -> unsubscribe_input::Builder {
        unsubscribe_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::Unsubscribe, AwsErrorRetryPolicy>, BuildError> {
        operation(
            config,
            "Unsubscribe",
            crate::serializer::unsubscribe(self),
            crate::operation::Unsubscribe::new(),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::input::{CreateTopicInput, PublishInput, SubscribeInput};
    use crate::model::{MessageAttributeValue, Tag};
    use crate::{Credentials, Region};
    use smithy_http::operation::BuildError;

    fn config() -> Config {
        Config::builder()
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::from_keys("akid", "secret", None))
            .build()
    }

    fn body<H, R>(op: &smithy_http::operation::Operation<H, R>) -> String {
        String::from_utf8(op.request().http().body().bytes().unwrap().to_vec()).unwrap()
    }

    #[test]
    fn create_topic_with_attributes_and_tags() {
        let op = CreateTopicInput::builder()
            .name("orders.fifo")
            .attributes("FifoTopic", "true")
            .attributes("DisplayName", "Orders")
            .tags(Tag::new("team", "checkout"))
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(
            body(&op),
            "Action=CreateTopic&Version=2010-03-31&Name=orders.fifo\
             &Attributes.entry.1.key=DisplayName&Attributes.entry.1.value=Orders\
             &Attributes.entry.2.key=FifoTopic&Attributes.entry.2.value=true\
             &Tags.member.1.Key=team&Tags.member.1.Value=checkout"
        );
    }

    #[test]
    fn publish_with_message_attributes() {
        let op = PublishInput::builder()
            .topic_arn("arn:aws:sns:us-east-1:123456789012:orders")
            .message("hello sns!")
            .message_attributes("priority", MessageAttributeValue::number("5"))
            .message_attributes("payload", MessageAttributeValue::binary(&b"hi"[..]))
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(
            body(&op),
            "Action=Publish&Version=2010-03-31\
             &TopicArn=arn%3Aaws%3Asns%3Aus-east-1%3A123456789012%3Aorders\
             &Message=hello%20sns%21\
             &MessageAttributes.entry.1.Name=payload\
             &MessageAttributes.entry.1.Value.DataType=Binary\
             &MessageAttributes.entry.1.Value.BinaryValue=aGk%3D\
             &MessageAttributes.entry.2.Name=priority\
             &MessageAttributes.entry.2.Value.DataType=Number\
             &MessageAttributes.entry.2.Value.StringValue=5"
        );
    }

    #[test]
    fn publish_needs_a_destination() {
        let err = PublishInput::builder()
            .message("nowhere to go")
            .build()
            .expect_err("no destination");
        assert!(matches!(err, BuildError::MissingField { field: "topic_arn", .. }));
        PublishInput::builder()
            .phone_number("+15555550100")
            .message("sms")
            .build()
            .expect("phone numbers are a destination");
    }

    #[test]
    fn subscribe_requires_protocol() {
        let err = SubscribeInput::builder()
            .topic_arn("arn:aws:sns:us-east-1:123456789012:orders")
            .build()
            .expect_err("protocol is required");
        assert!(matches!(err, BuildError::MissingField { field: "protocol", .. }));
    }
}
