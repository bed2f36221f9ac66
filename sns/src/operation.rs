/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::Error;
use crate::output::{
    CreateTopicOutput, DeleteTopicOutput, ListTopicsOutput, PublishOutput, SubscribeOutput,
    UnsubscribeOutput,
};
use bytes::Bytes;
use smithy_http::response::ParseStrictResponse;
use smithy_xml::decode::XmlError;

fn parse_response<T>(
    response: &http::Response<Bytes>,
    deserialize: fn(&[u8]) -> Result<T, XmlError>,
) -> Result<T, Error> {
    if !response.status().is_success() {
        return Err(crate::error::parse_error(response));
    }
    deserialize(response.body()).map_err(|err| {
        tracing::warn!(error = %err, "response body could not be deserialized");
        Error::unhandled(err)
    })
}

/// Creates a topic to which notifications can be published.
///
/// This action is idempotent: creating a topic that already exists returns its ARN.
#[derive(Clone, Default, Debug)]
pub struct CreateTopic {
    _private: (),
}

impl CreateTopic {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for CreateTopic {
    type Output = Result<CreateTopicOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::create_topic)
    }
}

/// Deletes a topic and all its subscriptions. Deleting a topic that doesn't exist does not
/// result in an error.
#[derive(Clone, Default, Debug)]
pub struct DeleteTopic {
    _private: (),
}

impl DeleteTopic {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for DeleteTopic {
    type Output = Result<DeleteTopicOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::delete_topic)
    }
}

/// Returns a list of the requester's topics. Each call returns a limited list of topics, up to
/// 100; use `next_token` to get further results.
#[derive(Clone, Default, Debug)]
pub struct ListTopics {
    _private: (),
}

impl ListTopics {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for ListTopics {
    type Output = Result<ListTopicsOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::list_topics)
    }
}

/// Sends a message to a topic, a text message (SMS) to a phone number, or a message directly
/// to a mobile platform endpoint.
#[derive(Clone, Default, Debug)]
pub struct Publish {
    _private: (),
}

impl Publish {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for Publish {
    type Output = Result<PublishOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::publish)
    }
}

/// Subscribes an endpoint to a topic. HTTP(S) and email endpoints must confirm the
/// subscription before they receive messages.
#[derive(Clone, Default, Debug)]
pub struct Subscribe {
    _private: (),
}

impl Subscribe {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for Subscribe {
    type Output = Result<SubscribeOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::subscribe)
    }
}

/// Deletes a subscription.
#[derive(Clone, Default, Debug)]
pub struct Unsubscribe {
    _private: (),
}

impl Unsubscribe {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for Unsubscribe {
    type Output = Result<UnsubscribeOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::deserializer::unsubscribe)
    }
}

#[cfg(test)]
mod test {
    use crate::operation::{Publish, Unsubscribe};
    use bytes::Bytes;
    use smithy_http::response::ParseStrictResponse;

    #[test]
    fn unsubscribe_success() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                b"<UnsubscribeResponse><ResponseMetadata><RequestId>18e0ac39</RequestId></ResponseMetadata></UnsubscribeResponse>",
            ))
            .unwrap();
        Unsubscribe::new().parse(&response).expect("success");
    }

    #[test]
    fn publish_endpoint_disabled() {
        let response = http::Response::builder()
            .status(400)
            .body(Bytes::from_static(
                b"<ErrorResponse><Error><Type>Sender</Type><Code>EndpointDisabled</Code>\
                  <Message>Endpoint is disabled</Message></Error><RequestId>r</RequestId></ErrorResponse>",
            ))
            .unwrap();
        let err = Publish::new().parse(&response).expect_err("disabled");
        assert!(err.is_endpoint_disabled_exception());
        assert_eq!(err.request_id(), Some("r"));
    }
}
