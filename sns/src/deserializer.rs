/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::Topic;
use crate::output::{
    CreateTopicOutput, DeleteTopicOutput, ListTopicsOutput, PublishOutput, SubscribeOutput,
    UnsubscribeOutput,
};
use smithy_xml::decode::{Document, Element, XmlError};

/// Parse `<{Op}Response><{Op}Result>…` and hand the result element to `parse`
///
/// `DeleteTopic` and `Unsubscribe` only return `<ResponseMetadata>`.
fn parse_result<T: Default>(
    body: &[u8],
    operation: &str,
    parse: impl FnOnce(&Element) -> Result<T, XmlError>,
) -> Result<T, XmlError> {
    let body = std::str::from_utf8(body).map_err(|_| XmlError::custom("invalid utf-8"))?;
    let root = Document::parse(body)?;
    let response_name = format!("{}Response", operation);
    if root.name() != response_name {
        return Err(XmlError::custom(format!(
            "expected <{}>, found <{}>",
            response_name,
            root.name()
        )));
    }
    match root.child(&format!("{}Result", operation)) {
        Some(result) => parse(result),
        None => Ok(T::default()),
    }
}

fn string(el: &Element, name: &str) -> Option<String> {
    el.child_text(name).map(str::to_owned)
}

fn topic(el: &Element) -> Topic {
    Topic {
        topic_arn: string(el, "TopicArn"),
    }
}

pub(crate) fn create_topic(body: &[u8]) -> Result<CreateTopicOutput, XmlError> {
    parse_result(body, "CreateTopic", |result| {
        Ok(CreateTopicOutput {
            topic_arn: string(result, "TopicArn"),
        })
    })
}

pub(crate) fn delete_topic(body: &[u8]) -> Result<DeleteTopicOutput, XmlError> {
    parse_result(body, "DeleteTopic", |_| Ok(DeleteTopicOutput {}))
}

pub(crate) fn list_topics(body: &[u8]) -> Result<ListTopicsOutput, XmlError> {
    parse_result(body, "ListTopics", |result| {
        Ok(ListTopicsOutput {
            topics: result
                .child("Topics")
                .map(|topics| topics.children_named("member").map(topic).collect()),
            next_token: string(result, "NextToken"),
        })
    })
}

pub(crate) fn publish(body: &[u8]) -> Result<PublishOutput, XmlError> {
    parse_result(body, "Publish", |result| {
        Ok(PublishOutput {
            message_id: string(result, "MessageId"),
            sequence_number: string(result, "SequenceNumber"),
        })
    })
}

pub(crate) fn subscribe(body: &[u8]) -> Result<SubscribeOutput, XmlError> {
    parse_result(body, "Subscribe", |result| {
        Ok(SubscribeOutput {
            subscription_arn: string(result, "SubscriptionArn"),
        })
    })
}

pub(crate) fn unsubscribe(body: &[u8]) -> Result<UnsubscribeOutput, XmlError> {
    parse_result(body, "Unsubscribe", |_| Ok(UnsubscribeOutput {}))
}
