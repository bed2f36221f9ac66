/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::input::{
    CreateTopicInput, DeleteTopicInput, ListTopicsInput, PublishInput, SubscribeInput,
    UnsubscribeInput,
};
use crate::model::{MessageAttributeValue, Tag};
use smithy_query::{QueryValueWriter, QueryWriter};
use std::collections::HashMap;

pub(crate) const API_VERSION: &str = "2010-03-31";

fn opt_string(writer: &mut QueryWriter, name: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        writer.prefix(name).string(value);
    }
}

/// Entries are written in key order so that identical inputs produce identical bodies
fn sorted<V>(map: &HashMap<String, V>) -> Vec<(&String, &V)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

/// `Attributes.entry.N.key` / `Attributes.entry.N.value`
fn attributes(writer: QueryValueWriter, attributes: &HashMap<String, String>) {
    let mut map = writer.start_map(false, "key", "value");
    for (key, value) in sorted(attributes) {
        map.entry(key).string(value);
    }
    map.finish();
}

/// `MessageAttributes.entry.N.Name` / `MessageAttributes.entry.N.Value.DataType` …
fn message_attributes(
    writer: QueryValueWriter,
    attributes: &HashMap<String, MessageAttributeValue>,
) {
    let mut map = writer.start_map(false, "Name", "Value");
    for (name, value) in sorted(attributes) {
        let mut entry = map.entry(name);
        entry.prefix("DataType").string(&value.data_type);
        if let Some(string_value) = &value.string_value {
            entry.prefix("StringValue").string(string_value);
        }
        if let Some(binary_value) = &value.binary_value {
            entry
                .prefix("BinaryValue")
                .string(&smithy_http::base64::encode(binary_value));
        }
    }
    map.finish();
}

fn tags(writer: QueryValueWriter, tags: &[Tag]) {
    let mut list = writer.start_list(false, None);
    for tag in tags {
        let mut entry = list.entry();
        if let Some(key) = &tag.key {
            entry.prefix("Key").string(key);
        }
        if let Some(value) = &tag.value {
            entry.prefix("Value").string(value);
        }
    }
    list.finish();
}

pub(crate) fn create_topic(input: &CreateTopicInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "CreateTopic", API_VERSION);
    writer.prefix("Name").string(&input.name);
    if let Some(input_attributes) = &input.attributes {
        attributes(writer.prefix("Attributes"), input_attributes);
    }
    if let Some(input_tags) = &input.tags {
        tags(writer.prefix("Tags"), input_tags);
    }
    writer.finish();
    out
}

pub(crate) fn delete_topic(input: &DeleteTopicInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DeleteTopic", API_VERSION);
    writer.prefix("TopicArn").string(&input.topic_arn);
    writer.finish();
    out
}

pub(crate) fn list_topics(input: &ListTopicsInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "ListTopics", API_VERSION);
    opt_string(&mut writer, "NextToken", &input.next_token);
    writer.finish();
    out
}

pub(crate) fn publish(input: &PublishInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "Publish", API_VERSION);
    opt_string(&mut writer, "TopicArn", &input.topic_arn);
    opt_string(&mut writer, "TargetArn", &input.target_arn);
    opt_string(&mut writer, "PhoneNumber", &input.phone_number);
    writer.prefix("Message").string(&input.message);
    opt_string(&mut writer, "Subject", &input.subject);
    opt_string(&mut writer, "MessageStructure", &input.message_structure);
    if let Some(attributes) = &input.message_attributes {
        message_attributes(writer.prefix("MessageAttributes"), attributes);
    }
    opt_string(
        &mut writer,
        "MessageDeduplicationId",
        &input.message_deduplication_id,
    );
    opt_string(&mut writer, "MessageGroupId", &input.message_group_id);
    writer.finish();
    out
}

pub(crate) fn subscribe(input: &SubscribeInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "Subscribe", API_VERSION);
    writer.prefix("TopicArn").string(&input.topic_arn);
    writer.prefix("Protocol").string(&input.protocol);
    opt_string(&mut writer, "Endpoint", &input.endpoint);
    if let Some(input_attributes) = &input.attributes {
        attributes(writer.prefix("Attributes"), input_attributes);
    }
    if let Some(return_arn) = input.return_subscription_arn {
        writer.prefix("ReturnSubscriptionArn").boolean(return_arn);
    }
    writer.finish();
    out
}

pub(crate) fn unsubscribe(input: &UnsubscribeInput) -> String {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "Unsubscribe", API_VERSION);
    writer
        .prefix("SubscriptionArn")
        .string(&input.subscription_arn);
    writer.finish();
    out
}
