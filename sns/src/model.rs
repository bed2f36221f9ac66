/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_types::Blob;

/// A wrapper type for the topic's Amazon Resource Name (ARN).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Topic {
    pub topic_arn: Option<String>,
}

/// The list of tags to be added to the specified topic.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// The user-specified message attribute value.
///
/// `data_type` is one of `String`, `String.Array`, `Number` or `Binary`, optionally followed
/// by a custom label (`Number.float`). Exactly one of `string_value` and `binary_value` is set.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageAttributeValue {
    pub data_type: String,
    pub string_value: Option<String>,
    pub binary_value: Option<Blob>,
}

impl MessageAttributeValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            data_type: "String".to_string(),
            string_value: Some(value.into()),
            binary_value: None,
        }
    }

    pub fn number(value: impl Into<String>) -> Self {
        Self {
            data_type: "Number".to_string(),
            string_value: Some(value.into()),
            binary_value: None,
        }
    }

    pub fn binary(value: impl Into<Vec<u8>>) -> Self {
        Self {
            data_type: "Binary".to_string(),
            string_value: None,
            binary_value: Some(Blob::new(value.into())),
        }
    }
}
