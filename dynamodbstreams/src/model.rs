/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::deserializer::{blob, blob_list, epoch_seconds};
use serde::Deserialize;
use smithy_types::{Blob, Instant};
use std::collections::HashMap;

/// Declares a string enum with a catch-all `Unknown` variant for values added to the service
/// after this client was built.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
        #[serde(from = "String")]
        pub enum $name {
            $($variant,)+
            Unknown(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Unknown(value) => value.as_str(),
                }
            }
        }

        impl<'a> From<&'a str> for $name {
            fn from(s: &'a str) -> Self {
                match s {
                    $($value => $name::$variant,)+
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name::from(s.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}

string_enum! {
    StreamStatus {
        Disabled => "DISABLED",
        Disabling => "DISABLING",
        Enabled => "ENABLED",
        Enabling => "ENABLING",
    }
}

string_enum! {
    /// Determines the information written to the stream when an item is modified
    StreamViewType {
        KeysOnly => "KEYS_ONLY",
        NewAndOldImages => "NEW_AND_OLD_IMAGES",
        NewImage => "NEW_IMAGE",
        OldImage => "OLD_IMAGE",
    }
}

string_enum! {
    /// Where in the shard a shard iterator starts reading
    ShardIteratorType {
        AfterSequenceNumber => "AFTER_SEQUENCE_NUMBER",
        AtSequenceNumber => "AT_SEQUENCE_NUMBER",
        Latest => "LATEST",
        TrimHorizon => "TRIM_HORIZON",
    }
}

string_enum! {
    OperationType {
        Insert => "INSERT",
        Modify => "MODIFY",
        Remove => "REMOVE",
    }
}

string_enum! {
    KeyType {
        Hash => "HASH",
        Range => "RANGE",
    }
}

/// The data for an attribute
///
/// Each attribute value is described as a name-value pair: the name is the data type and the
/// value is the data itself.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum AttributeValue {
    #[serde(rename = "B", deserialize_with = "blob")]
    B(Blob),
    #[serde(rename = "BOOL")]
    Bool(bool),
    #[serde(rename = "BS", deserialize_with = "blob_list")]
    Bs(Vec<Blob>),
    L(Vec<AttributeValue>),
    M(HashMap<String, AttributeValue>),
    /// Numbers are sent as strings to preserve precision
    N(String),
    #[serde(rename = "NS")]
    Ns(Vec<String>),
    #[serde(rename = "NULL")]
    Null(bool),
    S(String),
    #[serde(rename = "SS")]
    Ss(Vec<String>),
}

impl AttributeValue {
    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttributeValue::S(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_n(&self) -> Option<&str> {
        match self {
            AttributeValue::N(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_b(&self) -> Option<&Blob> {
        match self {
            AttributeValue::B(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_m(&self) -> Option<&HashMap<String, AttributeValue>> {
        match self {
            AttributeValue::M(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null(true))
    }
}

/// Represents all of the data describing a particular stream
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamDescription {
    pub stream_arn: Option<String>,
    pub stream_label: Option<String>,
    pub stream_status: Option<StreamStatus>,
    pub stream_view_type: Option<StreamViewType>,
    #[serde(default, deserialize_with = "epoch_seconds")]
    pub creation_request_date_time: Option<Instant>,
    pub table_name: Option<String>,
    pub key_schema: Option<Vec<KeySchemaElement>>,
    pub shards: Option<Vec<Shard>>,
    /// The shard id of the last item in this page. `None` when the whole stream was described.
    pub last_evaluated_shard_id: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeySchemaElement {
    pub attribute_name: Option<String>,
    pub key_type: Option<KeyType>,
}

/// A uniquely identified group of stream records within a stream
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shard {
    pub shard_id: Option<String>,
    pub sequence_number_range: Option<SequenceNumberRange>,
    pub parent_shard_id: Option<String>,
}

impl Shard {
    /// A shard is closed once its range has an ending sequence number
    pub fn is_closed(&self) -> bool {
        self.sequence_number_range
            .as_ref()
            .map(|range| range.ending_sequence_number.is_some())
            .unwrap_or(false)
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SequenceNumberRange {
    pub starting_sequence_number: Option<String>,
    pub ending_sequence_number: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stream {
    pub stream_arn: Option<String>,
    pub table_name: Option<String>,
    pub stream_label: Option<String>,
}

/// A description of a unique event within a stream
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(rename = "eventID")]
    pub event_id: Option<String>,
    pub event_name: Option<OperationType>,
    pub event_version: Option<String>,
    pub event_source: Option<String>,
    pub aws_region: Option<String>,
    pub dynamodb: Option<StreamRecord>,
    /// Present for items deleted by Time to Live
    pub user_identity: Option<Identity>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamRecord {
    #[serde(default, deserialize_with = "epoch_seconds")]
    pub approximate_creation_date_time: Option<Instant>,
    pub keys: Option<HashMap<String, AttributeValue>>,
    pub new_image: Option<HashMap<String, AttributeValue>>,
    pub old_image: Option<HashMap<String, AttributeValue>>,
    pub sequence_number: Option<String>,
    pub size_bytes: Option<i64>,
    pub stream_view_type: Option<StreamViewType>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Identity {
    pub principal_id: Option<String>,
    #[serde(rename = "Type")]
    pub r#type: Option<String>,
}

#[cfg(test)]
mod test {
    use crate::model::{AttributeValue, ShardIteratorType, StreamStatus};
    use smithy_types::Blob;
    use std::collections::HashMap;

    #[test]
    fn unknown_enum_values_are_preserved() {
        assert_eq!(StreamStatus::from("ENABLED"), StreamStatus::Enabled);
        let status = StreamStatus::from("ARCHIVED");
        assert_eq!(status, StreamStatus::Unknown("ARCHIVED".to_string()));
        assert_eq!(status.as_str(), "ARCHIVED");
        assert_eq!(ShardIteratorType::TrimHorizon.as_str(), "TRIM_HORIZON");
    }

    #[test]
    fn attribute_values() {
        let item: HashMap<String, AttributeValue> = serde_json::from_str(
            r#"{
                "Artist": {"S": "No One You Know"},
                "Year": {"N": "2015"},
                "Cover": {"B": "aGVsbG8="},
                "Tags": {"SS": ["indie", "rock"]},
                "Discs": {"BS": ["AQ==", "Ag=="]},
                "Extra": {"NULL": true},
                "Live": {"BOOL": false},
                "Tracks": {"L": [{"S": "one"}, {"N": "2"}]},
                "Label": {"M": {"Name": {"S": "Sub Pop"}}}
            }"#,
        )
        .expect("valid item");
        assert_eq!(item["Artist"].as_s(), Some("No One You Know"));
        assert_eq!(item["Year"].as_n(), Some("2015"));
        assert_eq!(item["Cover"].as_b().map(|b| b.as_ref()), Some(&b"hello"[..]));
        assert_eq!(
            item["Discs"],
            AttributeValue::Bs(vec![
                smithy_types::Blob::new(vec![1]),
                smithy_types::Blob::new(vec![2])
            ])
        );
        assert!(item["Extra"].is_null());
        assert_eq!(item["Live"], AttributeValue::Bool(false));
        assert_eq!(
            item["Tracks"],
            AttributeValue::L(vec![
                AttributeValue::S("one".into()),
                AttributeValue::N("2".into())
            ])
        );
        assert_eq!(
            item["Label"].as_m().and_then(|m| m["Name"].as_s()),
            Some("Sub Pop")
        );
    }

    #[test]
    fn invalid_blob_is_an_error() {
        let res = serde_json::from_str::<AttributeValue>(r#"{"B": "not base64!"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn escaped_blobs() {
        let value =
            serde_json::from_str::<AttributeValue>(r#"{"B": "AAE\/"}"#).expect("valid blob");
        assert_eq!(value, AttributeValue::B(Blob::new(vec![0_u8, 1, 63])));
        let value = serde_json::from_str::<AttributeValue>(r#"{"BS": ["AAE\/", "AAE="]}"#)
            .expect("valid blob set");
        assert_eq!(
            value,
            AttributeValue::Bs(vec![
                Blob::new(vec![0_u8, 1, 63]),
                Blob::new(vec![0_u8, 1])
            ])
        );
        let value = serde_json::from_value::<AttributeValue>(serde_json::json!({"B": "AAE="}))
            .expect("owned strings");
        assert_eq!(value, AttributeValue::B(Blob::new(vec![0_u8, 1])));
    }
}
