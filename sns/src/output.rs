/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::Topic;

/// Response from CreateTopic action.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateTopicOutput {
    pub topic_arn: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteTopicOutput {}

/// Response for ListTopics action.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListTopicsOutput {
    pub topics: Option<Vec<Topic>>,
    /// Token to pass along to the next `ListTopics` request. Only set when there are more
    /// topics to list.
    pub next_token: Option<String>,
}

/// Response for Publish action.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PublishOutput {
    /// Unique identifier assigned to the published message. At most 100 characters.
    pub message_id: Option<String>,
    /// Only returned for FIFO topics
    pub sequence_number: Option<String>,
}

/// Response for Subscribe action.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubscribeOutput {
    /// `pending confirmation` until the endpoint confirms, unless `ReturnSubscriptionArn` was
    /// set
    pub subscription_arn: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnsubscribeOutput {}
