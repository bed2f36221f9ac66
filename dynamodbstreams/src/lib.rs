/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! <fullname>Amazon DynamoDB Streams</fullname>
//!
//! Amazon DynamoDB Streams provides API actions for accessing streams and processing stream
//! records. Requests use the `awsJson1_0` protocol.

#[cfg(feature = "client")]
mod client;
pub mod config;
mod deserializer;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;
mod serializer;

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) static API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("dynamodbstreams", env!("CARGO_PKG_VERSION"));

pub use aws_auth::Credentials;
pub use aws_types::region::Region;
#[cfg(feature = "client")]
pub use client::{fluent_builders, Client};
pub use config::Config;
pub use error::Error;
#[cfg(feature = "client")]
pub use aws_hyper::SdkError;
