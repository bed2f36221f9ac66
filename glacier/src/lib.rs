/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! <fullname>Amazon S3 Glacier</fullname>
//!
//! Amazon S3 Glacier is a storage solution for "cold data": infrequently accessed data kept for
//! archival and backup. Requests use the `restJson1` protocol, version `2012-06-01`.
//!
//! Archives are uploaded with a SHA-256 [tree hash](tree_hash::tree_hash) of their contents. The
//! client computes it when no checksum is supplied.

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
pub mod tree_hash;

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) static API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("glacier", env!("CARGO_PKG_VERSION"));

pub use aws_auth::Credentials;
pub use aws_types::region::Region;
pub use bytes::Bytes;
#[cfg(feature = "client")]
pub use client::{fluent_builders, Client};
pub use config::Config;
pub use error::Error;
#[cfg(feature = "client")]
pub use aws_hyper::SdkError;
