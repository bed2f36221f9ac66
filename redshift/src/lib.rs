/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! <fullname>Amazon Redshift</fullname>
//!
//! Amazon Redshift manages all the work of setting up, operating, and scaling a data warehouse:
//! provisioning capacity, monitoring and backing up the cluster, and applying patches and
//! upgrades to the Amazon Redshift engine. Requests use the `awsQuery` protocol, version
//! `2012-12-01`.

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
    aws_http::user_agent::ApiMetadata::new("redshift", env!("CARGO_PKG_VERSION"));

pub use aws_auth::Credentials;
pub use aws_types::region::Region;
#[cfg(feature = "client")]
pub use client::{fluent_builders, Client};
pub use config::Config;
pub use error::Error;
#[cfg(feature = "client")]
pub use aws_hyper::SdkError;
