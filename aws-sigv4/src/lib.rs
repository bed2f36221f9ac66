/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Provides functions for calculating SigV4 signing keys and signatures, plus utilities for
//! signing HTTP requests.

pub mod date_fmt;
pub mod http_request;
pub mod sign;

pub use http_request::SigningError;
