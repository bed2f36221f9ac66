/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! XML support for AWS Query responses
pub mod decode;
mod escape;
mod unescape;

pub use escape::escape;
pub use unescape::unescape;
