/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Signature Authentication Package
//!
//! SigV4 is the only algorithm the service clients need; others could be added as features.

pub mod middleware;
pub mod signer;
