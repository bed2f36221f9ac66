/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! SHA-256 tree hash used by Glacier to checksum archive payloads
//!
//! The payload is split into 1 MiB chunks. Each chunk is hashed, then adjacent digests are
//! concatenated and hashed again, level by level, until a single root digest remains. A digest
//! without a sibling moves up a level unchanged.

use sha2::digest::Output;
use sha2::{Digest, Sha256};

const CHUNK_SIZE: usize = 1024 * 1024;

/// Compute the hex encoded tree hash of `data`
pub fn tree_hash(data: &[u8]) -> String {
    let mut level: Vec<Output<Sha256>> = data.chunks(CHUNK_SIZE).map(Sha256::digest).collect();
    if level.is_empty() {
        level.push(Sha256::digest(&[]));
    }
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => {
                    let mut hasher = Sha256::new();
                    hasher.update(left);
                    hasher.update(right);
                    hasher.finalize()
                }
                [single] => single.clone(),
                _ => unreachable!("chunks(2) yields one or two digests"),
            })
            .collect();
    }
    hex::encode(&level[0])
}
