/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values as Smithy
//! [httpLabel](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httplabel-trait)

use crate::query::{BASE_SET, GREEDY};
use percent_encoding::utf8_percent_encode;
use smithy_types::instant::Format;
use smithy_types::Instant;

/// Percent-encode a path segment. Greedy labels (`{key+}`) keep their `/` separators.
pub fn fmt_string<T: AsRef<str>>(t: T, greedy: bool) -> String {
    let uri_set = if greedy { GREEDY } else { BASE_SET };
    utf8_percent_encode(t.as_ref(), uri_set).to_string()
}

pub fn fmt_timestamp(t: &Instant, format: Format) -> String {
    crate::query::fmt_string(t.fmt(format))
}

#[cfg(test)]
mod test {
    use crate::label::fmt_string;

    #[test]
    fn greedy_params() {
        assert_eq!(fmt_string("a/b", false), "a%2Fb");
        assert_eq!(fmt_string("a/b", true), "a/b");
    }

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(fmt_string("my-vault_1.archive~", false), "my-vault_1.archive~");
        assert_eq!(fmt_string("vault name", false), "vault%20name");
    }
}
