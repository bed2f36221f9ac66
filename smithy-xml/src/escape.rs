/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;

const ESCAPES: &[char] = &['&', '\'', '\"', '<', '>'];

/// Escape the five predefined XML entities
pub fn escape(s: &str) -> Cow<str> {
    let mut remaining = s;
    if !s.contains(ESCAPES) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    while let Some(idx) = remaining.find(ESCAPES) {
        out.push_str(&remaining[..idx]);
        remaining = &remaining[idx..];
        let mut idxs = remaining.char_indices();
        let (_, chr) = idxs.next().expect("must not be none");
        match chr {
            '>' => out.push_str("&gt;"),
            '<' => out.push_str("&lt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            _ => unreachable!("only escape characters match"),
        }
        remaining = &remaining[chr.len_utf8()..];
    }
    out.push_str(remaining);
    Cow::Owned(out)
}

#[cfg(test)]
mod test {
    use crate::escape::escape;
    use crate::unescape::unescape;
    use proptest::proptest;

    #[test]
    fn escape_basic() {
        let inp = "<helo>&\"'";
        assert_eq!(escape(inp), "&lt;helo&gt;&amp;&quot;&apos;");
    }

    #[test]
    fn escape_eol_encoding_sep() {
        let test_cases = vec![
            ("CiAK", "CiAK"),
            ("a<b", "a&lt;b"),
            ("&&", "&amp;&amp;"),
            ("ユニ<コ>ード", "ユニ&lt;コ&gt;ード"),
        ];
        for (raw, encoded) in test_cases {
            assert_eq!(escape(raw), encoded);
        }
    }

    proptest! {
        #[test]
        fn no_panics(s: String) {
            let escaped = escape(&s);
            let unescaped = unescape(&escaped).expect("escaped text is valid");
            assert_eq!(unescaped, s);
        }
    }
}
