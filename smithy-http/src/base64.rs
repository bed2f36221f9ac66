/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Standard (padded) base64 as used for blob members on the wire

pub use ::base64::DecodeError;

pub fn encode<T: AsRef<[u8]>>(inp: T) -> String {
    ::base64::encode(inp)
}

pub fn decode<T: AsRef<[u8]>>(inp: T) -> Result<Vec<u8>, DecodeError> {
    ::base64::decode(inp)
}

#[cfg(test)]
mod test {
    use crate::base64::{decode, encode};
    use proptest::proptest;

    #[test]
    fn test_base64() {
        assert_eq!(encode("abc"), "YWJj");
        assert_eq!(encode("anything you want."), "YW55dGhpbmcgeW91IHdhbnQu");
        assert_eq!(encode("anything you want"), "YW55dGhpbmcgeW91IHdhbnQ=");
        assert_eq!(encode("anything you wan"), "YW55dGhpbmcgeW91IHdhbg==");
    }

    #[test]
    fn test_base64_utf8() {
        let decoded = "ユニコードとはか？";
        let encoded = "44Om44OL44Kz44O844OJ44Go44Gv44GL77yf";
        assert_eq!(encode(decoded), encoded);
        assert_eq!(decode(encoded).unwrap(), decoded.as_bytes());
    }

    #[test]
    fn invalid_input() {
        decode("not base64!").expect_err("invalid characters");
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(input: Vec<u8>) {
            assert_eq!(decode(encode(&input)).unwrap(), input);
        }
    }
}
