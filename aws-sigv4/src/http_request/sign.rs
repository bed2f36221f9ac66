/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::canonical_request::{CanonicalRequest, StringToSign, HMAC_256};
use super::{SigningError, SigningParams};
use crate::sign::{calculate_signature, generate_signing_key, sha256_hex_string};
use chrono::{DateTime, Utc};
use http::header::{HeaderName, AUTHORIZATION};
use http::{HeaderMap, HeaderValue, Method, Uri};
use std::convert::TryFrom;

/// Represents all of the information necessary to sign an HTTP request.
#[derive(Debug)]
#[non_exhaustive]
pub struct SignableRequest<'a> {
    method: &'a Method,
    uri: &'a Uri,
    headers: &'a HeaderMap<HeaderValue>,
    body: SignableBody<'a>,
}

impl<'a> SignableRequest<'a> {
    pub fn new(
        method: &'a Method,
        uri: &'a Uri,
        headers: &'a HeaderMap<HeaderValue>,
        body: SignableBody<'a>,
    ) -> Self {
        Self {
            method,
            uri,
            headers,
            body,
        }
    }

    pub fn uri(&self) -> &Uri {
        self.uri
    }

    pub fn method(&self) -> &Method {
        self.method
    }

    pub fn headers(&self) -> &HeaderMap<HeaderValue> {
        self.headers
    }

    pub fn body(&self) -> &SignableBody<'_> {
        &self.body
    }
}

impl<'a, B> From<&'a http::Request<B>> for SignableRequest<'a>
where
    B: 'a,
    B: AsRef<[u8]>,
{
    fn from(request: &'a http::Request<B>) -> SignableRequest<'a> {
        SignableRequest::new(
            request.method(),
            request.uri(),
            request.headers(),
            SignableBody::Bytes(request.body().as_ref()),
        )
    }
}

/// A signable HTTP request body
#[derive(Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum SignableBody<'a> {
    /// A body composed of a slice of bytes
    Bytes(&'a [u8]),

    /// An unsigned payload, for bodies whose contents are not known when signing
    UnsignedPayload,

    /// A precomputed body checksum: lowercase hex SHA-256 of the body
    Precomputed(String),
}

/// Headers to add to a request so that it carries its signature
#[derive(Debug)]
pub struct SigningInstructions {
    headers: HeaderMap<HeaderValue>,
}

impl SigningInstructions {
    pub fn headers(&self) -> &HeaderMap<HeaderValue> {
        &self.headers
    }

    pub fn apply_to_request<B>(self, request: &mut http::Request<B>) {
        let mut last_name: Option<HeaderName> = None;
        for (name, value) in self.headers.into_iter() {
            // `None` names continue the previous header
            let name = match name {
                Some(name) => {
                    last_name = Some(name.clone());
                    name
                }
                None => match &last_name {
                    Some(name) => name.clone(),
                    None => continue,
                },
            };
            request.headers_mut().insert(name, value);
        }
    }
}

/// Produces a signature for `request` and the instructions to apply it
///
/// Returns the signing instructions together with the hex-encoded signature.
pub fn sign(
    request: SignableRequest<'_>,
    params: &SigningParams<'_>,
) -> Result<(SigningInstructions, String), SigningError> {
    let date: DateTime<Utc> = params.date_time.into();
    let creq = CanonicalRequest::from(&request, &params.settings, &date, params.security_token)?;
    let encoded_creq = sha256_hex_string(creq.to_string().as_bytes());
    let sts = StringToSign::new(date, params.region, params.service_name, &encoded_creq);
    let string_to_sign = sts.to_string();
    let signing_key =
        generate_signing_key(params.secret_key, &date, params.region, params.service_name);
    let signature = calculate_signature(signing_key, string_to_sign.as_bytes());
    tracing::trace!(canonical_request = %creq, string_to_sign = %string_to_sign, "calculated signing parameters");

    let mut headers = creq.headers;
    let authorization = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        HMAC_256,
        params.access_key,
        sts.scope,
        creq.signed_headers,
        signature
    );
    let mut authorization = HeaderValue::try_from(authorization)?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);
    Ok((SigningInstructions { headers }, signature))
}

#[cfg(test)]
mod tests {
    use crate::date_fmt::parse_date_time;
    use crate::http_request::{
        sign, PayloadChecksumKind, SignableRequest, SigningParams, SigningSettings,
    };
    use pretty_assertions::assert_eq;
    use std::time::SystemTime;

    fn test_time() -> SystemTime {
        parse_date_time("20150830T123600Z").unwrap().into()
    }

    fn params(settings: SigningSettings) -> SigningParams<'static> {
        SigningParams::builder()
            .access_key("AKIDEXAMPLE")
            .secret_key("wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
            .region("us-east-1")
            .service_name("service")
            .date_time(test_time())
            .settings(settings)
            .build()
            .unwrap()
    }

    #[test]
    fn get_vanilla() {
        let mut req = http::Request::builder()
            .uri("https://example.amazonaws.com/")
            .body("")
            .unwrap();
        let (instructions, signature) =
            sign(SignableRequest::from(&req), &params(SigningSettings::default())).unwrap();
        assert_eq!(
            signature,
            "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
        instructions.apply_to_request(&mut req);
        assert_eq!(req.headers()["x-amz-date"], "20150830T123600Z");
        assert_eq!(
            req.headers()["authorization"],
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
             SignedHeaders=host;x-amz-date, \
             Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
    }

    #[test]
    fn get_vanilla_query_order() {
        let req = http::Request::builder()
            .uri("https://example.amazonaws.com/?Param2=value2&Param1=value1")
            .body("")
            .unwrap();
        let (_, signature) =
            sign(SignableRequest::from(&req), &params(SigningSettings::default())).unwrap();
        assert_eq!(
            signature,
            "b97d918cfa904a5beff61c982a1b6f458b799221646efd99d3219ec94cdf2500"
        );
    }

    #[test]
    fn security_token_and_payload_hash_are_added() {
        let mut req = http::Request::builder()
            .method("POST")
            .uri("https://example.amazonaws.com/")
            .body("hello")
            .unwrap();
        let mut builder = SigningParams::builder()
            .access_key("AKIDEXAMPLE")
            .secret_key("secret")
            .region("us-east-1")
            .service_name("glacier")
            .date_time(test_time())
            .settings(SigningSettings {
                payload_checksum_kind: PayloadChecksumKind::XAmzSha256,
                ..Default::default()
            });
        builder.set_security_token(Some("session-token"));
        let params = builder.build().unwrap();
        let (instructions, _) = sign(SignableRequest::from(&req), &params).unwrap();
        instructions.apply_to_request(&mut req);
        assert_eq!(req.headers()["x-amz-security-token"], "session-token");
        assert_eq!(
            req.headers()["x-amz-content-sha256"],
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        let auth = req.headers()["authorization"].to_str().unwrap();
        assert!(auth.contains(
            "SignedHeaders=host;x-amz-content-sha256;x-amz-date;x-amz-security-token"
        ));
    }

    #[test]
    fn missing_params_are_reported() {
        let err = SigningParams::builder()
            .access_key("AKIDEXAMPLE")
            .region("us-east-1")
            .service_name("service")
            .build()
            .expect_err("secret key is missing");
        assert_eq!(
            err.to_string(),
            "signing parameters were incomplete: secret key is required"
        );
    }
}
