/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic error parsing for awsJson1_0 and restJson1 error responses

use crate::request_id::request_id;
use bytes::Bytes;
use serde_json::Value;

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// Strip the namespace and the URI suffix from an error code
///
/// `aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/` becomes `FooError`.
pub fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.rfind('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn body_field<'a>(body: &'a Value, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .find_map(|name| body.get(*name).and_then(|value| value.as_str()))
}

/// Parse the `code`, `message` and request id of a JSON error response
///
/// The code comes from the `x-amzn-errortype` header when present, otherwise from the `__type`
/// or `code` body fields. An empty body is treated as `{}`.
pub fn parse_generic_error(
    response: &http::Response<Bytes>,
) -> Result<smithy_types::Error, serde_json::Error> {
    let body: Value = if response.body().iter().all(u8::is_ascii_whitespace) {
        Value::Object(Default::default())
    } else {
        serde_json::from_slice(response.body())?
    };
    let header_code = response
        .headers()
        .get(ERROR_TYPE_HEADER)
        .and_then(|value| value.to_str().ok());
    let code = header_code.or_else(|| body_field(&body, &["__type", "code"]));

    let mut err_builder = smithy_types::Error::builder();
    if let Some(code) = code.map(sanitize_error_code) {
        err_builder.code(code);
    }
    if let Some(message) = body_field(&body, &["message", "Message", "errorMessage"]) {
        err_builder.message(message);
    }
    if let Some(request_id) = request_id(response) {
        err_builder.request_id(request_id);
    }
    Ok(err_builder.build())
}
