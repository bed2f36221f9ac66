/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic error parsing for awsQuery error responses
//!
//! ```xml
//! <ErrorResponse>
//!    <Error>
//!       <Type>Sender</Type>
//!       <Code>InvalidParameterValue</Code>
//!       <Message>Invalid parameter</Message>
//!    </Error>
//!    <RequestId>42d59b56-7407-4c4a-be0f-4c88daeea257</RequestId>
//! </ErrorResponse>
//! ```

use smithy_xml::decode::{Document, XmlError};

/// Parse the `code`, `message` and request id out of an awsQuery error body
pub fn parse_generic_error(body: &[u8]) -> Result<smithy_types::Error, XmlError> {
    let body = std::str::from_utf8(body).map_err(|_| XmlError::custom("invalid utf-8"))?;
    let root = Document::parse(body)?;
    let error = match root.name() {
        "ErrorResponse" => root.expect_child("Error")?,
        // some services wrap the error list: <Response><Errors><Error>
        "Response" => root.expect_child("Errors")?.expect_child("Error")?,
        other => {
            return Err(XmlError::custom(format!(
                "expected <ErrorResponse>, found <{}>",
                other
            )))
        }
    };
    let mut err_builder = smithy_types::Error::builder();
    if let Some(code) = error.child_text("Code") {
        err_builder.code(code);
    }
    if let Some(message) = error.child_text("Message") {
        err_builder.message(message);
    }
    if let Some(request_id) = root
        .child_text("RequestId")
        .or_else(|| root.child_text("RequestID"))
    {
        err_builder.request_id(request_id);
    }
    Ok(err_builder.build())
}

#[cfg(test)]
mod test {
    use super::parse_generic_error;

    #[test]
    fn parse_error_response() {
        let xml = br#"<ErrorResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
            <Error>
                <Type>Sender</Type>
                <Code>NotFound</Code>
                <Message>Topic does not exist</Message>
            </Error>
            <RequestId>7a62c49f-347e-4fc4-9331-6e8e7a96aa73</RequestId>
        </ErrorResponse>"#;
        let err = parse_generic_error(xml).expect("valid error response");
        assert_eq!(err.code(), Some("NotFound"));
        assert_eq!(err.message(), Some("Topic does not exist"));
        assert_eq!(
            err.request_id(),
            Some("7a62c49f-347e-4fc4-9331-6e8e7a96aa73")
        );
    }

    #[test]
    fn wrapped_errors() {
        let xml = br#"<Response><Errors><Error><Code>Throttling</Code></Error></Errors>
            <RequestID>foo-id</RequestID></Response>"#;
        let err = parse_generic_error(xml).expect("valid error response");
        assert_eq!(err.code(), Some("Throttling"));
        assert_eq!(err.message(), None);
        assert_eq!(err.request_id(), Some("foo-id"));
    }

    #[test]
    fn not_an_error_response() {
        parse_generic_error(b"<ListTopicsResponse/>").expect_err("wrong root");
        parse_generic_error(b"not xml at all <").expect_err("invalid xml");
    }
}
