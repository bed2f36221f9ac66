/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::header::HeaderName;
use http::Request;
use smithy_http::body::SdkBody;
use std::future::Ready;
use std::ops::Deref;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::BoxError;

type ConnectVec<B> = Vec<(http::Request<SdkBody>, http::Response<B>)>;

#[derive(Debug)]
pub struct ValidateRequest {
    pub expected: http::Request<SdkBody>,
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    /// Assert that the actual request matches the expected request
    ///
    /// Every header of the expected request must be present on the actual request unless it is
    /// listed in `ignore_headers`. Bodies are compared according to their `content-type`.
    #[cfg(feature = "test-util")]
    pub fn assert_matches(&self, ignore_headers: &[HeaderName]) {
        use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};

        let (actual, expected) = (&self.actual, &self.expected);
        let expected_headers = expected
            .headers()
            .iter()
            .filter(|(name, _)| !ignore_headers.contains(*name))
            .map(|(name, value)| {
                (
                    name.as_str(),
                    value.to_str().expect("test headers are valid strings"),
                )
            })
            .collect::<Vec<_>>();
        assert_ok(validate_headers(actual, &expected_headers));
        let media_type = expected
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .map(MediaType::from)
            .unwrap_or(MediaType::Other);
        let expected_body = std::str::from_utf8(expected.body().bytes().unwrap_or(&[]))
            .expect("expected bodies are valid utf-8");
        assert_ok(validate_body(
            actual.body().bytes().unwrap_or(&[]),
            expected_body,
            media_type,
        ));
        assert_eq!(actual.method(), expected.method());
        assert_eq!(actual.uri(), expected.uri());
    }
}

/// TestConnection for use with a [`aws_hyper::Client`](crate::Client)
///
/// A basic test connection. It will:
/// - Respond to requests with a preloaded series of responses
/// - Record requests for future examination
///
/// The generic parameter `B` is the type of the response body.
/// For more complex use cases, see [Tower Test](https://docs.rs/tower-test/0.4.0/tower_test/)
/// Usage example:
/// ```rust
/// use aws_hyper::test_connection::TestConnection;
/// use smithy_http::body::SdkBody;
/// let events = vec![(
///    http::Request::new(SdkBody::from("request body")),
///    http::Response::builder()
///        .status(200)
///        .body("response body")
///        .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// let client = aws_hyper::Client::new(conn);
/// ```
#[derive(Debug)]
pub struct TestConnection<B> {
    data: Arc<Mutex<ConnectVec<B>>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

// Need a clone impl that ignores `B`
impl<B> Clone for TestConnection<B> {
    fn clone(&self) -> Self {
        TestConnection {
            data: self.data.clone(),
            requests: self.requests.clone(),
        }
    }
}

impl<B> TestConnection<B> {
    pub fn new(mut data: ConnectVec<B>) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        self.requests.lock().unwrap()
    }

    /// Assert that every canned response was used and that each request matched
    #[cfg(feature = "test-util")]
    #[track_caller]
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers)
        }
        let remaining_requests = self.data.lock().unwrap().len();
        assert_eq!(
            remaining_requests, 0,
            "Expected {} additional requests",
            remaining_requests
        );
    }
}

impl<B: Into<hyper::Body>> tower::Service<http::Request<SdkBody>> for TestConnection<B> {
    type Response = http::Response<hyper::Body>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, actual: Request<SdkBody>) -> Self::Future {
        if let Some((expected, resp)) = self.data.lock().unwrap().pop() {
            self.requests
                .lock()
                .unwrap()
                .push(ValidateRequest { expected, actual });
            std::future::ready(Ok(resp.map(|body| body.into())))
        } else {
            std::future::ready(Err("No more data".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_connection::TestConnection;
    use smithy_http::body::SdkBody;
    use tower::BoxError;

    /// Validate that the `TestConnection` meets the required trait bounds to be used with a aws-hyper service
    #[test]
    fn meets_trait_bounds() {
        fn check() -> impl tower::Service<
            http::Request<SdkBody>,
            Response = http::Response<hyper::Body>,
            Error = BoxError,
            Future = impl Send,
        > + Clone {
            TestConnection::<String>::new(vec![])
        }
        let _ = check();
    }

    #[cfg(feature = "test-util")]
    #[test]
    fn matching_requests_pass() {
        use tower::Service;
        let expected = http::Request::builder()
            .method("POST")
            .uri("https://sns.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(SdkBody::from("Action=ListTopics&Version=2010-03-31"))
            .unwrap();
        let mut conn = TestConnection::new(vec![(
            expected,
            http::Response::new("<ListTopicsResponse/>"),
        )]);
        let actual = http::Request::builder()
            .method("POST")
            .uri("https://sns.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-www-form-urlencoded")
            .header("authorization", "ignored")
            .body(SdkBody::from("Version=2010-03-31&Action=ListTopics"))
            .unwrap();
        let _ = conn.call(actual);
        conn.assert_requests_match(&[]);
    }
}
