/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::Credentials;
use aws_endpoint::{set_endpoint_resolver, DefaultAwsEndpointResolver};
use aws_http::user_agent::AwsUserAgent;
use aws_http::AwsErrorRetryPolicy;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{Client, RetryConfig, SdkError};
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::region::Region;
use aws_types::SigningService;
use bytes::Bytes;
use http::header::{AUTHORIZATION, HOST, USER_AGENT};
use http::{Response, Uri};
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::Operation;
use smithy_http::response::ParseStrictResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::convert::Infallible;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

#[derive(Debug)]
struct OperationError(u16);

impl Display for OperationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "operation failed with status {}", self.0)
    }
}

impl std::error::Error for OperationError {}

impl ProvideErrorKind for OperationError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        None
    }
}

#[derive(Clone)]
struct TestOperationParser;

impl ParseStrictResponse for TestOperationParser {
    type Output = Result<String, OperationError>;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            Ok("Hello!".to_string())
        } else {
            Err(OperationError(response.status().as_u16()))
        }
    }
}

fn test_operation() -> Operation<TestOperationParser, AwsErrorRetryPolicy> {
    let req = operation::Request::new(http::Request::new(SdkBody::from("request body")))
        .augment(|req, conf| {
            set_endpoint_resolver(
                conf,
                Arc::new(DefaultAwsEndpointResolver::for_service("test-service")),
            );
            aws_auth::set_provider(
                conf,
                Arc::new(Credentials::from_keys("access_key", "secret_key", None)),
            );
            conf.insert(Region::new("test-region"));
            conf.insert(SigningService::from_static("test-service"));
            conf.insert(OperationSigningConfig::default_config());
            conf.insert(UNIX_EPOCH + Duration::from_secs(1613414417));
            conf.insert(AwsUserAgent::for_tests());
            Result::<_, Infallible>::Ok(req)
        })
        .unwrap();
    Operation::new(req, TestOperationParser)
        .with_metadata(operation::Metadata::new("TestOperation", "test-service"))
        .with_retry_policy(AwsErrorRetryPolicy::new())
}

fn expected_request() -> http::Request<SdkBody> {
    http::Request::builder()
        .header(USER_AGENT, "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
        .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
        .header(HOST, "test-service.test-region.amazonaws.com")
        .header(AUTHORIZATION, "AWS4-HMAC-SHA256 Credential=access_key/20210215/test-region/test-service/aws4_request, SignedHeaders=host;x-amz-date;x-amz-user-agent, Signature=a61c1b0b04d448e7de2a987ff154452ed90906185b3b8d9083b4aa4214bac17d")
        .header("x-amz-date", "20210215T184017Z")
        .uri(Uri::from_static("https://test-service.test-region.amazonaws.com/"))
        .body(SdkBody::from("request body"))
        .unwrap()
}

#[tokio::test]
async fn e2e_test() {
    let events = vec![(
        expected_request(),
        http::Response::builder()
            .status(200)
            .body("response body")
            .unwrap(),
    )];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone());
    let resp = client.call(test_operation()).await;
    let resp = resp.expect("successful operation");
    assert_eq!(resp, "Hello!");

    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn server_errors_are_retried() {
    let failure = || {
        http::Response::builder()
            .status(500)
            .body("internal error")
            .unwrap()
    };
    let events = vec![
        (expected_request(), failure()),
        (expected_request(), failure()),
        (
            expected_request(),
            http::Response::builder().status(200).body("ok").unwrap(),
        ),
    ];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone()).with_retry_config(RetryConfig::default().with_base(|| 0_f64));
    let resp = client.call(test_operation()).await.expect("third attempt succeeds");
    assert_eq!(resp, "Hello!");
    assert_eq!(conn.requests().len(), 3);
}

#[tokio::test]
async fn retries_stop_after_max_attempts() {
    let failure = || {
        http::Response::builder()
            .status(503)
            .body("unavailable")
            .unwrap()
    };
    let conn = TestConnection::new(vec![
        (expected_request(), failure()),
        (expected_request(), failure()),
    ]);
    let client = Client::new(conn.clone()).with_retry_config(
        RetryConfig::default()
            .with_base(|| 0_f64)
            .with_max_attempts(2),
    );
    let err = client
        .call(test_operation())
        .await
        .expect_err("every attempt fails");
    match err {
        SdkError::ServiceError { err, raw } => {
            assert_eq!(err.0, 503);
            assert_eq!(raw.status(), 503);
        }
        other => panic!("expected a service error, got {}", other),
    }
    assert_eq!(conn.requests().len(), 2);
}

#[tokio::test]
async fn missing_credentials_is_a_construction_failure() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::new(conn.clone());
    let mut operation = test_operation();
    operation
        .properties_mut()
        .remove::<aws_auth::CredentialsProvider>();
    let err = client
        .call(operation)
        .await
        .expect_err("no credentials provider");
    assert!(
        matches!(err, SdkError::ConstructionFailure(_)),
        "unexpected error: {}",
        err
    );
    assert!(conn.requests().is_empty());
}
