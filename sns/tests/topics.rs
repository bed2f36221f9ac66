/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::conn::Standard;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::RetryConfig;
use http::Uri;
use smithy_http::body::SdkBody;
use sns::input::ListTopicsInput;
use sns::model::MessageAttributeValue;
use sns::{Client, Config, Credentials, Region, SdkError};
use std::time::{Duration, UNIX_EPOCH};

const TOPIC_ARN: &str = "arn:aws:sns:us-east-1:123456789012:orders";

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("access_key", "secret_key", None))
        .build()
}

fn expected_request(body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .uri(Uri::from_static("https://sns.us-east-1.amazonaws.com/"))
        .header("content-type", "application/x-www-form-urlencoded")
        .body(SdkBody::from(body))
        .unwrap()
}

fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder()
        .status(status)
        .header("content-type", "text/xml")
        .body(body)
        .unwrap()
}

#[tokio::test]
async fn list_topics_is_signed_with_session_token() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri(Uri::from_static("https://sns.us-west-2.amazonaws.com/"))
            .header("content-type", "application/x-www-form-urlencoded")
            .header("user-agent", "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
            .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
            .header("x-amz-date", "20210215T184017Z")
            .header("x-amz-security-token", "session_token")
            .header("authorization", "AWS4-HMAC-SHA256 Credential=access_key/20210215/us-west-2/sns/aws4_request, SignedHeaders=content-type;host;x-amz-date;x-amz-security-token;x-amz-user-agent, Signature=271ef335767a91b7e250e6f434cb29f63722171957ea1173035514a8f56e8b86")
            .body(SdkBody::from("Action=ListTopics&Version=2010-03-31"))
            .unwrap(),
        response(
            200,
            r#"<ListTopicsResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <ListTopicsResult>
    <Topics>
      <member><TopicArn>arn:aws:sns:us-west-2:123456789012:orders</TopicArn></member>
    </Topics>
  </ListTopicsResult>
  <ResponseMetadata><RequestId>3f1478c7-33a9-11df-9540-99d0768312d3</RequestId></ResponseMetadata>
</ListTopicsResponse>"#,
        ),
    )]);
    let conf = Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys(
            "access_key",
            "secret_key",
            Some("session_token".to_string()),
        ))
        .build();
    let client = aws_hyper::Client::new(conn.clone());
    let mut op = ListTopicsInput::builder()
        .build()
        .expect("valid input")
        .make_operation(&conf)
        .expect("valid operation");
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1613414417));
    op.properties_mut().insert(AwsUserAgent::for_tests());

    let output = client.call(op).await.expect("success");
    assert_eq!(
        output.topics.unwrap()[0].topic_arn.as_deref(),
        Some("arn:aws:sns:us-west-2:123456789012:orders")
    );
    assert_eq!(output.next_token, None);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn subscribe_then_publish() {
    let conn = TestConnection::new(vec![
        (
            expected_request(
                "Action=Subscribe&Version=2010-03-31\
                 &TopicArn=arn%3Aaws%3Asns%3Aus-east-1%3A123456789012%3Aorders\
                 &Protocol=email&Endpoint=someone%40example.com",
            ),
            response(
                200,
                "<SubscribeResponse><SubscribeResult>\
                 <SubscriptionArn>pending confirmation</SubscriptionArn>\
                 </SubscribeResult></SubscribeResponse>",
            ),
        ),
        (
            expected_request(
                "Action=Publish&Version=2010-03-31\
                 &TopicArn=arn%3Aaws%3Asns%3Aus-east-1%3A123456789012%3Aorders\
                 &Message=hello%20sns%21&Subject=greetings\
                 &MessageAttributes.entry.1.Name=origin\
                 &MessageAttributes.entry.1.Value.DataType=String\
                 &MessageAttributes.entry.1.Value.StringValue=tests",
            ),
            response(
                200,
                "<PublishResponse><PublishResult>\
                 <MessageId>567910cd-659e-55d4-8ccb-5aaf14679dc0</MessageId>\
                 </PublishResult></PublishResponse>",
            ),
        ),
    ]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let subscription = client
        .subscribe()
        .topic_arn(TOPIC_ARN)
        .protocol("email")
        .endpoint("someone@example.com")
        .send()
        .await
        .expect("subscribed");
    assert_eq!(
        subscription.subscription_arn.as_deref(),
        Some("pending confirmation")
    );
    let published = client
        .publish()
        .topic_arn(TOPIC_ARN)
        .message("hello sns!")
        .subject("greetings")
        .message_attributes("origin", MessageAttributeValue::string("tests"))
        .send()
        .await
        .expect("published");
    assert_eq!(
        published.message_id.as_deref(),
        Some("567910cd-659e-55d4-8ccb-5aaf14679dc0")
    );
    assert_eq!(conn.requests().len(), 2);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn internal_errors_are_retried() {
    let delete = || {
        expected_request(
            "Action=DeleteTopic&Version=2010-03-31\
             &TopicArn=arn%3Aaws%3Asns%3Aus-east-1%3A123456789012%3Aorders",
        )
    };
    let conn = TestConnection::new(vec![
        (
            delete(),
            response(
                500,
                "<ErrorResponse><Error><Type>Receiver</Type><Code>InternalError</Code>\
                 <Message>internal</Message></Error><RequestId>1</RequestId></ErrorResponse>",
            ),
        ),
        (
            delete(),
            response(
                200,
                "<DeleteTopicResponse><ResponseMetadata><RequestId>2</RequestId></ResponseMetadata></DeleteTopicResponse>",
            ),
        ),
    ]);
    let hyper_client = aws_hyper::Client::new(Standard::new(conn.clone()))
        .with_retry_config(RetryConfig::default().with_base(|| 0_f64));
    let client = Client::from_parts(hyper_client, config());
    client
        .delete_topic()
        .topic_arn(TOPIC_ARN)
        .send()
        .await
        .expect("retried");
    assert_eq!(conn.requests().len(), 2);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn modeled_errors_are_not_retried() {
    let conn = TestConnection::new(vec![(
        expected_request("Action=CreateTopic&Version=2010-03-31&Name=one-too-many"),
        response(
            403,
            "<ErrorResponse><Error><Type>Sender</Type><Code>TopicLimitExceeded</Code>\
             <Message>Topic limit exceeded</Message></Error><RequestId>3</RequestId></ErrorResponse>",
        ),
    )]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let err = client
        .create_topic()
        .name("one-too-many")
        .send()
        .await
        .expect_err("limit exceeded");
    match err {
        SdkError::ServiceError { err, .. } => {
            assert!(err.is_topic_limit_exceeded_exception());
            assert_eq!(err.request_id(), Some("3"));
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(conn.requests().len(), 1);
}

#[tokio::test]
async fn missing_required_members_never_hit_the_network() {
    let conn: TestConnection<&'static str> = TestConnection::new(vec![]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let err = client
        .unsubscribe()
        .send()
        .await
        .expect_err("subscription arn is required");
    assert!(matches!(err, SdkError::ConstructionFailure(_)));
    assert!(err.to_string().contains("subscription_arn"));
    assert!(conn.requests().is_empty());
}
