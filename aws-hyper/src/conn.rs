/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::test_connection::TestConnection;
use crate::BoxError;
use hyper::client::{HttpConnector, ResponseFuture};
use hyper_tls::HttpsConnector;
use smithy_http::body::SdkBody;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::future::{Future, Ready};
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::Service;

type BoxedResponseFuture =
    Pin<Box<dyn Future<Output = Result<http::Response<hyper::Body>, BoxError>> + Send>>;

/// A good base connection type for most use cases
///
/// This supports three options:
/// 1. HTTPS
/// 2. A `TestConnection`
/// 3. Any implementation of the `HttpService` trait
///
/// This is designed to be used with [`aws_hyper::Client`](crate::Client) as a connector.
#[derive(Clone)]
pub struct Standard(Connector);

impl Standard {
    /// An https connection
    pub fn https() -> Self {
        let https = HttpsConnector::new();
        Self(Connector::Https(
            hyper::Client::builder().build::<_, SdkBody>(https),
        ))
    }

    /// A connection based on the provided `impl HttpService`
    ///
    /// Generally, [`Standard::https()`](Standard::https) should be used. This constructor is
    /// intended to support using things like [`TestConnection`](crate::test_connection::TestConnection)
    /// or alternative http implementations.
    pub fn new(connector: impl HttpService + 'static) -> Self {
        Self(Connector::Dyn(Box::new(connector)))
    }
}

impl Debug for Standard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let kind = match &self.0 {
            Connector::Https(_) => "https",
            Connector::Test(_) => "test",
            Connector::Dyn(_) => "dyn",
        };
        f.debug_tuple("Standard").field(&kind).finish()
    }
}

impl From<TestConnection<hyper::Body>> for Standard {
    fn from(conn: TestConnection<hyper::Body>) -> Self {
        Self(Connector::Test(conn))
    }
}

/// An Http connection type for most use cases
///
/// This supports three options:
/// 1. HTTPS
/// 2. A `TestConnection`
/// 3. Any implementation of the `HttpService` trait
#[derive(Clone)]
enum Connector {
    Https(hyper::Client<HttpsConnector<HttpConnector>, SdkBody>),
    Test(TestConnection<hyper::Body>),
    Dyn(Box<dyn HttpService>),
}

impl Clone for Box<dyn HttpService> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

pub trait HttpService: Send + Sync {
    /// Return whether this service is ready to accept a request
    ///
    /// See [`Service::poll_ready`](tower::Service::poll_ready)
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), BoxError>>;

    /// Call this service and return a response
    ///
    /// See [`Service::call`](tower::Service::call)
    fn call(&mut self, req: http::Request<SdkBody>) -> BoxedResponseFuture;

    /// Return a Boxed-clone of this service
    ///
    /// `aws_hyper::Client` will clone the inner service for each request so this should be a cheap
    /// clone operation.
    fn clone_box(&self) -> Box<dyn HttpService>;
}

/// Reverse implementation: If you have a correctly shaped tower service, it _is_ an `HttpService`
///
/// This is to facilitate ease of use for people using `Standard::Dyn`
impl<S> HttpService for S
where
    S: Service<http::Request<SdkBody>, Response = http::Response<hyper::Body>>
        + Send
        + Sync
        + Clone
        + 'static,
    S::Error: Into<BoxError> + Send + Sync + 'static,
    S::Future: Send + 'static,
{
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), BoxError>> {
        Service::poll_ready(self, cx).map_err(|err| err.into())
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> BoxedResponseFuture {
        let fut = Service::call(self, req);
        let fut = async move { fut.await.map_err(|err| err.into()) };
        Box::pin(fut)
    }

    fn clone_box(&self) -> Box<dyn HttpService> {
        Box::new(self.clone())
    }
}

impl Service<http::Request<SdkBody>> for Standard {
    type Response = http::Response<hyper::Body>;
    type Error = BoxError;
    type Future = StandardFuture;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        match &mut self.0 {
            Connector::Https(https) => Service::poll_ready(https, cx).map_err(|err| err.into()),
            Connector::Dyn(conn) => conn.poll_ready(cx),
            Connector::Test(_) => Poll::Ready(Ok(())),
        }
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> Self::Future {
        match &mut self.0 {
            Connector::Https(https) => StandardFuture::Https(Service::call(https, req)),
            Connector::Dyn(conn) => StandardFuture::Dyn(conn.call(req)),
            Connector::Test(conn) => StandardFuture::TestConn(Service::call(conn, req)),
        }
    }
}

/// Future returned by `Standard` when used as a tower::Service
#[pin_project::pin_project(project = FutProj)]
pub enum StandardFuture {
    Https(#[pin] ResponseFuture),
    TestConn(#[pin] Ready<Result<http::Response<hyper::Body>, BoxError>>),
    Dyn(#[pin] BoxedResponseFuture),
}

impl Future for StandardFuture {
    type Output = Result<http::Response<hyper::Body>, BoxError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            FutProj::TestConn(ready_fut) => ready_fut.poll(cx),
            FutProj::Https(fut) => fut.poll(cx).map_err(|err| err.into()),
            FutProj::Dyn(dyn_fut) => dyn_fut.poll(cx),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::conn::Standard;
    use crate::test_connection::TestConnection;
    use smithy_http::body::SdkBody;
    use tower::{Service, ServiceExt};

    #[tokio::test]
    async fn test_connection_through_standard() {
        let conn = TestConnection::new(vec![(
            http::Request::new(SdkBody::from("request")),
            http::Response::builder()
                .status(200)
                .body(hyper::Body::from("response"))
                .unwrap(),
        )]);
        let mut standard = Standard::from(conn.clone());
        let resp = standard
            .ready()
            .await
            .expect("always ready")
            .call(http::Request::new(SdkBody::from("request")))
            .await
            .expect("canned response");
        assert_eq!(resp.status(), 200);
        assert_eq!(conn.requests().len(), 1);
        assert_eq!(format!("{:?}", standard), "Standard(\"test\")");
    }

    #[tokio::test]
    async fn dyn_connections_are_boxed() {
        let conn: TestConnection<&'static str> = TestConnection::new(vec![]);
        let mut standard = Standard::new(conn);
        let err = standard
            .call(http::Request::new(SdkBody::empty()))
            .await
            .expect_err("no canned responses");
        assert_eq!(err.to_string(), "No more data");
    }
}
