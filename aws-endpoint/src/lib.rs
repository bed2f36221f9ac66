/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::{Region, SigningRegion};
use aws_types::SigningService;
use http::uri::{Authority, PathAndQuery, Scheme};
use http::Uri;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Endpoint to connect to an AWS Service
///
/// An `AwsEndpoint` captures all necessary information needed to connect to an AWS service, including:
/// - The URI of the endpoint (needed to actually send the request)
/// - The name of the service (needed downstream for signing)
/// - The signing region (which may differ from the actual region)
#[derive(Clone, Debug)]
pub struct AwsEndpoint {
    uri: Uri,
    credential_scope: CredentialScope,
}

impl AwsEndpoint {
    pub fn new(uri: Uri, credential_scope: CredentialScope) -> Self {
        AwsEndpoint {
            uri,
            credential_scope,
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn credential_scope(&self) -> &CredentialScope {
        &self.credential_scope
    }

    /// Point `uri` at this endpoint
    ///
    /// Scheme and authority come from the endpoint. The request's path and query are kept,
    /// behind any path prefix the endpoint carries.
    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), http::Error> {
        let prefix = self.uri.path().trim_end_matches('/');
        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .filter(|pq| !pq.is_empty())
            .unwrap_or("/");
        let path_and_query = PathAndQuery::from_str(&format!("{}{}", prefix, path_and_query))?;
        *uri = Uri::builder()
            .scheme(self.uri.scheme().cloned().unwrap_or(Scheme::HTTPS))
            .authority(
                self.uri
                    .authority()
                    .cloned()
                    .unwrap_or_else(|| Authority::from_static("localhost")),
            )
            .path_and_query(path_and_query)
            .build()?;
        Ok(())
    }
}

/// Overrides of the signing region and service for one endpoint
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct CredentialScope {
    region: Option<SigningRegion>,
    service: Option<SigningService>,
}

impl CredentialScope {
    pub fn builder() -> credential_scope::Builder {
        credential_scope::Builder::default()
    }

    pub fn region(&self) -> Option<&SigningRegion> {
        self.region.as_ref()
    }

    pub fn service(&self) -> Option<&SigningService> {
        self.service.as_ref()
    }
}

pub mod credential_scope {
    use crate::CredentialScope;
    use aws_types::region::SigningRegion;
    use aws_types::SigningService;

    #[derive(Debug, Default)]
    pub struct Builder {
        region: Option<SigningRegion>,
        service: Option<SigningService>,
    }

    impl Builder {
        pub fn region(mut self, region: impl Into<SigningRegion>) -> Self {
            self.region = Some(region.into());
            self
        }

        pub fn service(mut self, service: impl Into<SigningService>) -> Self {
            self.service = Some(service.into());
            self
        }

        pub fn build(self) -> CredentialScope {
            CredentialScope {
                region: self.region,
                service: self.service,
            }
        }
    }
}

/// Resolve the AWS Endpoint for a given region
///
/// To provide a static endpoint, [`StaticEndpoint`] can be used.
pub trait ResolveAwsEndpoint: Send + Sync {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError>;
}

/// Region-derived endpoints: `https://{prefix}.{region}.amazonaws.com`
///
/// Regions in the China partition (`cn-*`) use the `amazonaws.com.cn` suffix.
#[derive(Clone, Debug)]
pub struct DefaultAwsEndpointResolver {
    endpoint_prefix: &'static str,
}

impl DefaultAwsEndpointResolver {
    pub fn for_service(endpoint_prefix: &'static str) -> Self {
        DefaultAwsEndpointResolver { endpoint_prefix }
    }
}

impl ResolveAwsEndpoint for DefaultAwsEndpointResolver {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let suffix = if region.as_ref().starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        };
        let uri = Uri::from_str(&format!(
            "https://{}.{}.{}",
            self.endpoint_prefix, region, suffix
        ))?;
        Ok(AwsEndpoint::new(uri, CredentialScope::default()))
    }
}

/// A fixed endpoint, used regardless of region
///
/// # Example
/// ```rust
/// use aws_endpoint::StaticEndpoint;
/// use http::Uri;
/// let endpoint = StaticEndpoint::from_uri(Uri::from_static("http://localhost:4566"));
/// ```
#[derive(Clone, Debug)]
pub struct StaticEndpoint {
    uri: Uri,
    credential_scope: CredentialScope,
}

impl StaticEndpoint {
    pub fn from_uri(uri: Uri) -> Self {
        StaticEndpoint {
            uri,
            credential_scope: CredentialScope::default(),
        }
    }

    pub fn with_credential_scope(mut self, credential_scope: CredentialScope) -> Self {
        self.credential_scope = credential_scope;
        self
    }
}

impl ResolveAwsEndpoint for StaticEndpoint {
    fn endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
        Ok(AwsEndpoint::new(
            self.uri.clone(),
            self.credential_scope.clone(),
        ))
    }
}

pub type AwsEndpointResolver = Arc<dyn ResolveAwsEndpoint>;

pub fn get_endpoint_resolver(properties: &PropertyBag) -> Option<&AwsEndpointResolver> {
    properties.get()
}

pub fn set_endpoint_resolver(properties: &mut PropertyBag, provider: AwsEndpointResolver) {
    properties.insert(provider);
}

/// Middleware Stage to Add an Endpoint to a Request
///
/// AwsEndpointStage implements [`MapRequest`](smithy_http::middleware::MapRequest). It will:
/// 1. Load an endpoint provider from the property bag.
/// 2. Load an endpoint given the [`Region`](aws_types::region::Region) in the property bag.
/// 3. Apply the endpoint to the URI in the request
/// 4. Set the `SigningRegion` and `SigningService` in the property bag to drive downstream
/// signing middleware.
#[derive(Clone, Debug)]
pub struct AwsEndpointStage;

#[derive(Debug)]
pub enum AwsEndpointStageError {
    NoEndpointResolver,
    NoRegion,
    EndpointResolutionError(BoxError),
    InvalidUri(http::Error),
}

impl Display for AwsEndpointStageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AwsEndpointStageError::NoEndpointResolver => {
                write!(f, "no endpoint resolver in the property bag")
            }
            AwsEndpointStageError::NoRegion => write!(f, "no region in the property bag"),
            AwsEndpointStageError::EndpointResolutionError(err) => {
                write!(f, "failed to resolve endpoint: {}", err)
            }
            AwsEndpointStageError::InvalidUri(err) => {
                write!(f, "endpoint produced an invalid URI: {}", err)
            }
        }
    }
}

impl Error for AwsEndpointStageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AwsEndpointStageError::EndpointResolutionError(err) => Some(err.as_ref() as _),
            AwsEndpointStageError::InvalidUri(err) => Some(err),
            _ => None,
        }
    }
}

impl MapRequest for AwsEndpointStage {
    type Error = AwsEndpointStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut http_req, props| {
            let provider =
                get_endpoint_resolver(props).ok_or(AwsEndpointStageError::NoEndpointResolver)?;
            let region = props
                .get::<Region>()
                .ok_or(AwsEndpointStageError::NoRegion)?;
            let endpoint = provider
                .endpoint(region)
                .map_err(AwsEndpointStageError::EndpointResolutionError)?;
            tracing::debug!(endpoint = ?endpoint, base_region = ?region, "resolved endpoint");
            let signing_region = endpoint
                .credential_scope()
                .region()
                .cloned()
                .unwrap_or_else(|| region.clone().into());
            props.insert::<SigningRegion>(signing_region);
            if let Some(signing_service) = endpoint.credential_scope().service() {
                props.insert::<SigningService>(signing_service.clone());
            }
            endpoint
                .set_endpoint(http_req.uri_mut())
                .map_err(AwsEndpointStageError::InvalidUri)?;
            Ok(http_req)
        })
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use http::Uri;

    use aws_types::region::{Region, SigningRegion};
    use aws_types::SigningService;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    use crate::{
        set_endpoint_resolver, AwsEndpointStage, AwsEndpointStageError, CredentialScope,
        DefaultAwsEndpointResolver, ResolveAwsEndpoint, StaticEndpoint,
    };

    fn request_with(uri: &str, region: Option<Region>) -> operation::Request {
        let req = http::Request::builder()
            .uri(uri)
            .body(SdkBody::from(""))
            .unwrap();
        let mut req = operation::Request::new(req);
        {
            let mut props = req.properties_mut();
            if let Some(region) = region {
                props.insert(region);
            }
            props.insert(SigningService::from_static("glacier"));
            set_endpoint_resolver(
                &mut props,
                Arc::new(DefaultAwsEndpointResolver::for_service("glacier")),
            );
        }
        req
    }

    #[test]
    fn default_endpoint_updates_request() {
        let region = Region::new("us-west-2");
        let req = request_with("/-/vaults?limit=10", Some(region.clone()));
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(req.properties().get(), Some(&SigningRegion::from(region)));
        assert_eq!(
            req.properties().get(),
            Some(&SigningService::from_static("glacier"))
        );
        let (req, _conf) = req.into_parts();
        assert_eq!(
            req.uri(),
            &Uri::from_static("https://glacier.us-west-2.amazonaws.com/-/vaults?limit=10")
        );
    }

    #[test]
    fn china_regions_use_the_cn_suffix() {
        let endpoint = DefaultAwsEndpointResolver::for_service("sns")
            .endpoint(&Region::new("cn-north-1"))
            .unwrap();
        assert_eq!(
            endpoint.uri(),
            &Uri::from_static("https://sns.cn-north-1.amazonaws.com.cn")
        );
    }

    #[test]
    fn missing_region_is_an_error() {
        let req = request_with("/", None);
        let err = AwsEndpointStage.apply(req).expect_err("no region");
        assert!(matches!(err, AwsEndpointStageError::NoRegion));
    }

    #[test]
    fn static_endpoint_with_scope_overrides_signing() {
        let mut req = request_with("/", Some(Region::new("us-east-1")));
        let endpoint = StaticEndpoint::from_uri(Uri::from_static("http://localhost:4566/prefix"))
            .with_credential_scope(
                CredentialScope::builder()
                    .region(SigningRegion::from_static("us-east-override"))
                    .service(SigningService::from_static("glacier-override"))
                    .build(),
            );
        set_endpoint_resolver(&mut req.properties_mut(), Arc::new(endpoint));
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.properties().get(),
            Some(&SigningRegion::from_static("us-east-override"))
        );
        assert_eq!(
            req.properties().get(),
            Some(&SigningService::from_static("glacier-override"))
        );
        assert_eq!(
            req.http().uri(),
            &Uri::from_static("http://localhost:4566/prefix/")
        );
    }
}
