/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::{CredentialsProvider, ProvideCredentials};
use aws_endpoint::{AwsEndpointResolver, DefaultAwsEndpointResolver, ResolveAwsEndpoint};
use aws_http::user_agent::AwsUserAgent;
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::region::{ProvideRegion, Region};
use aws_types::SigningService;
use smithy_http::property_bag::PropertyBag;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

pub(crate) const ENDPOINT_PREFIX: &str = "glacier";
pub(crate) const SIGNING_SERVICE: &str = "glacier";

pub struct Config {
    pub(crate) endpoint_resolver: AwsEndpointResolver,
    pub(crate) region: Option<Region>,
    pub(crate) credentials_provider: CredentialsProvider,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut config = f.debug_struct("Config");
        config.field("region", &self.region);
        config.finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Load configuration from the environment
    ///
    /// The region comes from `AWS_REGION` (or `AWS_DEFAULT_REGION`) and credentials from
    /// `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` / `AWS_SESSION_TOKEN`.
    pub async fn from_env() -> Self {
        let region = aws_types::region::default_provider().region().await;
        Builder::default().region(region).build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Populate the property bag of an operation with everything the middleware stack reads
    pub(crate) fn configure(&self, properties: &mut PropertyBag) {
        // Glacier rejects requests without a signed `x-amz-content-sha256`
        properties.insert(OperationSigningConfig::default_config().with_content_sha256_header());
        properties.insert(SigningService::from_static(SIGNING_SERVICE));
        if let Some(region) = &self.region {
            properties.insert(region.clone());
        }
        aws_auth::set_provider(properties, self.credentials_provider.clone());
        aws_endpoint::set_endpoint_resolver(properties, self.endpoint_resolver.clone());
        properties.insert(AwsUserAgent::new_from_environment(
            crate::API_METADATA.clone(),
        ));
    }
}

#[derive(Default)]
pub struct Builder {
    endpoint_resolver: Option<AwsEndpointResolver>,
    region: Option<Region>,
    credentials_provider: Option<CredentialsProvider>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the endpoint resolver. By default, endpoints are derived from the region:
    /// `https://glacier.{region}.amazonaws.com`
    pub fn endpoint_resolver(mut self, endpoint_resolver: impl ResolveAwsEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(endpoint_resolver));
        self
    }

    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the credentials provider for this service
    pub fn credentials_provider(
        mut self,
        credentials_provider: impl ProvideCredentials + 'static,
    ) -> Self {
        self.credentials_provider = Some(Arc::new(credentials_provider));
        self
    }

    pub fn build(self) -> Config {
        Config {
            endpoint_resolver: self
                .endpoint_resolver
                .unwrap_or_else(|| Arc::new(DefaultAwsEndpointResolver::for_service(ENDPOINT_PREFIX))),
            region: self.region,
            credentials_provider: self
                .credentials_provider
                .unwrap_or_else(|| Arc::new(aws_auth::default_provider())),
        }
    }
}
