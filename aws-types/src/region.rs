/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::os_shim_internal::Env;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// The region to send requests to.
///
/// Every client needs a region: it selects the endpoint and scopes the signature.
/// See <https://docs.aws.amazon.com/general/latest/gr/rande.html> for the list of regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(Cow<'static, str>);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

/// Region provider that tries a list of providers in order
///
/// # Example
/// ```rust
/// use aws_types::region::{ChainProvider, Region};
/// use std::env;
/// // check `CUSTOM_REGION`, then the environment, then fall back to us-east-2
/// let provider = ChainProvider::first_try(env::var("CUSTOM_REGION").ok().map(Region::new))
///     .or_default_provider()
///     .or_else(Region::new("us-east-2"));
/// ```
pub struct ChainProvider {
    providers: Vec<Box<dyn ProvideRegion>>,
}

impl ChainProvider {
    pub fn first_try(provider: impl ProvideRegion + 'static) -> Self {
        ChainProvider {
            providers: vec![Box::new(provider)],
        }
    }

    pub fn or_else(mut self, fallback: impl ProvideRegion + 'static) -> Self {
        self.providers.push(Box::new(fallback));
        self
    }

    pub fn or_default_provider(mut self) -> Self {
        self.providers.push(Box::new(default_provider()));
        self
    }

    async fn resolve(&self) -> Option<Region> {
        for provider in &self.providers {
            if let Some(region) = provider.region().await {
                return Some(region);
            }
        }
        None
    }
}

impl ProvideRegion for ChainProvider {
    fn region(&self) -> RegionFuture {
        RegionFuture::new(self.resolve())
    }
}

/// Future returned by [`ProvideRegion::region`]
pub struct RegionFuture<'a>(Pin<Box<dyn Future<Output = Option<Region>> + Send + 'a>>);

impl<'a> RegionFuture<'a> {
    pub fn new(f: impl Future<Output = Option<Region>> + Send + 'a) -> Self {
        RegionFuture(Box::pin(f))
    }

    pub fn ready(region: Option<Region>) -> Self {
        Self::new(std::future::ready(region))
    }
}

impl Future for RegionFuture<'_> {
    type Output = Option<Region>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.0.as_mut().poll(cx)
    }
}

/// Provide a [`Region`] to use with AWS requests
///
/// For most cases [`default_provider`] is the best option.
pub trait ProvideRegion: Send + Sync {
    fn region(&self) -> RegionFuture;
}

impl ProvideRegion for Option<Region> {
    fn region(&self) -> RegionFuture {
        RegionFuture::ready(self.clone())
    }
}

impl ProvideRegion for Region {
    fn region(&self) -> RegionFuture {
        RegionFuture::ready(Some(self.clone()))
    }
}

impl<'a> ProvideRegion for &'a Region {
    fn region(&self) -> RegionFuture {
        RegionFuture::ready(Some((*self).clone()))
    }
}

/// Region provider reading `AWS_REGION`, then `AWS_DEFAULT_REGION`
pub fn default_provider() -> impl ProvideRegion {
    EnvironmentProvider::new()
}

#[non_exhaustive]
pub struct EnvironmentProvider {
    env: Env,
}

impl Default for EnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentProvider {
    pub fn new() -> Self {
        Self::with_env(Env::real())
    }

    pub fn with_env(env: Env) -> Self {
        EnvironmentProvider { env }
    }

    fn load(&self) -> Option<Region> {
        ["AWS_REGION", "AWS_DEFAULT_REGION"]
            .iter()
            .filter_map(|key| self.env.get(key).ok())
            .find(|value| !value.trim().is_empty())
            .map(Region::new)
    }
}

impl ProvideRegion for EnvironmentProvider {
    fn region(&self) -> RegionFuture {
        RegionFuture::ready(self.load())
    }
}

/// The region to use when signing requests
///
/// Usually derived from the client [`Region`]; an endpoint's credential scope may override it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningRegion(Cow<'static, str>);

impl AsRef<str> for SigningRegion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Region> for SigningRegion {
    fn from(inp: Region) -> Self {
        SigningRegion(inp.0)
    }
}

impl SigningRegion {
    pub fn from_static(region: &'static str) -> Self {
        SigningRegion(Cow::Borrowed(region))
    }
}
