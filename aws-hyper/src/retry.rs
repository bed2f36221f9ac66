/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Retry support for aws-hyper
//!
//! Retries are driven by two pieces of state:
//! - a retry quota shared by every request dispatched through the same [`Client`](crate::Client)
//! - an attempt counter local to a single request
//!
//! The retry quota is a token bucket: every retry withdraws tokens (more for transient
//! errors) and a successful response returns the cost of the last retry to the bucket.

use crate::{SdkError, SdkSuccess};
use smithy_http::operation::Operation;
use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind, RetryKind};
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;

/// Retry Policy Configuration
///
/// Without specific use cases, users should generally rely on the default values set by
/// [`RetryConfig::default`](RetryConfig::default).
#[derive(Clone, Debug)]
pub struct RetryConfig {
    initial_retry_tokens: usize,
    retry_cost: usize,
    no_retry_increment: usize,
    timeout_retry_cost: usize,
    max_attempts: u32,
    max_backoff: Duration,
    base: fn() -> f64,
}

impl RetryConfig {
    /// Override `b` in the exponential backoff computation
    ///
    /// By default, `base` is a randomly generated value between 0 and 1. In tests, it can
    /// be helpful to override this:
    /// ```rust
    /// use aws_hyper::RetryConfig;
    /// let conf = RetryConfig::default().with_base(|| 1_f64);
    /// ```
    pub fn with_base(mut self, base: fn() -> f64) -> Self {
        self.base = base;
        self
    }

    /// Override the maximum number of attempts
    ///
    /// `max_attempts` must be set to a value of at least `1` (indicating that retries are disabled).
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff = max_backoff;
        self
    }

    pub fn with_initial_retry_tokens(mut self, initial_retry_tokens: usize) -> Self {
        self.initial_retry_tokens = initial_retry_tokens;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

const MAX_ATTEMPTS: u32 = 3;
const INITIAL_RETRY_TOKENS: usize = 500;
const RETRY_COST: usize = 5;
const TIMEOUT_RETRY_COST: usize = 10;
const MAX_BACKOFF: Duration = Duration::from_secs(20);

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_retry_tokens: INITIAL_RETRY_TOKENS,
            retry_cost: RETRY_COST,
            no_retry_increment: 1,
            timeout_retry_cost: TIMEOUT_RETRY_COST,
            max_attempts: MAX_ATTEMPTS,
            max_backoff: MAX_BACKOFF,
            // by default, use a random base for exponential backoff
            base: fastrand::f64,
        }
    }
}

/// Manage retries for a service
///
/// An implementation of the `standard` AWS retry strategy. A `Factory` is instantiated when a
/// client is created and hands out a [`StandardRetryStrategy`] per request. Every handler shares
/// the same cross-request retry quota.
#[derive(Clone)]
pub(crate) struct RetryHandlerFactory {
    config: RetryConfig,
    shared_state: CrossRequestRetryState,
}

impl Debug for RetryHandlerFactory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryHandlerFactory")
            .field("config", &self.config)
            .field("quota_available", &self.shared_state.quota_available())
            .finish()
    }
}

impl RetryHandlerFactory {
    pub fn new(config: RetryConfig) -> Self {
        Self {
            shared_state: CrossRequestRetryState::new(config.initial_retry_tokens),
            config,
        }
    }

    pub fn with_config(&mut self, config: RetryConfig) {
        *self = Self::new(config);
    }

    pub(crate) fn new_handler(&self) -> StandardRetryStrategy {
        StandardRetryStrategy {
            local: RequestLocalRetryState::new(),
            shared: self.shared_state.clone(),
            config: self.config.clone(),
        }
    }
}

#[derive(Default, Clone)]
struct RequestLocalRetryState {
    attempts: u32,
    last_quota_usage: Option<usize>,
}

impl RequestLocalRetryState {
    fn new() -> Self {
        Self::default()
    }
}

/// Retry quota shared by every request dispatched through one client
#[derive(Clone)]
struct CrossRequestRetryState {
    quota_available: Arc<Mutex<usize>>,
    max_quota: usize,
}

impl CrossRequestRetryState {
    fn new(initial_quota: usize) -> Self {
        Self {
            quota_available: Arc::new(Mutex::new(initial_quota)),
            max_quota: initial_quota,
        }
    }

    fn quota_available(&self) -> usize {
        *self.quota_available.lock().unwrap()
    }

    fn quota_release(&self, value: Option<usize>, config: &RetryConfig) {
        let mut quota = self.quota_available.lock().unwrap();
        *quota = (*quota + value.unwrap_or(config.no_retry_increment)).min(self.max_quota);
    }

    /// Attempt to acquire retry quota for `ErrorKind`
    ///
    /// If quota is available, the amount of quota consumed is returned
    /// If no quota is available, `None` is returned.
    fn quota_acquire(&self, err: &ErrorKind, config: &RetryConfig) -> Option<usize> {
        let mut quota = self.quota_available.lock().unwrap();
        let retry_cost = if err == &ErrorKind::TransientError {
            config.timeout_retry_cost
        } else {
            config.retry_cost
        };
        if retry_cost > *quota {
            None
        } else {
            *quota -= retry_cost;
            Some(retry_cost)
        }
    }
}

/// Retry handler for a single request
///
/// The `local` state is owned by this request; `shared` is the quota of the client.
#[derive(Clone)]
pub(crate) struct StandardRetryStrategy {
    local: RequestLocalRetryState,
    shared: CrossRequestRetryState,
    config: RetryConfig,
}

impl StandardRetryStrategy {
    /// Determine the correct response given `retry_kind`
    ///
    /// If a retry is specified, this function returns `(next, backoff_duration)`
    /// If no retry is specified, this function returns None
    fn attempt_retry(&self, retry_kind: Result<(), ErrorKind>) -> Option<(Self, Duration)> {
        let quota_used = match retry_kind {
            Ok(_) => {
                self.shared
                    .quota_release(self.local.last_quota_usage, &self.config);
                return None;
            }
            Err(e) => {
                if self.local.attempts == self.config.max_attempts - 1 {
                    debug!(attempts = self.local.attempts + 1, "not retrying: attempts exhausted");
                    return None;
                }
                match self.shared.quota_acquire(&e, &self.config) {
                    Some(quota) => quota,
                    None => {
                        debug!(kind = ?e, "not retrying: retry quota exhausted");
                        return None;
                    }
                }
            }
        };
        let b = (self.config.base)();
        // computed in f64 so large attempt counts saturate at max_backoff
        let backoff = (b * 2_f64.powf(self.local.attempts as f64))
            .min(self.config.max_backoff.as_secs_f64());
        let backoff = Duration::from_secs_f64(backoff);
        let next = StandardRetryStrategy {
            local: RequestLocalRetryState {
                attempts: self.local.attempts + 1,
                last_quota_usage: Some(quota_used),
            },
            shared: self.shared.clone(),
            config: self.config.clone(),
        };

        Some((next, backoff))
    }
}

impl<Handler, R, T, E>
    tower::retry::Policy<Operation<Handler, R>, SdkSuccess<T>, SdkError<E>>
    for StandardRetryStrategy
where
    Handler: Clone,
    R: ClassifyResponse<SdkSuccess<T>, SdkError<E>>,
{
    type Future = Pin<Box<dyn Future<Output = Self> + Send>>;

    fn retry(
        &self,
        req: &Operation<Handler, R>,
        result: Result<&SdkSuccess<T>, &SdkError<E>>,
    ) -> Option<Self::Future> {
        let policy = req.retry_policy();
        let retry = policy.classify(result);
        let (next, dur) = match retry {
            RetryKind::Explicit(dur) => {
                let (next, _) = self.attempt_retry(Err(ErrorKind::ThrottlingError))?;
                (next, dur.min(self.config.max_backoff))
            }
            RetryKind::NotRetryable => {
                if result.is_ok() {
                    self.attempt_retry(Ok(()));
                }
                return None;
            }
            RetryKind::Error(err) => self.attempt_retry(Err(err))?,
        };
        debug!(
            operation = ?req.metadata().map(|m| m.name()),
            attempt = next.local.attempts,
            backoff = ?dur,
            "retrying request"
        );
        let fut = async move {
            tokio::time::sleep(dur).await;
            next
        };
        Some(Box::pin(fut))
    }

    fn clone_request(&self, req: &Operation<Handler, R>) -> Option<Operation<Handler, R>> {
        req.try_clone()
    }
}
