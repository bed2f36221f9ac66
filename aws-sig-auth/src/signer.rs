/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::Credentials;
use aws_sigv4::http_request::{
    sign, PayloadChecksumKind, SignableBody, SignableRequest, SigningParams, SigningSettings,
    UriEncoding,
};
use aws_types::region::SigningRegion;
use aws_types::SigningService;
use smithy_http::body::SdkBody;
use std::fmt;
use std::time::SystemTime;

pub use aws_sigv4::SigningError;

pub(crate) const EXPIRED_CREDENTIALS_WARNING: &str =
    "the credentials used to sign this request have expired; the service will likely reject it";

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum SigningAlgorithm {
    SigV4,
}

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum HttpSignatureType {
    /// A signature for a full http request should be computed, with header updates applied to the signing result.
    HttpRequestHeaders,
}

/// Signing Configuration for an Operation
///
/// Although these fields MAY be customized on a per request basis, they are generally static
/// for a given operation
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub struct OperationSigningConfig {
    pub algorithm: SigningAlgorithm,
    pub signature_type: HttpSignatureType,
    pub signing_options: SigningOptions,
}

impl OperationSigningConfig {
    /// The configuration used by every awsJson and awsQuery operation
    pub fn default_config() -> Self {
        OperationSigningConfig {
            algorithm: SigningAlgorithm::SigV4,
            signature_type: HttpSignatureType::HttpRequestHeaders,
            signing_options: SigningOptions::default(),
        }
    }

    /// Also sign the payload hash as `x-amz-content-sha256`
    pub fn with_content_sha256_header(mut self) -> Self {
        self.signing_options.content_sha256_header = true;
        self
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub struct SigningOptions {
    pub double_uri_encode: bool,
    pub content_sha256_header: bool,
}

impl Default for SigningOptions {
    fn default() -> Self {
        SigningOptions {
            double_uri_encode: true,
            content_sha256_header: false,
        }
    }
}

/// Signing Configuration for an individual Request
///
/// These fields may vary on a per-request basis
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RequestConfig<'a> {
    pub request_ts: SystemTime,
    pub region: &'a SigningRegion,
    pub service: &'a SigningService,
}

#[derive(Clone, Default)]
pub struct SigV4Signer {
    _private: (),
}

impl fmt::Debug for SigV4Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigV4Signer").finish()
    }
}

impl SigV4Signer {
    pub fn new() -> Self {
        SigV4Signer { _private: () }
    }

    fn settings(operation_config: &OperationSigningConfig) -> SigningSettings {
        let mut settings = SigningSettings::default();
        settings.uri_encoding = if operation_config.signing_options.double_uri_encode {
            UriEncoding::Double
        } else {
            UriEncoding::Single
        };
        settings.payload_checksum_kind = if operation_config.signing_options.content_sha256_header
        {
            PayloadChecksumKind::XAmzSha256
        } else {
            PayloadChecksumKind::NoHeader
        };
        settings
    }

    fn signing_params<'a>(
        settings: SigningSettings,
        credentials: &'a Credentials,
        request_config: &'a RequestConfig<'a>,
    ) -> Result<SigningParams<'a>, SigningError> {
        if let Some(expiry) = credentials.expiry() {
            if expiry <= request_config.request_ts {
                tracing::warn!(
                    provider = credentials.provider_name(),
                    "{}",
                    EXPIRED_CREDENTIALS_WARNING
                );
            }
        }
        let mut builder = SigningParams::builder()
            .access_key(credentials.access_key_id())
            .secret_key(credentials.secret_access_key())
            .region(request_config.region.as_ref())
            .service_name(request_config.service.as_ref())
            .date_time(request_config.request_ts)
            .settings(settings);
        builder.set_security_token(credentials.session_token());
        builder.build()
    }

    /// Sign a request using the SigV4 Protocol
    ///
    /// End users will not typically call this directly: see
    /// [`SigV4SigningStage`](crate::middleware::SigV4SigningStage).
    pub fn sign(
        &self,
        operation_config: &OperationSigningConfig,
        request_config: &RequestConfig<'_>,
        credentials: &Credentials,
        request: &mut http::Request<SdkBody>,
    ) -> Result<String, SigningError> {
        let settings = Self::settings(operation_config);
        let signing_params = Self::signing_params(settings, credentials, request_config)?;
        let (instructions, signature) = {
            let body = request
                .body()
                .bytes()
                .map(SignableBody::Bytes)
                .unwrap_or(SignableBody::UnsignedPayload);
            let signable_request =
                SignableRequest::new(request.method(), request.uri(), request.headers(), body);
            sign(signable_request, &signing_params)?
        };
        instructions.apply_to_request(request);
        Ok(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        OperationSigningConfig, RequestConfig, SigV4Signer, EXPIRED_CREDENTIALS_WARNING,
    };
    use aws_auth::Credentials;
    use aws_types::region::SigningRegion;
    use aws_types::SigningService;
    use smithy_http::body::SdkBody;
    use std::time::{Duration, UNIX_EPOCH};
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn expired_credentials_warning() {
        let now = UNIX_EPOCH + Duration::from_secs(1000);
        let region = SigningRegion::from_static("us-east-1");
        let service = SigningService::from_static("sns");
        let request_config = RequestConfig {
            request_ts: now,
            region: &region,
            service: &service,
        };
        let settings = SigV4Signer::settings(&OperationSigningConfig::default_config());

        let fresh_for = Some(now + Duration::from_secs(60));
        let fresh = Credentials::new("akid", "secret", None, fresh_for, "test");
        SigV4Signer::signing_params(settings, &fresh, &request_config).unwrap();
        assert!(!logs_contain(EXPIRED_CREDENTIALS_WARNING));

        let expired_at = Some(now - Duration::from_secs(60));
        let expired = Credentials::new("akid", "secret", None, expired_at, "test");
        SigV4Signer::signing_params(settings, &expired, &request_config).unwrap();
        assert!(logs_contain(EXPIRED_CREDENTIALS_WARNING));
    }

    #[test]
    fn content_sha256_is_opt_in() {
        let region = SigningRegion::from_static("us-east-1");
        let service = SigningService::from_static("glacier");
        let request_config = RequestConfig {
            request_ts: UNIX_EPOCH + Duration::from_secs(1440938160),
            region: &region,
            service: &service,
        };
        let creds = Credentials::from_keys("AKIDEXAMPLE", "secret", Some("token".to_string()));
        let signer = SigV4Signer::new();

        let mut req = http::Request::builder()
            .uri("https://glacier.us-east-1.amazonaws.com/-/vaults")
            .body(SdkBody::empty())
            .unwrap();
        signer
            .sign(
                &OperationSigningConfig::default_config(),
                &request_config,
                &creds,
                &mut req,
            )
            .unwrap();
        assert!(req.headers().get("x-amz-content-sha256").is_none());
        assert_eq!(req.headers()["x-amz-security-token"], "token");
        assert_eq!(req.headers()["x-amz-date"], "20150830T123600Z");

        let mut req = http::Request::builder()
            .uri("https://glacier.us-east-1.amazonaws.com/-/vaults")
            .body(SdkBody::empty())
            .unwrap();
        signer
            .sign(
                &OperationSigningConfig::default_config().with_content_sha256_header(),
                &request_config,
                &creds,
                &mut req,
            )
            .unwrap();
        assert_eq!(
            req.headers()["x-amz-content-sha256"],
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
