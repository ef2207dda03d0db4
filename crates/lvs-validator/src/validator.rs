use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use lvs_checker::Checker;

use crate::data::Certificate;
use crate::data::Data;
use crate::error::FailureCode;
use crate::traits::CertificateFetcher;
use crate::traits::SignatureVerifier;

const DEFAULT_CHAIN_DEPTH_BOUND: usize = 32;

/// Wires a schema checker to an external signature verifier, certificate
/// fetcher, and trust anchor, and decides whether a packet is valid under
/// the schema's policy.
pub struct Validator {
    checker: Checker,
    anchor: Certificate,
    chain_depth_bound: usize,
    verifier: Arc<dyn SignatureVerifier>,
    fetcher: Arc<dyn CertificateFetcher>,
}

impl Validator {
    /// Validates `data`: extracts its key locator, checks the schema's
    /// policy, then either verifies directly against the anchor or
    /// recurses through the certificate chain.
    ///
    /// `check` runs before any cryptographic work, so a schema rejection
    /// never triggers a fetch or a signature verification.
    pub async fn validate(&self, data: &Data) -> Result<(), FailureCode> {
        self.validate_at_depth(data, 0).await
    }

    // Plain `async fn` recursion doesn't type-check (the future would
    // contain itself), so this level is boxed by hand, the usual
    // workaround for a self-recursive async function.
    fn validate_at_depth<'a>(
        &'a self,
        data: &'a Data,
        depth: usize,
    ) -> Pin<Box<dyn Future<Output = Result<(), FailureCode>> + Send + 'a>> {
        Box::pin(async move {
            let Some(key_name) = data.key_locator.as_ref() else {
                tracing::warn!("packet carries no key locator");
                return Err(FailureCode::NoSignature);
            };

            let allowed = self.checker.check(&data.name, key_name).map_err(|e| {
                tracing::warn!(fn_id = %e.fn_id, "schema check aborted on undefined function");
                FailureCode::PolicyError
            })?;
            if !allowed {
                tracing::info!(?key_name, "schema rejected this key as a signer");
                return Err(FailureCode::PolicyError);
            }

            if key_name == &self.anchor.name {
                return match self.verifier.verify(data, key_name).await {
                    Ok(true) => Ok(()),
                    Ok(false) => {
                        tracing::warn!("signature did not verify against the trust anchor");
                        Err(FailureCode::InvalidSignature)
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "verifier raised an error against the trust anchor");
                        Err(FailureCode::InvalidSignature)
                    }
                };
            }

            if depth >= self.chain_depth_bound {
                tracing::warn!(depth, "certificate chain exceeded its depth bound");
                return Err(FailureCode::CannotRetrieveCert);
            }

            let cert = self.fetcher.fetch(key_name).await.map_err(|e| {
                tracing::warn!(error = %e, "certificate could not be retrieved");
                FailureCode::CannotRetrieveCert
            })?;

            // Whatever this recursive validation actually failed with, the
            // failure we report at this level is always "the certificate we
            // fetched didn't hold up" rather than the inner cause.
            self.validate_at_depth(&cert, depth + 1)
                .await
                .map_err(|_| FailureCode::MalformedCert)?;

            match self.verifier.verify(data, key_name).await {
                Ok(true) => Ok(()),
                Ok(false) => {
                    tracing::warn!("signature did not verify against the fetched certificate");
                    Err(FailureCode::InvalidSignature)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "verifier raised an error against the fetched certificate");
                    Err(FailureCode::MalformedCert)
                }
            }
        })
    }
}

/// Fluent builder for a `Validator`.
pub struct ValidatorBuilder {
    checker: Checker,
    anchor: Certificate,
    chain_depth_bound: usize,
    verifier: Option<Arc<dyn SignatureVerifier>>,
    fetcher: Option<Arc<dyn CertificateFetcher>>,
}

impl ValidatorBuilder {
    pub fn new(checker: Checker, anchor: Certificate) -> Self {
        Self {
            checker,
            anchor,
            chain_depth_bound: DEFAULT_CHAIN_DEPTH_BOUND,
            verifier: None,
            fetcher: None,
        }
    }

    pub fn chain_depth_bound(mut self, bound: usize) -> Self {
        self.chain_depth_bound = bound;
        self
    }

    pub fn verifier(mut self, verifier: Arc<dyn SignatureVerifier>) -> Self {
        self.verifier = Some(verifier);
        self
    }

    pub fn fetcher(mut self, fetcher: Arc<dyn CertificateFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Builds the validator. Panics if `verifier` or `fetcher` was never
    /// set — both are required collaborators, not optional features.
    pub fn build(self) -> Validator {
        Validator {
            checker: self.checker,
            anchor: self.anchor,
            chain_depth_bound: self.chain_depth_bound,
            verifier: self
                .verifier
                .expect("ValidatorBuilder::build called without a verifier"),
            fetcher: self
                .fetcher
                .expect("ValidatorBuilder::build called without a fetcher"),
        }
    }
}
