/// The five outcomes a validation run can fail with, kept distinct from
/// whatever error type the external verifier/fetcher traits raise (their
/// failures are `anyhow::Error`, caught and mapped down to one of these).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCode {
    /// The packet carried no key locator to validate against.
    NoSignature,
    /// The schema rejected the key as a signer of this packet.
    PolicyError,
    /// The cryptographic signature did not verify.
    InvalidSignature,
    /// A fetched certificate could not be parsed or re-validated.
    MalformedCert,
    /// The certificate chain couldn't be resolved, directly or because
    /// the chain-depth bound was hit.
    CannotRetrieveCert,
}

impl std::fmt::Display for FailureCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FailureCode::NoSignature => "no signature",
            FailureCode::PolicyError => "policy rejected by schema",
            FailureCode::InvalidSignature => "invalid signature",
            FailureCode::MalformedCert => "malformed certificate",
            FailureCode::CannotRetrieveCert => "certificate could not be retrieved",
        };
        f.write_str(s)
    }
}

impl std::error::Error for FailureCode {}
