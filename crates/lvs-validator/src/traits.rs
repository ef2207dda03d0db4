use lvs_model::Name;

use crate::data::Certificate;
use crate::data::Data;

/// Verifies a packet's cryptographic signature against the public key
/// named `signer_name`. Left fully external: this crate only decides
/// *whether* a name is allowed to sign, never how a signature is checked.
#[async_trait::async_trait]
pub trait SignatureVerifier: Send + Sync {
    async fn verify(&self, packet: &Data, signer_name: &Name) -> anyhow::Result<bool>;
}

/// Retrieves the certificate named `key_name`, e.g. over the network.
#[async_trait::async_trait]
pub trait CertificateFetcher: Send + Sync {
    async fn fetch(&self, key_name: &Name) -> anyhow::Result<Certificate>;
}
