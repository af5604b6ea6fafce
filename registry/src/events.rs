use lockpass_types::{Address, Fingerprint, PassClass, PassId};
use serde::{Deserialize, Serialize};

/// Events queued by the engine for the host to process.
///
/// Serialized with a `type` tag so hosts can forward them as JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A pass was minted. `issuer` is the recovered voucher signer, absent
    /// for administrative mints and bonus passes.
    PassLocked {
        pass_id: PassId,
        class: PassClass,
        owner: Address,
        issuer: Option<Address>,
    },
    /// A name was bound to a pass.
    NameLocked {
        pass_id: PassId,
        fingerprint: Fingerprint,
        name: String,
    },
    NamesReserved { fingerprints: Vec<Fingerprint> },
    NamesUnreserved { fingerprints: Vec<Fingerprint> },
    /// A reserved name was released to a freshly minted pass.
    ReservedNameMinted {
        pass_id: PassId,
        fingerprint: Fingerprint,
        recipient: Address,
    },
}
