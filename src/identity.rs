use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Capability supplying fresh identities and creation-time stamps.
///
/// Each call to [`IdentityProvider::new_identity`] must return an (id,
/// revision) pair that no earlier call on the same provider instance
/// returned. The acting identity is injected at construction time rather
/// than read from process-wide environment state, which keeps the factories
/// deterministic under test.
pub trait IdentityProvider {
    /// Issues a fresh (resource identifier, revision identifier) pair.
    fn new_identity(&self) -> (String, String);

    /// Returns the identity of the acting user or process.
    fn actor(&self) -> String;

    /// Returns the current wall-clock time.
    fn now(&self) -> DateTime<Utc>;
}

/// Uuid-backed [`IdentityProvider`].
///
/// Identifiers follow the SpecIF GUID convention of a leading underscore so
/// they stay valid as XML ids; revisions are plain simple-format v4 uuids.
#[derive(Clone, Debug)]
pub struct UuidIdentityProvider {
    actor: String,
}

impl UuidIdentityProvider {
    /// Creates a provider stamping objects on behalf of the given actor.
    #[must_use]
    pub fn new(actor: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
        }
    }
}

impl IdentityProvider for UuidIdentityProvider {
    fn new_identity(&self) -> (String, String) {
        let id = format!("_{}", Uuid::new_v4().simple());
        let revision = Uuid::new_v4().simple().to_string();
        (id, revision)
    }

    fn actor(&self) -> String {
        self.actor.clone()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
