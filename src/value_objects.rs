use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Value object identifying one revision of one entity.
///
/// A key pairs an entity identifier with a revision identifier; two keys are
/// equal only when both components match. Keys reference schema definitions
/// as well as concrete resource versions, so they order and hash cheaply for
/// use in registry maps.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Key {
    id: String,
    revision: String,
}

impl Key {
    /// Creates a new [`Key`] from its identifier and revision components.
    #[must_use]
    pub fn new(id: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            revision: revision.into(),
        }
    }

    /// Returns the entity identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the revision identifier.
    #[must_use]
    pub fn revision(&self) -> &str {
        &self.revision
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.revision)
    }
}
