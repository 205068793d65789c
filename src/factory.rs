use thiserror::Error;

use super::entities::{Node, Resource, Statement};
use super::identity::IdentityProvider;
use super::repositories::MetadataReader;
use super::resolver::{InheritancePolicy, PropertyResolver, ResolveError};
use super::value_objects::Key;

/// Errors raised while creating resources or statements.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FactoryError {
    /// The class key passed to a create call does not resolve in the registry.
    #[error("class `{class}` missing from the metadata registry")]
    UnknownClass { class: Key },
    /// Property resolution over the class hierarchy failed.
    #[error("property resolution failed: {0}")]
    Resolve(#[from] ResolveError),
}

/// Factory producing schema-conformant [`Resource`] and [`Statement`]
/// instances.
///
/// The factory holds no mutable state of its own: the injected
/// [`IdentityProvider`] supplies fresh identities and stamps, and every
/// schema question is answered by the [`MetadataReader`] passed into the
/// individual calls. Concurrent use is safe as long as both collaborators
/// are.
#[derive(Clone, Debug)]
pub struct DataFactory<I> {
    identity: I,
    resolver: PropertyResolver,
}

impl<I> DataFactory<I>
where
    I: IdentityProvider,
{
    /// Creates a factory with the default lenient ancestor-link policy.
    #[must_use]
    pub fn new(identity: I) -> Self {
        Self::with_policy(identity, InheritancePolicy::default())
    }

    /// Creates a factory with an explicit ancestor-link policy.
    #[must_use]
    pub fn with_policy(identity: I, policy: InheritancePolicy) -> Self {
        Self {
            identity,
            resolver: PropertyResolver::new(policy),
        }
    }

    /// Creates a resource without consulting any registry.
    ///
    /// The resource carries a fresh identity, the given class key and an
    /// empty property set. Use this when no schema expansion is needed or no
    /// registry is available.
    #[must_use]
    pub fn create_resource(&self, class_key: &Key) -> Resource {
        let (id, revision) = self.identity.new_identity();
        Resource {
            id,
            revision,
            class: class_key.clone(),
            properties: Vec::new(),
            changed_at: self.identity.now(),
            changed_by: self.identity.actor(),
        }
    }

    /// Creates a resource with its full inherited property set.
    ///
    /// The class key must resolve in the registry; its own and inherited
    /// property classes become empty slots per the resolver's rules.
    pub fn create_resource_with_schema<R>(
        &self,
        class_key: &Key,
        reader: &R,
    ) -> Result<Resource, FactoryError>
    where
        R: MetadataReader + ?Sized,
    {
        let class = reader
            .class_by_key(class_key)
            .ok_or_else(|| FactoryError::UnknownClass {
                class: class_key.clone(),
            })?;
        let properties = self.resolver.resolve(&class, reader)?;

        let mut resource = self.create_resource(class_key);
        resource.properties = properties;
        Ok(resource)
    }

    /// Creates a resource plus a [`Node`] referencing its exact identity.
    ///
    /// The node is a leaf; placement and children are the caller's business.
    pub fn create_resource_with_node<R>(
        &self,
        class_key: &Key,
        reader: &R,
    ) -> Result<(Resource, Node), FactoryError>
    where
        R: MetadataReader + ?Sized,
    {
        let resource = self.create_resource_with_schema(class_key, reader)?;
        let node = Node::new(resource.key());
        Ok((resource, node))
    }

    /// Creates a statement linking `subject` to `object`.
    ///
    /// The endpoint keys are stored verbatim; no existence check against any
    /// resource store is performed. A statement class declaring no property
    /// classes of its own is valid and may still inherit slots from its
    /// ancestors.
    pub fn create_statement<R>(
        &self,
        class_key: &Key,
        subject: Key,
        object: Key,
        reader: &R,
    ) -> Result<Statement, FactoryError>
    where
        R: MetadataReader + ?Sized,
    {
        let class = reader
            .class_by_key(class_key)
            .ok_or_else(|| FactoryError::UnknownClass {
                class: class_key.clone(),
            })?;
        let properties = self.resolver.resolve(&class, reader)?;

        let (id, revision) = self.identity.new_identity();
        Ok(Statement {
            id,
            revision,
            class: class_key.clone(),
            properties,
            changed_at: self.identity.now(),
            changed_by: self.identity.actor(),
            subject,
            object,
        })
    }
}
