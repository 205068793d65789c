//! Factory for schema-conformant SpecIF data-exchange objects.
//!
//! The crate instantiates typed resources (nodes) and statements (typed
//! relationships between two resources) for a metadata-driven interchange
//! model in which classes form a single-inheritance hierarchy and each class
//! declares property slots. Its core is the property-inheritance resolver:
//! given a target class it computes the complete, de-duplicated, ordered set
//! of empty property slots an instance must carry, with more specific
//! classes overriding less specific ones by slot title.
//!
//! Persistence, wire serialization and metadata storage stay outside; the
//! factories consume them through the [`MetadataReader`] and
//! [`IdentityProvider`] traits, keeping the core a pure, synchronous
//! computation over externally supplied data.

pub mod entities;
pub mod factory;
pub mod identity;
pub mod repositories;
pub mod resolver;
pub mod value_objects;

pub use entities::{ClassDefinition, Node, Property, PropertyClass, Resource, Statement, Value};
pub use factory::{DataFactory, FactoryError};
pub use identity::{IdentityProvider, UuidIdentityProvider};
pub use repositories::{InMemoryMetadataReader, MetadataReader};
pub use resolver::{InheritancePolicy, PropertyResolver, ResolveError};
pub use value_objects::Key;
