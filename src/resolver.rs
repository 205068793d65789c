use std::collections::BTreeSet;

use thiserror::Error;

use super::entities::{ClassDefinition, Property};
use super::repositories::MetadataReader;
use super::value_objects::Key;

/// Policy applied when a class's `extends` key does not resolve.
///
/// The lenient default treats a broken ancestor link as the end of the
/// inheritance chain and keeps the properties collected so far. Strict mode
/// promotes the same condition to [`ResolveError::BrokenAncestorLink`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum InheritancePolicy {
    /// Stop the walk at the break and return the partial result.
    #[default]
    Lenient,
    /// Fail the resolution with an error.
    Strict,
}

/// Errors raised while resolving the property set of a class.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// A class lists a property class key the registry cannot resolve.
    ///
    /// This is a registry contract violation and is fatal regardless of the
    /// configured [`InheritancePolicy`].
    #[error("class `{class}` lists unknown property class `{property_class}`")]
    UnknownPropertyClass { class: Key, property_class: Key },
    /// A class's `extends` key does not resolve (strict mode only).
    #[error("class `{class}` extends unknown class `{parent}`")]
    BrokenAncestorLink { class: Key, parent: Key },
}

/// Resolves the complete, de-duplicated property set a class exposes.
///
/// The resolver seeds the result with the target class's own property
/// classes in declaration order, then walks the single-inheritance chain
/// from most to least specific, appending each ancestor's newly introduced
/// slots. Override equality is decided by the property class *title*, not
/// its key: a slot already present suppresses any equally titled slot of a
/// less specific class.
#[derive(Clone, Debug, Default)]
pub struct PropertyResolver {
    policy: InheritancePolicy,
}

impl PropertyResolver {
    /// Creates a resolver with the given ancestor-link policy.
    #[must_use]
    pub fn new(policy: InheritancePolicy) -> Self {
        Self { policy }
    }

    /// Returns the configured ancestor-link policy.
    #[must_use]
    pub fn policy(&self) -> InheritancePolicy {
        self.policy
    }

    /// Produces the ordered sequence of empty property slots for `class`.
    ///
    /// The inheritance walk is iterative and tracks visited class keys, so a
    /// malformed cyclic `extends` configuration terminates after one pass
    /// over the cycle instead of looping.
    pub fn resolve<R>(
        &self,
        class: &ClassDefinition,
        reader: &R,
    ) -> Result<Vec<Property>, ResolveError>
    where
        R: MetadataReader + ?Sized,
    {
        let mut properties = Vec::new();
        let mut seen_titles = BTreeSet::new();
        let mut visited = BTreeSet::from([class.key().clone()]);

        collect_declared(class, reader, &mut properties, &mut seen_titles)?;

        let mut current = class.clone();
        while let Some(parent_key) = current.extends().cloned() {
            if !visited.insert(parent_key.clone()) {
                tracing::debug!(
                    class = %current.key(),
                    parent = %parent_key,
                    "inheritance chain revisits a class, stopping the walk"
                );
                break;
            }

            let Some(parent) = reader.class_by_key(&parent_key) else {
                match self.policy {
                    InheritancePolicy::Lenient => {
                        tracing::warn!(
                            class = %current.key(),
                            parent = %parent_key,
                            "ancestor class missing from registry, returning partial property set"
                        );
                        break;
                    }
                    InheritancePolicy::Strict => {
                        return Err(ResolveError::BrokenAncestorLink {
                            class: current.key().clone(),
                            parent: parent_key,
                        });
                    }
                }
            };

            collect_declared(&parent, reader, &mut properties, &mut seen_titles)?;
            current = parent;
        }

        Ok(properties)
    }
}

/// Appends one empty slot per property class `class` declares, skipping any
/// whose title an already collected slot carries.
fn collect_declared<R>(
    class: &ClassDefinition,
    reader: &R,
    properties: &mut Vec<Property>,
    seen_titles: &mut BTreeSet<String>,
) -> Result<(), ResolveError>
where
    R: MetadataReader + ?Sized,
{
    for property_class_key in class.property_classes() {
        let Some(property_class) = reader.property_class_by_key(property_class_key) else {
            return Err(ResolveError::UnknownPropertyClass {
                class: class.key().clone(),
                property_class: property_class_key.clone(),
            });
        };

        if seen_titles.insert(property_class.title().to_owned()) {
            properties.push(Property::empty(property_class_key.clone()));
        } else {
            tracing::debug!(
                class = %class.key(),
                property_class = %property_class_key,
                title = property_class.title(),
                "property suppressed by a more specific declaration"
            );
        }
    }
    Ok(())
}
