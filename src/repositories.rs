use std::collections::BTreeMap;

use super::entities::{ClassDefinition, PropertyClass};
use super::value_objects::Key;

/// Read-only lookup of schema definitions by key.
///
/// One entry point serves resource and statement classes alike; both kinds
/// resolve to the same [`ClassDefinition`] shape. Implementors must return
/// `None` for unknown keys and must be safe for concurrent reads if callers
/// create objects from multiple threads.
pub trait MetadataReader {
    /// Resolves a resource or statement class definition.
    fn class_by_key(&self, key: &Key) -> Option<ClassDefinition>;

    /// Resolves a property class definition.
    fn property_class_by_key(&self, key: &Key) -> Option<PropertyClass>;
}

/// Map-backed [`MetadataReader`] adapter.
///
/// Serves as the bundled registry for callers that assemble their schema in
/// process, and as the fixture registry for tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryMetadataReader {
    classes: BTreeMap<Key, ClassDefinition>,
    property_classes: BTreeMap<Key, PropertyClass>,
}

impl InMemoryMetadataReader {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a class definition under its identifying key.
    ///
    /// A definition registered earlier under the same key is replaced.
    pub fn insert_class(&mut self, class: ClassDefinition) {
        self.classes.insert(class.key().clone(), class);
    }

    /// Registers a property class under its identifying key.
    pub fn insert_property_class(&mut self, property_class: PropertyClass) {
        self.property_classes
            .insert(property_class.key().clone(), property_class);
    }
}

impl MetadataReader for InMemoryMetadataReader {
    fn class_by_key(&self, key: &Key) -> Option<ClassDefinition> {
        self.classes.get(key).cloned()
    }

    fn property_class_by_key(&self, key: &Key) -> Option<PropertyClass> {
        self.property_classes.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryMetadataReader, MetadataReader};
    use crate::entities::{ClassDefinition, PropertyClass};
    use crate::value_objects::Key;

    #[test]
    fn resolves_registered_definitions() {
        let mut reader = InMemoryMetadataReader::new();
        let class_key = Key::new("_rc-requirement", "1");
        let property_class_key = Key::new("_pc-name", "1");
        reader.insert_class(ClassDefinition::new(class_key.clone()));
        reader.insert_property_class(PropertyClass::new(property_class_key.clone(), "Name"));

        let class = reader.class_by_key(&class_key).expect("registered class");
        assert_eq!(class.key(), &class_key);
        let property_class = reader
            .property_class_by_key(&property_class_key)
            .expect("registered property class");
        assert_eq!(property_class.title(), "Name");
    }

    #[test]
    fn unknown_keys_resolve_to_none() {
        let reader = InMemoryMetadataReader::new();
        assert!(reader.class_by_key(&Key::new("_rc-missing", "1")).is_none());
        assert!(reader
            .property_class_by_key(&Key::new("_pc-missing", "1"))
            .is_none());
    }

    #[test]
    fn lookups_are_revision_sensitive() {
        let mut reader = InMemoryMetadataReader::new();
        reader.insert_class(ClassDefinition::new(Key::new("_rc-requirement", "1")));
        assert!(reader
            .class_by_key(&Key::new("_rc-requirement", "2"))
            .is_none());
    }
}
