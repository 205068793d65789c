use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::Key;

/// Schema definition for a resource or statement kind.
///
/// Resource classes and statement classes share one shape: an identifying
/// key, at most one parent reachable through `extends` and an ordered list of
/// directly declared property classes. Unifying both kinds keeps property
/// resolution to a single implementation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDefinition {
    key: Key,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extends: Option<Key>,
    property_classes: Vec<Key>,
}

impl ClassDefinition {
    /// Creates a new [`ClassDefinition`] with the supplied identifying key.
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            title: None,
            extends: None,
            property_classes: Vec::new(),
        }
    }

    /// Sets a human friendly title for the class.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Declares the parent class this class extends.
    #[must_use]
    pub fn with_extends(mut self, parent: Key) -> Self {
        self.extends = Some(parent);
        self
    }

    /// Appends a directly declared property class reference.
    ///
    /// Declaration order is significant: created instances carry their
    /// property slots in exactly this order.
    #[must_use]
    pub fn with_property_class(mut self, property_class: Key) -> Self {
        self.property_classes.push(property_class);
        self
    }

    /// Returns the identifying key of the class.
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Returns the optional display title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the parent class key, if the class extends one.
    #[must_use]
    pub fn extends(&self) -> Option<&Key> {
        self.extends.as_ref()
    }

    /// Returns the directly declared property class keys in declaration order.
    #[must_use]
    pub fn property_classes(&self) -> &[Key] {
        &self.property_classes
    }
}

/// Schema definition of a single property slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyClass {
    key: Key,
    title: String,
}

impl PropertyClass {
    /// Creates a new [`PropertyClass`] with the supplied key and display title.
    ///
    /// The title doubles as the inheritance de-duplication key: two property
    /// classes sharing a title denote the same logical slot even when their
    /// keys differ.
    #[must_use]
    pub fn new(key: Key, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
        }
    }

    /// Returns the identifying key of the property class.
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Literal value carried by a property slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(pub String);

/// Instance-level value container bound to a [`PropertyClass`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Key of the property class this slot instantiates.
    pub class: Key,
    /// Values filled in by the caller; always empty immediately after creation.
    pub values: Vec<Value>,
}

impl Property {
    /// Creates an empty property slot bound to the given property class key.
    #[must_use]
    pub fn empty(class: Key) -> Self {
        Self {
            class,
            values: Vec::new(),
        }
    }
}

/// A typed data-node instance produced by the factory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Identifier of this resource.
    pub id: String,
    /// Revision of this resource.
    pub revision: String,
    /// Key of the class this resource instantiates.
    pub class: Key,
    /// Property slots in resolution order.
    pub properties: Vec<Property>,
    /// Creation timestamp.
    pub changed_at: DateTime<Utc>,
    /// Identity of the acting user or process.
    pub changed_by: String,
}

impl Resource {
    /// Returns the identity key formed by this resource's id and revision.
    #[must_use]
    pub fn key(&self) -> Key {
        Key::new(self.id.clone(), self.revision.clone())
    }
}

/// A typed relationship instance linking two resource-version keys.
///
/// Subject and object are stored verbatim; whether they reference existing
/// resources is the caller's concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    /// Identifier of this statement.
    pub id: String,
    /// Revision of this statement.
    pub revision: String,
    /// Key of the class this statement instantiates.
    pub class: Key,
    /// Property slots in resolution order.
    pub properties: Vec<Property>,
    /// Creation timestamp.
    pub changed_at: DateTime<Utc>,
    /// Identity of the acting user or process.
    pub changed_by: String,
    /// Key of the subject resource version.
    pub subject: Key,
    /// Key of the object resource version.
    pub object: Key,
}

impl Statement {
    /// Returns the identity key formed by this statement's id and revision.
    #[must_use]
    pub fn key(&self) -> Key {
        Key::new(self.id.clone(), self.revision.clone())
    }
}

/// Placement wrapper referencing a resource by key.
///
/// Hierarchy position and children are left for the caller to arrange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Key of the referenced resource version.
    pub resource_reference: Key,
    /// Child nodes of this node.
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Node {
    /// Creates a new leaf [`Node`] referencing the given resource version.
    #[must_use]
    pub fn new(resource_reference: Key) -> Self {
        Self {
            resource_reference,
            nodes: Vec::new(),
        }
    }
}
