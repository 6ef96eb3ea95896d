//! The resolved value tree: one load's worth of values, nested like the
//! target struct.

use serde_json::{Map, Value};

use crate::meta::{Field, FieldKind};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResolvedTree {
    root: Map<String, Value>,
}

impl ResolvedTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of resolving `field` below `parents`.
    ///
    /// Nested fields always get an object, even if none of their children
    /// resolve, so they round-trip into a zero-valued struct rather than a
    /// missing one. Leaves are only recorded when they resolved to a value.
    pub fn insert(&mut self, parents: &[&Field], field: &Field, value: Option<Value>) {
        let branch = self.branch(parents);
        match (field.kind, value) {
            (FieldKind::Nested { .. }, _) => {
                branch
                    .entry(field.name)
                    .or_insert_with(|| Value::Object(Map::new()));
            }
            (FieldKind::Leaf { .. }, Some(value)) => {
                branch.insert(field.name.to_string(), value);
            }
            (FieldKind::Leaf { .. }, None) => {}
        }
    }

    #[cfg(test)]
    pub fn get(&self, dotted_key: &str) -> Option<&Value> {
        let mut segments = dotted_key.split('.');
        let first = segments.next()?;
        segments.try_fold(self.root.get(first)?, |value, segment| value.get(segment))
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.root
    }

    fn branch(&mut self, parents: &[&Field]) -> &mut Map<String, Value> {
        let mut current = &mut self.root;
        for parent in parents {
            let slot = current
                .entry(parent.name)
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            current = slot
                .as_object_mut()
                .expect("tagfig: tree slot was just made an object");
        }
        current
    }
}
