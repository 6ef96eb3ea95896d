//! Depth-first traversal of a [`Meta`] tree.

use crate::meta::{Field, FieldKind, Meta};

/// Invoke `action(parents, field)` for every field reachable from `meta`,
/// depth-first, in declaration order.
///
/// Nested fields are visited like any other field, before their children.
/// `parents` lists the enclosing nested fields from the root down. The first
/// error returned by `action` stops the walk and is returned as-is.
pub fn walk<E, F>(meta: &Meta, mut action: F) -> Result<(), E>
where
    F: FnMut(&[&'static Field], &'static Field) -> Result<(), E>,
{
    let mut parents = Vec::new();
    walk_fields(meta.fields, &mut parents, &mut action)
}

fn walk_fields<E, F>(
    fields: &'static [Field],
    parents: &mut Vec<&'static Field>,
    action: &mut F,
) -> Result<(), E>
where
    F: FnMut(&[&'static Field], &'static Field) -> Result<(), E>,
{
    for field in fields {
        action(parents, field)?;
        if let FieldKind::Nested { meta } = field.kind {
            parents.push(field);
            let result = walk_fields(meta.fields, parents, action);
            parents.pop();
            result?;
        }
    }
    Ok(())
}
