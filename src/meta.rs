//! Static schema for config structs.
//!
//! Rust has no runtime reflection, so a config struct describes its own
//! shape by implementing [`Schema`]. The description is a `const` tree of
//! [`Meta`] and [`Field`] values: one entry per field, in declaration order,
//! each carrying a table of `(tag, value)` pairs much like struct tags.
//!
//! ```ignore
//! impl Schema for AppConfig {
//!     const META: Meta = Meta {
//!         name: "AppConfig",
//!         fields: &[
//!             Field::leaf("host", Kind::String, &[("def", "localhost"), ("env", "APP_HOST")]),
//!             Field::leaf("port", Kind::Integer, &[("def", "8080"), ("arg", "port,Port to bind")]),
//!             Field::nested("database", &DbConfig::META),
//!         ],
//!     };
//! }
//! ```
//!
//! Field names are the serde keys of the struct, so `#[serde(rename)]`
//! attributes must be mirrored here.

/// Implemented by every struct the loader can populate.
pub trait Schema {
    const META: Meta;
}

/// The fields of one struct.
#[derive(Debug, Clone, Copy)]
pub struct Meta {
    /// Type name, used in diagnostics and as the fallback flag-set title.
    pub name: &'static str,
    pub fields: &'static [Field],
}

/// One struct field: its serde key, its kind and its tags.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub tags: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// A value resolved from a flag, an env var or a default.
    Leaf { kind: Kind },
    /// A struct-typed field, possibly wrapped in `Option`. Only its children
    /// are resolved.
    ///
    /// An `Option<Sub>` that is `None` is rebuilt from the resolved children
    /// alone, so `Sub` needs `#[serde(default)]` for any field left
    /// unresolved.
    Nested { meta: &'static Meta },
}

/// How raw strings are coerced for a leaf.
///
/// Only [`Kind::String`] changes behavior: string fields take raw values
/// verbatim, every other kind parses them as a JSON literal. The remaining
/// variants document intent and show up in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Integer,
    Float,
    Bool,
    /// Maps, sequences, enums and anything else expressed as JSON.
    Other,
}

impl Field {
    pub const fn leaf(
        name: &'static str,
        kind: Kind,
        tags: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            name,
            kind: FieldKind::Leaf { kind },
            tags,
        }
    }

    pub const fn nested(name: &'static str, meta: &'static Meta) -> Self {
        Self {
            name,
            kind: FieldKind::Nested { meta },
            tags: &[],
        }
    }

    /// Replace the tag table. Mostly useful on nested fields, whose tags are
    /// carried but never consulted.
    pub const fn with_tags(self, tags: &'static [(&'static str, &'static str)]) -> Self {
        Self { tags, ..self }
    }

    /// Look up a tag by name. `Some("")` means the tag is present but empty.
    ///
    /// If a tag appears more than once the first entry wins.
    pub fn tag(&self, name: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// Like [`tag`](Self::tag), but treats an empty value as absent.
    pub fn non_empty_tag(&self, name: &str) -> Option<&'static str> {
        self.tag(name).filter(|value| !value.is_empty())
    }

    /// The leaf kind, or `None` for nested fields.
    pub fn leaf_kind(&self) -> Option<Kind> {
        match self.kind {
            FieldKind::Leaf { kind } => Some(kind),
            FieldKind::Nested { .. } => None,
        }
    }
}

/// Dotted name of a field below its parents, e.g. `"server.tls.cert"`.
pub fn dotted_name(parents: &[&Field], field: &Field) -> String {
    let mut name = String::new();
    for parent in parents {
        name.push_str(parent.name);
        name.push('.');
    }
    name.push_str(field.name);
    name
}
