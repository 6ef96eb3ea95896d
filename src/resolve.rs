//! Per-field value resolution.
//!
//! For one leaf field, pick the raw string from the first source that has
//! one, then coerce it:
//!
//! 1. the command-line flag named by the `arg` tag, if it was passed
//! 2. the environment variable named by the `env` tag, if it is set (even
//!    to an empty string)
//! 3. the literal in the `def` tag, if the tag is present (even if empty)
//!
//! A field with none of these resolves to `None` and keeps whatever value
//! the target already holds. A coercion failure is final: the resolver never
//! falls back to a lower-priority source after a higher one matched.

use std::env::VarError;
use std::fmt;

use serde_json::Value;

use crate::coerce::coerce;
use crate::env::EnvSource;
use crate::error::TagfigError;
use crate::flags::{FlagSource, split_flag_spec};
use crate::meta::{Field, dotted_name};
use crate::types::LoaderOptions;

pub trait FieldResolver {
    /// Resolve one field. Nested fields always resolve to `None`; only their
    /// leaf descendants carry values.
    fn resolve_field(
        &self,
        parents: &[&'static Field],
        field: &'static Field,
        flags: &dyn FlagSource,
    ) -> Result<Option<Value>, TagfigError>;
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Flag,
    Env,
    Default,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Flag => write!(f, "flag"),
            Source::Env => write!(f, "env"),
            Source::Default => write!(f, "default"),
        }
    }
}

/// Resolves fields from their `arg`, `env` and `def` tags.
pub struct TagResolver {
    opts: LoaderOptions,
    env: EnvSource,
}

impl TagResolver {
    pub fn new(opts: LoaderOptions, env: EnvSource) -> Self {
        Self { opts, env }
    }

    /// The winning source and its raw string, before coercion.
    pub fn pick(
        &self,
        parents: &[&'static Field],
        field: &'static Field,
        flags: &dyn FlagSource,
    ) -> Result<Option<(Source, String)>, TagfigError> {
        if let Some(tag) = field.non_empty_tag(&self.opts.arg_tag_name) {
            let (name, _doc) = split_flag_spec(tag, &self.opts.arg_separator);
            if let Some(value) = flags.lookup_flag(name) {
                return Ok(Some((Source::Flag, value.to_string())));
            }
        }

        if let Some(var) = field.non_empty_tag(&self.opts.env_tag_name) {
            match self.env.var(var) {
                Ok(value) => return Ok(Some((Source::Env, value))),
                Err(VarError::NotPresent) => {}
                Err(VarError::NotUnicode(_)) => {
                    return Err(TagfigError::NonUnicodeEnv {
                        field: dotted_name(parents, field),
                        var: var.to_string(),
                    });
                }
            }
        }

        Ok(field
            .tag(&self.opts.def_tag_name)
            .map(|value| (Source::Default, value.to_string())))
    }
}

impl FieldResolver for TagResolver {
    fn resolve_field(
        &self,
        parents: &[&'static Field],
        field: &'static Field,
        flags: &dyn FlagSource,
    ) -> Result<Option<Value>, TagfigError> {
        let Some(kind) = field.leaf_kind() else {
            return Ok(None);
        };
        let Some((source, raw)) = self.pick(parents, field, flags)? else {
            tracing::trace!(field = %dotted_name(parents, field), "no source, keeping current value");
            return Ok(None);
        };

        let value = coerce(kind, &raw).map_err(|e| TagfigError::Conversion {
            field: dotted_name(parents, field),
            source: e,
        })?;
        tracing::debug!(field = %dotted_name(parents, field), %source, "resolved field");
        Ok(Some(value))
    }
}
