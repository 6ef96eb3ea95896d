//! Tag-driven configuration for Rust applications. Describe a struct, tag its
//! fields, and load.
//!
//! Each field of a config struct may carry three tags: a default literal
//! (`def`), the environment variable bound to it (`env`), and the
//! command-line flag bound to it (`arg`). Loading resolves every field from
//! the first source that has a value, recursing into nested structs:
//!
//! ```text
//! --flag=value        arg:"flag,Doc text"
//!        ↓ else
//! $ENV_VAR            env:"ENV_VAR"         (set, even to "")
//!        ↓ else
//! default literal     def:"literal"         (present, even if "")
//!        ↓ else
//! current value       left untouched
//! ```
//!
//! ```ignore
//! let config: AppConfig = Loader::default().load_default()?;
//! ```
//!
//! # Describing a struct
//!
//! Rust has no runtime reflection, so a config struct describes itself by
//! implementing [`Schema`]. The schema is a `const` tree of [`Field`]s, one
//! per struct field in declaration order, each with its serde key, a
//! [`Kind`], and its tags:
//!
//! ```ignore
//! #[derive(Serialize, Deserialize, Default)]
//! struct AppConfig {
//!     host: String,
//!     port: u16,
//!     database: DbConfig,
//! }
//!
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
//! Nested fields are descended into; their own tags are ignored. Only leaf
//! fields are bound to flags and resolved.
//!
//! # Values
//!
//! Raw strings from all three sources go through the same coercion:
//! [`Kind::String`] fields take them verbatim, every other kind parses them
//! as a JSON literal (`8080`, `true`, `1.5`, `[1, 2]`, `{"k": "v"}`). A raw
//! value that is not valid JSON fails the load with the dotted name of the
//! field.
//!
//! Resolved values are collected into a tree shaped like the struct, laid
//! over the target's current serialized state, and deserialized back with
//! `serde_json`. That last step is the type check: `--port=true` is valid
//! JSON but fails to deserialize into a `u16`. Nothing is written to the
//! target unless the whole load succeeds.
//!
//! # Command line
//!
//! Every leaf with a non-empty `arg` name becomes a long flag accepting
//! `--name=value` or `--name value`. `-h`/`--help` prints each flag with its
//! doc text, default and environment variable (see
//! [`TagfigError::is_help`]). Unknown flags and positional arguments fail
//! the load, as does a flag name claimed by two fields.
//!
//! # Options
//!
//! [`LoaderOptions`] renames the three tags, sets the help title and the
//! flag doc separator, and turns on `.env` ingestion (behind the default
//! `dotenv` feature). Empty option strings fall back to the defaults.
//!
//! For tests and embedding, [`Loader::args`] and [`Loader::env_vars`] swap
//! the process arguments and environment for explicit values.

pub mod error;
pub mod meta;
pub mod types;

mod coerce;
mod env;
mod flags;
mod loader;
mod merge;
mod resolve;
mod tree;
mod walk;

#[cfg(test)]
mod fixtures;

pub use env::EnvSource;
pub use error::TagfigError;
pub use flags::{FlagHolder, FlagRegistry, FlagSource};
pub use loader::Loader;
pub use meta::{Field, FieldKind, Kind, Meta, Schema};
pub use resolve::{FieldResolver, Source, TagResolver};
pub use types::LoaderOptions;
