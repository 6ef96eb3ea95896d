use std::ffi::OsString;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::env::{self, EnvSource};
use crate::error::TagfigError;
use crate::flags::{FlagRegistry, FlagSource};
use crate::merge::overlay;
use crate::meta::Schema;
use crate::resolve::{FieldResolver, TagResolver};
use crate::tree::ResolvedTree;
use crate::types::LoaderOptions;
use crate::walk::walk;

/// Populates [`Schema`] structs from flags, environment variables and
/// defaults.
///
/// A loader holds no per-load state: every [`load`](Self::load) builds a
/// fresh flag registry, so one loader can be reused.
#[derive(Debug, Clone)]
pub struct Loader {
    opts: LoaderOptions,
    args: Option<Vec<OsString>>,
    env: EnvSource,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(LoaderOptions::default())
    }
}

impl Loader {
    /// Create a loader. Empty option strings are filled from
    /// [`LoaderOptions::default()`].
    pub fn new(opts: LoaderOptions) -> Self {
        Self {
            opts: opts.complete(),
            args: None,
            env: EnvSource::Process,
        }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.opts
    }

    /// Parse these arguments instead of the process's. The program name must
    /// not be included.
    pub fn args<I, T>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Read `env` tags from this table instead of the process environment.
    pub fn env_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env = EnvSource::vars(vars);
        self
    }

    /// Replace the environment source wholesale.
    pub fn env_source(mut self, env: EnvSource) -> Self {
        self.env = env;
        self
    }

    /// Load configuration into `target`.
    ///
    /// Fields that resolve from no source keep their current value. On error
    /// `target` is left untouched.
    pub fn load<T>(&self, target: &mut T) -> Result<(), TagfigError>
    where
        T: Schema + Serialize + DeserializeOwned,
    {
        let mut flags = match &self.args {
            Some(args) => FlagRegistry::new(self.opts.clone(), args.clone()),
            None => FlagRegistry::from_env(self.opts.clone()),
        };
        let resolver = TagResolver::new(self.opts.clone(), self.env.clone());
        self.load_with(target, &mut flags, &resolver)
    }

    /// Load into `T::default()` and return it.
    pub fn load_default<T>(&self) -> Result<T, TagfigError>
    where
        T: Schema + Serialize + DeserializeOwned + Default,
    {
        let mut target = T::default();
        self.load(&mut target)?;
        Ok(target)
    }

    /// The load pipeline with injectable flag source and resolver.
    ///
    /// 1. Encode the target; it must serialize to an object
    /// 2. Optionally ingest `.env`
    /// 3. Register a flag for every tagged leaf, then parse once
    /// 4. Resolve every leaf into a tree shaped like the struct
    /// 5. Overlay the tree on the encoded target and decode the result
    pub(crate) fn load_with<T>(
        &self,
        target: &mut T,
        flags: &mut dyn FlagSource,
        resolver: &dyn FieldResolver,
    ) -> Result<(), TagfigError>
    where
        T: Schema + Serialize + DeserializeOwned,
    {
        let type_name = std::any::type_name::<T>();
        let Value::Object(mut base) = serde_json::to_value(&*target).map_err(TagfigError::Encode)?
        else {
            return Err(TagfigError::NotStruct { type_name });
        };

        if self.opts.use_dot_env {
            env::load_dot_env(self.opts.dot_env_path.as_deref());
        }

        let meta = T::META;
        walk(&meta, |parents, field| flags.register_field(parents, field))?;
        flags.parse()?;

        let mut tree = ResolvedTree::new();
        walk(&meta, |parents, field| {
            let value = resolver.resolve_field(parents, field, &*flags)?;
            tree.insert(parents, field, value);
            Ok::<_, TagfigError>(())
        })?;

        overlay(&mut base, tree.into_map(), &meta);
        *target = serde_json::from_value(Value::Object(base)).map_err(TagfigError::Assign)?;
        tracing::debug!(config = type_name, "configuration loaded");
        Ok(())
    }
}
