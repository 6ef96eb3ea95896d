use std::path::PathBuf;

/// Knobs for a [`Loader`](crate::Loader).
///
/// Empty strings mean "use the default": [`Loader::new`](crate::Loader::new)
/// fills them from [`LoaderOptions::default()`], so a loader never runs with
/// an empty tag name or title.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderOptions {
    /// Name shown at the top of `-h`/`--help` output.
    pub title: String,
    /// Tag holding a field's default literal.
    pub def_tag_name: String,
    /// Tag holding the environment variable bound to a field.
    pub env_tag_name: String,
    /// Tag holding the flag spec, `name` or `name<separator>doc`.
    pub arg_tag_name: String,
    /// Separator between flag name and doc text in the flag spec.
    pub arg_separator: String,
    /// Read a `.env` file into the process environment before resolving.
    pub use_dot_env: bool,
    /// Explicit `.env` path. `None` searches from the current directory up.
    pub dot_env_path: Option<PathBuf>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            title: "configs".into(),
            def_tag_name: "def".into(),
            env_tag_name: "env".into(),
            arg_tag_name: "arg".into(),
            arg_separator: ",".into(),
            use_dot_env: false,
            dot_env_path: None,
        }
    }
}

impl LoaderOptions {
    /// Fill every empty string field from the defaults.
    pub fn complete(mut self) -> Self {
        let defaults = Self::default();
        fill(&mut self.title, defaults.title);
        fill(&mut self.def_tag_name, defaults.def_tag_name);
        fill(&mut self.env_tag_name, defaults.env_tag_name);
        fill(&mut self.arg_tag_name, defaults.arg_tag_name);
        fill(&mut self.arg_separator, defaults.arg_separator);
        self
    }
}

fn fill(slot: &mut String, default: String) {
    if slot.is_empty() {
        *slot = default;
    }
}
