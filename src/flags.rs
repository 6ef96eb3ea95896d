//! Command-line flag registry.
//!
//! Every leaf field whose `arg` tag carries a non-empty name becomes one
//! long flag (`--name=value`). Flags are declared on a clap [`Command`] built
//! at parse time, so the help output (`-h`/`--help`) lists each flag with its
//! doc text, default value and environment variable.
//!
//! Values are kept as raw strings. Typing happens later, in the resolver, so
//! parsing only fails on structural problems: unknown flags, stray
//! positionals, a flag missing its value.

use std::collections::HashMap;
use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, Command};

use crate::error::TagfigError;
use crate::meta::{Field, dotted_name};
use crate::types::LoaderOptions;

/// Something the resolver can ask "was `--name` passed, and with what?".
///
/// Call order: `register_field` any number of times, `parse` once, then
/// `lookup_flag` any number of times.
pub trait FlagSource {
    fn register_field(
        &mut self,
        parents: &[&'static Field],
        field: &'static Field,
    ) -> Result<(), TagfigError>;

    fn parse(&mut self) -> Result<(), TagfigError>;

    /// `Some(value)` only if the flag is registered and was passed on the
    /// command line. `--name=` yields `Some("")`.
    fn lookup_flag(&self, name: &str) -> Option<&str>;
}

/// The last value seen for a flag and whether it was ever set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlagHolder {
    value: String,
    set: bool,
}

impl FlagHolder {
    fn set(&mut self, value: String) {
        self.value = value;
        self.set = true;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_set(&self) -> bool {
        self.set
    }
}

const HELP_FLAG: &str = "help";

/// Split an `arg` tag into flag name and doc text on the first separator.
///
/// `"port,Port to bind"` → `("port", "Port to bind")`, `"port"` →
/// `("port", "")`, `",doc only"` → `("", "doc only")`.
pub fn split_flag_spec<'a>(tag: &'a str, separator: &str) -> (&'a str, &'a str) {
    tag.split_once(separator).unwrap_or((tag, ""))
}

/// clap-backed [`FlagSource`].
pub struct FlagRegistry {
    opts: LoaderOptions,
    args: Vec<OsString>,
    decls: Vec<Arg>,
    holders: HashMap<String, FlagHolder>,
    owners: HashMap<String, String>,
    parsed: bool,
}

impl FlagRegistry {
    /// `args` excludes the program name.
    pub fn new(opts: LoaderOptions, args: Vec<OsString>) -> Self {
        Self {
            opts,
            args,
            decls: Vec::new(),
            holders: HashMap::new(),
            owners: HashMap::new(),
            parsed: false,
        }
    }

    /// Registry over the process arguments.
    pub fn from_env(opts: LoaderOptions) -> Self {
        Self::new(opts, std::env::args_os().skip(1).collect())
    }

    pub fn holder(&self, name: &str) -> Option<&FlagHolder> {
        self.holders.get(name)
    }

    /// Names of the registered flags, in registration order.
    pub fn flag_names(&self) -> Vec<&str> {
        self.decls.iter().map(|arg| arg.get_id().as_str()).collect()
    }

    /// Render the help text for the registered flags.
    pub fn render_help(&self) -> String {
        self.command().render_help().to_string()
    }

    /// `-h`/`--help` is only added while no field has claimed `help`.
    fn command(&self) -> Command {
        let command = Command::new(self.opts.title.clone())
            .no_binary_name(true)
            .disable_version_flag(true)
            .disable_help_flag(true)
            .args_override_self(true)
            .args(self.decls.iter().cloned());
        if self.owners.contains_key(HELP_FLAG) {
            return command;
        }
        command.arg(
            Arg::new(HELP_FLAG)
                .short('h')
                .long(HELP_FLAG)
                .action(ArgAction::Help)
                .help("Print help"),
        )
    }

    fn usage(&self, field: &Field, doc: &str) -> String {
        let default = field
            .tag(&self.opts.def_tag_name)
            .unwrap_or("not provided");
        let env = field
            .non_empty_tag(&self.opts.env_tag_name)
            .unwrap_or("not provided");
        let mut usage = String::new();
        if !doc.is_empty() {
            usage.push_str(doc);
            usage.push('\n');
        }
        usage.push_str(&format!("Default: {default}\nEnvironment: {env}"));
        usage
    }
}

impl FlagSource for FlagRegistry {
    fn register_field(
        &mut self,
        parents: &[&'static Field],
        field: &'static Field,
    ) -> Result<(), TagfigError> {
        if self.parsed {
            return Err(TagfigError::AlreadyParsed);
        }
        if field.leaf_kind().is_none() {
            return Ok(());
        }
        let Some(tag) = field.non_empty_tag(&self.opts.arg_tag_name) else {
            return Ok(());
        };
        let (name, doc) = split_flag_spec(tag, &self.opts.arg_separator);
        if name.is_empty() {
            return Ok(());
        }

        let owner = dotted_name(parents, field);
        if let Some(first) = self.owners.get(name) {
            return Err(TagfigError::DuplicateFlag {
                flag: name.to_string(),
                first: first.clone(),
                second: owner,
            });
        }

        let arg = Arg::new(name.to_string())
            .long(name.to_string())
            .value_name("VALUE")
            .num_args(1)
            .action(ArgAction::Set)
            .value_parser(clap::value_parser!(String))
            .allow_hyphen_values(true)
            .help(self.usage(field, doc));

        tracing::trace!(flag = name, field = %owner, "registered flag");
        self.decls.push(arg);
        self.holders.insert(name.to_string(), FlagHolder::default());
        self.owners.insert(name.to_string(), owner);
        Ok(())
    }

    fn parse(&mut self) -> Result<(), TagfigError> {
        if self.parsed {
            return Err(TagfigError::AlreadyParsed);
        }
        self.parsed = true;

        let matches = self
            .command()
            .try_get_matches_from(self.args.iter().cloned())
            .map_err(TagfigError::Parse)?;

        for (name, holder) in self.holders.iter_mut() {
            if matches.value_source(name) != Some(ValueSource::CommandLine) {
                continue;
            }
            if let Some(value) = matches.get_one::<String>(name) {
                holder.set(value.clone());
            }
        }

        tracing::debug!(
            supplied = self.holders.values().filter(|h| h.is_set()).count(),
            registered = self.holders.len(),
            "parsed command-line flags"
        );
        Ok(())
    }

    fn lookup_flag(&self, name: &str) -> Option<&str> {
        self.holders
            .get(name)
            .filter(|holder| holder.is_set())
            .map(FlagHolder::value)
    }
}
