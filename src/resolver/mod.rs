//! Mapping symbolic target names onto runnable entry points.
mod fixed;
mod skill_tree;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;

pub use fixed::FixedResolver;
pub use skill_tree::{SKILL_MANIFEST, SkillTreeResolver, discover_root};

/// Looks up the executable entry point for a target name.
pub trait Resolver: Send + Sync {
    /// Resolves `name` to a runnable target.
    ///
    /// # Errors
    ///
    /// Returns an error when no entry point exists for `name`.
    fn resolve(&self, name: &str) -> Result<Target, ResolveError>;
}

/// A runnable entry point: the program to spawn plus any arguments that
/// must precede the caller's arguments (e.g. the script path when the entry
/// point runs under an interpreter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    program: PathBuf,
    leading_args: Vec<OsString>,
}

impl Target {
    /// A target whose entry point is spawned directly.
    #[must_use]
    pub fn executable(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// A script run through `interpreter`, e.g. `python3 tool.py`.
    #[must_use]
    pub fn interpreted(interpreter: impl Into<PathBuf>, script: &Path) -> Self {
        Self {
            program: interpreter.into(),
            leading_args: vec![script.as_os_str().to_owned()],
        }
    }

    /// Appends fixed arguments that are passed ahead of the caller's arguments.
    #[must_use]
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.leading_args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    #[must_use]
    pub fn leading_args(&self) -> &[OsString] {
        &self.leading_args
    }

    /// Entry point shown to the user: the script when interpreted, else the program.
    #[must_use]
    pub fn entry_point(&self) -> String {
        self.leading_args.first().map_or_else(
            || self.program.display().to_string(),
            |script| Path::new(script).display().to_string(),
        )
    }
}
