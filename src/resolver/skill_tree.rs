use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;

use super::{Resolver, Target};

/// File that marks a directory as a skill.
pub const SKILL_MANIFEST: &str = "SKILL.md";
/// Directory inside a skill holding its entry points.
const SCRIPTS_DIR: &str = "scripts";

/// Picks the root of the skills tree.
///
/// An explicit root wins. Otherwise the nearest ancestor of `start` (including
/// `start` itself) containing `marker` is used, falling back to `start`.
#[must_use]
pub fn discover_root(explicit: Option<&Path>, marker: &str, start: &Path) -> PathBuf {
    if let Some(root) = explicit {
        return root.to_path_buf();
    }
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_file())
        .map_or_else(|| start.to_path_buf(), Path::to_path_buf)
}

/// Resolves targets by walking a skills tree on disk.
///
/// A target named `foo` is the first directory called `foo` (in sorted,
/// depth-first order) that contains a `SKILL.md`. Its entry point is the first
/// file under `scripts/` that either has an extension with a configured
/// interpreter or is executable.
#[derive(Debug, Clone)]
pub struct SkillTreeResolver {
    root: PathBuf,
    interpreters: BTreeMap<String, String>,
}

impl SkillTreeResolver {
    #[must_use]
    pub const fn new(root: PathBuf, interpreters: BTreeMap<String, String>) -> Self {
        Self { root, interpreters }
    }

    fn find_skill_dir(&self, name: &str) -> Result<Option<PathBuf>, ResolveError> {
        let mut pending = vec![self.root.clone()];
        let mut is_root = true;
        while let Some(dir) = pending.pop() {
            let children = match sorted_entries(&dir) {
                Ok(children) => children,
                Err(err) if is_root => {
                    return Err(ResolveError::Scan {
                        path: dir,
                        source: err,
                    });
                }
                Err(err) => {
                    tracing::debug!("Skipping unreadable directory {}: {}", dir.display(), err);
                    continue;
                }
            };
            is_root = false;

            let mut subdirs = Vec::new();
            for (path, file_type) in children {
                if !file_type.is_dir() || is_hidden(&path) {
                    continue;
                }
                if path.file_name().is_some_and(|file| file == name)
                    && path.join(SKILL_MANIFEST).is_file()
                {
                    return Ok(Some(path));
                }
                subdirs.push(path);
            }
            // Reverse so the stack pops siblings in sorted order.
            pending.extend(subdirs.into_iter().rev());
        }
        Ok(None)
    }

    fn entry_point(&self, skill_dir: &Path) -> Result<Target, ResolveError> {
        let scripts = skill_dir.join(SCRIPTS_DIR);
        let entries = sorted_entries(&scripts).map_err(|err| {
            tracing::debug!("No scripts in {}: {}", scripts.display(), err);
            ResolveError::NoEntryPoint {
                dir: scripts.clone(),
            }
        })?;
        entries
            .into_iter()
            .filter(|(_, file_type)| file_type.is_file())
            .find_map(|(path, _)| self.target_for_file(&path))
            .ok_or(ResolveError::NoEntryPoint { dir: scripts })
    }

    fn target_for_file(&self, path: &Path) -> Option<Target> {
        let interpreter = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.interpreters.get(&ext.to_ascii_lowercase()));
        if let Some(interpreter) = interpreter {
            return Some(Target::interpreted(interpreter, path));
        }
        is_executable(path).then(|| Target::executable(path))
    }
}

impl Resolver for SkillTreeResolver {
    fn resolve(&self, name: &str) -> Result<Target, ResolveError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ResolveError::NotFound {
                name: name.to_owned(),
            });
        }

        let direct = Path::new(name);
        if direct.components().count() > 1 && direct.is_file() {
            tracing::debug!("Using {} directly as the entry point", direct.display());
            return self
                .target_for_file(direct)
                .ok_or_else(|| ResolveError::NoEntryPoint {
                    dir: direct.to_path_buf(),
                });
        }

        let skill_dir = self
            .find_skill_dir(name)?
            .ok_or_else(|| ResolveError::NotFound {
                name: name.to_owned(),
            })?;
        tracing::debug!("Resolved '{}' to {}", name, skill_dir.display());
        self.entry_point(&skill_dir)
    }
}

fn sorted_entries(dir: &Path) -> std::io::Result<Vec<(PathBuf, std::fs::FileType)>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        entries.push((entry.path(), entry.file_type()?));
    }
    entries.sort_by(|left, right| left.0.cmp(&right.0));
    Ok(entries)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "exe" | "bat" | "cmd"))
}
