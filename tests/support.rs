use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Mock target: `fail` exits 1 with a stderr line, `slow` outlives short
/// timeouts, anything else sleeps 20ms and succeeds.
const MOCK_SCRIPT: &str = r#"#!/bin/sh
case "$1" in
  fail) echo "mock failure" >&2; exit 1 ;;
  slow) exec sleep 5 ;;
  *) sleep 0.02 ;;
esac
"#;

pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// A temp directory holding a skills tree with one `mock` target.
    ///
    /// # Errors
    ///
    /// Returns an error if any fixture file cannot be written.
    pub fn with_mock_skill() -> Result<Self, String> {
        let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
        let scripts = dir.path().join("skills").join("testing").join("mock").join("scripts");
        fs::create_dir_all(&scripts).map_err(|err| format!("create skill dir failed: {}", err))?;
        let skill_dir = scripts
            .parent()
            .ok_or_else(|| "scripts dir has no parent".to_owned())?;
        fs::write(skill_dir.join("SKILL.md"), "# mock\n")
            .map_err(|err| format!("write manifest failed: {}", err))?;
        fs::write(scripts.join("mock.sh"), MOCK_SCRIPT)
            .map_err(|err| format!("write script failed: {}", err))?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn skills_root(&self) -> PathBuf {
        self.dir.path().join("skills")
    }

    /// Runs the binary inside the workspace with the skills root preset.
    ///
    /// # Errors
    ///
    /// Returns an error if the binary cannot be launched.
    pub fn run<I, S>(&self, args: I) -> Result<Output, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let bin = procbench_bin()?;
        Command::new(bin)
            .arg("--skills-root")
            .arg(self.skills_root())
            .arg("--no-color")
            .args(args)
            .current_dir(self.path())
            .env("PROCBENCH_LOG", "error")
            .env_remove("NO_COLOR")
            .output()
            .map_err(|err| format!("run procbench failed: {}", err))
    }

    /// Parses a report file written inside the workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or not JSON.
    pub fn read_report(&self, name: &str) -> Result<serde_json::Value, String> {
        let raw = fs::read(self.path().join(name))
            .map_err(|err| format!("read report {} failed: {}", name, err))?;
        serde_json::from_slice(&raw).map_err(|err| format!("parse report failed: {}", err))
    }
}

#[must_use]
pub fn describe(output: &Output) -> String {
    format!(
        "status: {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn procbench_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_procbench").map_or_else(
        || Err("CARGO_BIN_EXE_procbench missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
