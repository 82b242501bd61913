//! External conversion adapter
//!
//! The unpacked text this crate emits is only an intermediate form; a
//! separately-maintained rebuilder script turns it into a verbose or packed
//! file the engine can load. That tool is an opaque collaborator reached
//! through the [`Convert`] trait, so everything else in the crate can be
//! tested without it installed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};

use crate::writer::EventWriter;

/// Paths to the external rebuilder toolchain.
///
/// The defaults match the toolchain's customary Windows install locations;
/// load a JSON file to point somewhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Python 2 executable used to run the rebuilder.
    pub interpreter: PathBuf,
    /// The rebuilder script itself.
    pub rebuilder: PathBuf,
    /// Folder holding the unpacked files used as templates.
    pub templates_dir: PathBuf,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from(r"C:\python27\python.exe"),
            rebuilder: PathBuf::from(r"C:\HotPocketRemix\emevd_rebuilder.py"),
            templates_dir: PathBuf::from(r"C:\HotPocketRemix\UnpackedEMEVD"),
        }
    }
}

impl ToolConfig {
    /// Load the configuration from a JSON file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }
}

/// Text-in, text-out conversion through the external toolchain.
pub trait Convert {
    /// Converts unpacked text to its verbose rendering.
    ///
    /// The external tool owns its own error taxonomy; its stderr reaches the
    /// user unmodified and only the plumbing around the call is reported
    /// here.
    fn convert(&self, unpacked: &str) -> io::Result<String>;
}

/// Runs the rebuilder script as a subprocess.
pub struct Rebuilder {
    config: ToolConfig,
}

impl Rebuilder {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }
}

impl Convert for Rebuilder {
    fn convert(&self, unpacked: &str) -> io::Result<String> {
        let input = std::env::temp_dir().join("temp.unpack.txt");
        let output = std::env::temp_dir().join("temp.verbose.txt");
        fs::write(&input, unpacked)?;

        log::debug!(
            "running {} {} -p {} -v -o {}",
            self.config.interpreter.display(),
            self.config.rebuilder.display(),
            input.display(),
            output.display()
        );
        let status = Command::new(&self.config.interpreter)
            .arg(&self.config.rebuilder)
            .arg("-p")
            .arg(&input)
            .arg("-v")
            .arg("-o")
            .arg(&output)
            .status()?;
        if !status.success() {
            return Err(io::Error::other(format!("rebuilder exited with {status}")));
        }

        fs::read_to_string(&output)
    }
}

/// Renders the script and hands it to the conversion tool, returning the
/// verbose form for inspection.
pub fn verbose<C: Convert + ?Sized>(script: &EventWriter, tool: &C) -> io::Result<String> {
    tool.convert(&script.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RestartType;

    struct Uppercase;

    impl Convert for Uppercase {
        fn convert(&self, unpacked: &str) -> io::Result<String> {
            Ok(unpacked.to_uppercase())
        }
    }

    #[test]
    fn verbose_feeds_the_rendered_script_to_the_tool() {
        let mut script = EventWriter::new(7, RestartType::RerunOnRest);
        script.end();
        let converted = verbose(&script, &Uppercase).unwrap();
        assert_eq!(converted, "7, 1\n 1000[04] (0)\n".to_uppercase());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = ToolConfig {
            interpreter: PathBuf::from("/usr/bin/python2"),
            rebuilder: PathBuf::from("/opt/rebuilder/emevd_rebuilder.py"),
            templates_dir: PathBuf::from("/opt/rebuilder/templates"),
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: ToolConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn default_config_points_at_the_customary_install() {
        let config = ToolConfig::default();
        assert_eq!(config.interpreter, PathBuf::from(r"C:\python27\python.exe"));
    }
}
