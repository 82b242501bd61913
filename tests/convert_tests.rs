//! Tests of the external conversion adapter.
//!
//! The real rebuilder is a Python 2 script nobody wants in CI, so the
//! subprocess path is exercised with a shell stand-in that honors the same
//! flag contract, and everything else goes through a mock.

use std::io;
use std::path::{Path, PathBuf};

use evscribe::{CONT, Convert, EventWriter, Rebuilder, RestartType, ToolConfig, verbose};

struct Recorder;

impl Convert for Recorder {
    fn convert(&self, unpacked: &str) -> io::Result<String> {
        Ok(format!("converted {} lines", unpacked.lines().count()))
    }
}

struct Broken;

impl Convert for Broken {
    fn convert(&self, _unpacked: &str) -> io::Result<String> {
        Err(io::Error::other("tool not installed"))
    }
}

#[test]
fn verbose_passes_the_full_rendered_script() {
    let mut e = EventWriter::new(11810001, RestartType::RunOnce);
    e.if_entity_dead(CONT, 1810800);
    e.kill_boss(1810800);
    let result = verbose(&e, &Recorder).unwrap();
    assert_eq!(result, "converted 3 lines");
}

#[test]
fn tool_failures_reach_the_caller_untranslated() {
    let e = EventWriter::new(0, RestartType::RunOnce);
    let err = verbose(&e, &Broken).unwrap_err();
    assert_eq!(err.to_string(), "tool not installed");
}

#[cfg(unix)]
#[test]
fn rebuilder_invokes_the_tool_with_the_documented_flags() {
    let fixture =
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/fake_rebuilder.sh");
    let config = ToolConfig {
        interpreter: PathBuf::from("sh"),
        rebuilder: fixture,
        templates_dir: PathBuf::from("."),
    };
    let rebuilder = Rebuilder::new(config);

    let mut e = EventWriter::new(11810001, RestartType::RunOnce);
    e.debug_pendant();
    let converted = verbose(&e, &rebuilder).unwrap();
    assert_eq!(converted, format!("VERBOSE\n{}", e.render()));
}
