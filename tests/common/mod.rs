//! Shared testing utilities for tutorgate CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PROBLEM_YAML: &str = r#"id: prob_001
statement: Triangle ABC has AB = AC and angle A = 40°. Find angle B.
archetype: constraint_translation
skill_track: Geometry without Formulas
hints:
  - What type of triangle is this?
  - In an isosceles triangle, what about base angles?
  - If angle A = 40°, how much is left for base angles?
answer_key: 70°
solution: Since AB = AC, base angles B and C are equal, so B = (180° - 40°) / 2 = 70°.
"#;

pub const STUDENT_YAML: &str = "level: junior\nage: 11\nattempts_on_this_archetype: 2\n";

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Write `content` to `name` under the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn write_problem(&self) -> PathBuf {
        self.write_file("problem.yml", PROBLEM_YAML)
    }

    pub fn write_student(&self) -> PathBuf {
        self.write_file("student.yml", STUDENT_YAML)
    }

    /// Build a command for invoking the compiled `tutorgate` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("tutorgate").expect("Failed to locate tutorgate binary");
        cmd.current_dir(self.work_dir())
            .env_remove("TUTORGATE_CONFIG")
            .env_remove("TUTORGATE_LOG")
            .env_remove("TUTORGATE_LOG_FORMAT");
        cmd
    }
}
