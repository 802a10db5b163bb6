//! Shared fixtures for CLI tests.
//!
//! `TestEnv` holds an isolated working directory, a game directory inside it
//! and an empty home, and runs the `splashpack` binary with the user's
//! environment (API keys, config overrides) scrubbed.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub const GAME_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Star Catcher</title>
  <link rel="stylesheet" href="css/style.css">
</head>
<body>
  <canvas id="game"></canvas>
  <img src="assets/star.png" alt="star">
  <script src="js/game.js"></script>
</body>
</html>
"#;

pub const GAME_CSS: &str = "body { margin: 0; background: #112; }";
pub const GAME_JS: &str = "window.GAME_BOOTED = true;";
pub const STAR_PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A];

pub const OVERLAY_JSON: &str = r##"{
  "themeDescription": "Starfield countdown",
  "html": "<div id=\"ai-loading-screen\"><h1>Star Catcher</h1></div>",
  "css": "#ai-loading-screen { position: fixed; inset: 0; background: #000; }",
  "js": "window.startLoadingExit = function () { document.getElementById('ai-loading-screen').remove(); };"
}"##;

#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {line:?}: {e}"))
            })
            .collect()
    }
}

pub struct TestEnv {
    root: TempDir,
    home: TempDir,
}

impl TestEnv {
    /// Empty environment with a `game/` directory
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp root");
        let home = tempfile::tempdir().expect("create temp home");
        fs::create_dir_all(root.path().join("game")).expect("create game dir");
        Self { root, home }
    }

    /// Environment holding the Star Catcher game and `overlay.json`
    pub fn with_game() -> Self {
        let env = Self::new();
        env.write_game_file("index.html", GAME_HTML);
        env.write_game_file("css/style.css", GAME_CSS);
        env.write_game_file("js/game.js", GAME_JS);
        env.write_game_file("assets/star.png", STAR_PNG);
        env.write("overlay.json", OVERLAY_JSON);
        env
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn game_dir(&self) -> PathBuf {
        self.path("game")
    }

    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(path, content).expect("write fixture");
    }

    pub fn write_game_file(&self, relative: &str, content: impl AsRef<[u8]>) {
        self.write(&format!("game/{relative}"), content);
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("read output")
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_splashpack"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("GEMINI_API_KEY")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("SPLASHPACK_MODEL")
            .env_remove("SPLASHPACK_ENDPOINT")
            .env_remove("SPLASHPACK_VERBOSITY")
            .env_remove("SPLASHPACK_OUTPUT");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("run splashpack"))
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
