#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run shortkeys commands in an isolated temp directory
pub struct ShortkeysTest {
    pub temp_dir: TempDir,
}

pub fn shortkeys_binary() -> &'static str {
    env!("CARGO_BIN_EXE_shortkeys")
}

impl ShortkeysTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        ShortkeysTest { temp_dir }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(shortkeys_binary())
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("SHORTKEYS_FILE")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute shortkeys command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn keys_path(&self) -> PathBuf {
        self.temp_dir.path().join(".shortkeys").join("keys.yaml")
    }

    pub fn keys_exist(&self) -> bool {
        self.keys_path().exists()
    }

    pub fn read_keys(&self) -> String {
        fs::read_to_string(self.keys_path()).expect("Failed to read keys file")
    }

    pub fn write_keys(&self, content: &str) {
        let path = self.keys_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create .shortkeys directory");
        fs::write(path, content).expect("Failed to write keys file");
    }
}
