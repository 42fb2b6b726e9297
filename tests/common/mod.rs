//! Shared testing utilities for forkfleet CLI tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_GH: &str = r#"#!/bin/sh
echo "gh $*" >> "@LOG@"
if [ "$1" = "repo" ] && [ "$2" = "fork" ]; then
    for arg in "$@"; do
        case "$arg" in
            --fork-name=*) name="${arg#--fork-name=}" ;;
        esac
    done
    case " $FAKE_GH_FAIL_FORK " in
        *" $name "*) echo "GraphQL: fork failed" >&2; exit 1 ;;
    esac
fi
exit 0
"#;

const FAKE_GIT: &str = r#"#!/bin/sh
echo "git $* @ $(basename "$(pwd -P)")" >> "@LOG@"
case "$1" in
    clone)
        dest="$3"
        name=$(basename "$dest")
        case " $FAKE_GIT_FAIL_CLONE " in
            *" $name "*) echo "fatal: repository not found" >&2; exit 128 ;;
        esac
        mkdir -p "$dest/docs"
        printf 'Welcome to wichat_0' > "$dest/README.md"
        printf 'wichat_0 notes' > "$dest/notes.md"
        printf 'see wichat_0 and wichat_0' > "$dest/docs/README.md"
        ;;
    push)
        name=$(basename "$(pwd -P)")
        mkdir -p "@SNAPSHOTS@/$name"
        cp -R . "@SNAPSHOTS@/$name/"
        case " $FAKE_GIT_FAIL_PUSH " in
            *" $name "*) echo "rejected" >&2; exit 1 ;;
        esac
        ;;
esac
exit 0
"#;

/// Isolated environment with fake `gh` and `git` executables first on `PATH`.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
    log_file: PathBuf,
    snapshots: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        let snapshots = root.path().join("snapshots");
        for dir in [&work_dir, &bin_dir, &snapshots] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }
        let log_file = root.path().join("calls.log");

        let ctx = Self { root, work_dir, bin_dir, log_file, snapshots };
        ctx.install_script("gh", FAKE_GH);
        ctx.install_script("git", FAKE_GIT);
        ctx
    }

    fn install_script(&self, name: &str, template: &str) {
        let content = template
            .replace("@LOG@", &self.log_file.to_string_lossy())
            .replace("@SNAPSHOTS@", &self.snapshots.to_string_lossy());
        let path = self.bin_dir.join(name);
        fs::write(&path, content).expect("Failed to write fake script");
        let mut perms = fs::metadata(&path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to set permissions");
    }

    /// Directory the binary runs in; working copies land here.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write a config file for `targets` with no settle delay.
    pub fn write_config(&self, targets: &[&str], extra: &str) -> PathBuf {
        let list = targets.iter().map(|t| format!("\"{}\"", t)).collect::<Vec<_>>().join(", ");
        let content = format!(
            "settle_delay_secs = 0\ntargets = [{}]\nrewrite_files = [\"README.md\", \"docs/README.md\"]\n{}",
            list, extra
        );
        let path = self.root.path().join("forkfleet.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Build a command for the compiled binary with the fake tools on `PATH`.
    pub fn cli(&self) -> Command {
        let path = match env::var_os("PATH") {
            Some(existing) => {
                let mut paths = vec![self.bin_dir.clone()];
                paths.extend(env::split_paths(&existing));
                env::join_paths(paths).expect("Failed to build PATH")
            }
            None => self.bin_dir.clone().into_os_string(),
        };
        let mut cmd = Command::cargo_bin("forkfleet").expect("Failed to locate forkfleet binary");
        cmd.current_dir(&self.work_dir)
            .env("PATH", path)
            .env_remove("RUST_LOG")
            .env_remove("FAKE_GH_FAIL_FORK")
            .env_remove("FAKE_GIT_FAIL_CLONE")
            .env_remove("FAKE_GIT_FAIL_PUSH");
        cmd
    }

    /// Every recorded `gh`/`git` invocation, in order.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Calls that mention `name` as a whole word.
    pub fn calls_for(&self, name: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|line| {
                line.split(|c: char| c == ' ' || c == '=' || c == '/')
                    .any(|word| word == name || word == format!("{}.git", name))
            })
            .collect()
    }

    /// Contents of a working-copy file as it was when `git push` ran.
    pub fn pushed_file(&self, target: &str, relative: &str) -> Option<String> {
        fs::read_to_string(self.snapshots.join(target).join(relative)).ok()
    }
}
