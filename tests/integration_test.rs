use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn mdslides_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("mdslides"));
    cmd.env("EDITOR", "nano");
    cmd
}

fn write_deck(dir: &Path) {
    let markdown_content = "Intro\n\n# First\nhello\n<!-- note -->\n\n# Second\nbye\n";
    fs::write(dir.join("deck.md"), markdown_content).expect("Failed to write markdown file");
}

#[test]
fn test_help_lists_usage() {
    mdslides_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--watch"))
        .stdout(predicate::str::contains("--dest"))
        .stdout(predicate::str::contains(
            "mdslides ./path/to/source.md --watch --dest ./path/to/slides/directory",
        ));
}

#[test]
fn test_missing_source_argument() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    mdslides_cmd()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unexpected mdslides error"))
        .stderr(predicate::str::contains("Source filepath is not provided"));

    assert!(!temp_dir.path().join("dest").exists());
}

#[test]
fn test_source_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    mdslides_cmd()
        .current_dir(temp_dir.path())
        .arg("missing.md")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File does not exist"))
        .stderr(predicate::str::contains("missing.md"));
}

#[test]
fn test_default_destination() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_deck(temp_dir.path());

    mdslides_cmd()
        .current_dir(temp_dir.path())
        .arg("deck.md")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Slides created\n"))
        .stdout(predicate::str::contains("MDSlides created"))
        .stdout(predicate::str::contains("nano "));

    let dest = temp_dir.path().join("dest");
    assert_eq!(fs::read_to_string(dest.join("001.md")).unwrap(), "Intro");
    assert_eq!(fs::read_to_string(dest.join("002.md")).unwrap(), "# First\nhello");
    assert_eq!(fs::read_to_string(dest.join("003.md")).unwrap(), "# Second\nbye");
    assert!(!dest.join("004.md").exists());
}

#[test]
fn test_custom_destination() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_deck(temp_dir.path());
    let dest = temp_dir.path().join("out").join("slides");

    mdslides_cmd()
        .current_dir(temp_dir.path())
        .arg("deck.md")
        .arg("--dest")
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("nano {}/*", dest.display())));

    assert!(dest.join("003.md").exists());
    assert!(!temp_dir.path().join("dest").exists());
}

#[test]
fn test_normalized_crlf_source() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("deck.md"), "Intro\r\n# A\r\nbody\r\n")
        .expect("Failed to write markdown file");

    mdslides_cmd()
        .current_dir(temp_dir.path())
        .args(["deck.md", "--line-ending", "lf", "--normalize-line-endings"])
        .assert()
        .success();

    let dest = temp_dir.path().join("dest");
    assert_eq!(fs::read_to_string(dest.join("002.md")).unwrap(), "# A\nbody");
}

#[test]
#[ignore] // Relies on filesystem notifications being available
fn test_watch_regenerates_on_change() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_deck(temp_dir.path());
    let first_slide = temp_dir.path().join("dest").join("001.md");

    let mut child = Command::new(assert_cmd::cargo::cargo_bin!("mdslides"))
        .current_dir(temp_dir.path())
        .args(["deck.md", "--watch"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to start mdslides");

    let wait_for = |expected: &str| {
        let deadline = Instant::now() + Duration::from_secs(10);
        while Instant::now() < deadline {
            if fs::read_to_string(&first_slide).map(|s| s == expected).unwrap_or(false) {
                return true;
            }
            thread::sleep(Duration::from_millis(100));
        }
        false
    };

    let initial = wait_for("Intro");
    // Keep the next modification time distinct from the first one
    thread::sleep(Duration::from_millis(1100));
    fs::write(temp_dir.path().join("deck.md"), "Changed intro\n# Only\nbody\n")
        .expect("Failed to rewrite markdown file");
    let regenerated = wait_for("Changed intro");

    let _ = child.kill();
    let _ = child.wait();

    assert!(initial, "Initial slides were not written");
    assert!(regenerated, "Slides were not regenerated after the change");
    assert!(!temp_dir.path().join("dest").join("003.md").exists());
}
