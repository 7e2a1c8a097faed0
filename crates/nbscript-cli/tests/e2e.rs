//! End-to-end tests for nbscript CLI commands.
//!
//! These tests verify that the CLI produces expected output
//! when run against real notebook and CSV files.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin for tests

use std::fs;
use std::path::PathBuf;
use std::process::Stdio;
use std::thread;
use std::time::{Duration, Instant};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Test Helpers
// =============================================================================

/// A temporary directory holding one input file.
struct TestFile {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TestFile {
    fn new(filename: &str, contents: &[u8]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join(filename);
        fs::write(&path, contents).expect("Failed to write test file");

        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    fn path(&self) -> &PathBuf {
        &self.path
    }

    fn script_path(&self) -> PathBuf {
        self.path.with_extension("py")
    }
}

fn nbscript() -> Command {
    Command::cargo_bin("nbscript").expect("Failed to find nbscript binary")
}

/// A notebook with one construct of each kind.
fn jupyter_notebook() -> String {
    serde_json::json!({
        "cells": [
            {"cell_type": "markdown", "metadata": {}, "source": ["# Vendas\n", "\n", "Resumo."]},
            {
                "cell_type": "code",
                "execution_count": 1,
                "metadata": {},
                "outputs": [],
                "source": ["import pandas as pd\n", "%matplotlib inline\n", "!pip install openpyxl -q\n", "display(df.head())"]
            }
        ],
        "metadata": {},
        "nbformat": 4,
        "nbformat_minor": 2
    })
    .to_string()
}

// =============================================================================
// nbscript convert Tests
// =============================================================================

#[test]
fn test_convert_notebook() {
    let notebook = TestFile::new("vendas.ipynb", jupyter_notebook().as_bytes());

    nbscript()
        .args(["convert", notebook.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("COMPATIBILITY REPORT"))
        .stdout(predicate::str::contains("[COMMENTED-OUT] '!pip'"))
        .stdout(predicate::str::contains("[COMMENTED-OUT] '%matplotlib'"))
        .stdout(predicate::str::contains("[CONVERTED] 'display()'"));

    let script = fs::read_to_string(notebook.script_path()).expect("script should exist");
    assert!(script.contains("# %matplotlib inline"));
    assert!(script.contains("# !pip install openpyxl -q"));
    assert!(script.contains("print(df.head()) # Convertido de display() para print()"));
    assert!(script.contains("# # Vendas"));
}

#[test]
fn test_convert_report_is_sorted() {
    let notebook = TestFile::new("sorted.ipynb", jupyter_notebook().as_bytes());

    let output = nbscript()
        .args(["convert", notebook.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);

    let pip = stdout.find("'!pip'").expect("!pip reported");
    let magic = stdout.find("'%matplotlib'").expect("%matplotlib reported");
    let display = stdout.find("'display()'").expect("display() reported");
    assert!(pip < magic && magic < display, "stdout: {}", stdout);
}

#[test]
fn test_convert_with_output_flag() {
    let notebook = TestFile::new("custom.ipynb", jupyter_notebook().as_bytes());
    let output = notebook.path().with_file_name("renamed.py");

    nbscript()
        .args([
            "convert",
            notebook.path().to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(output.exists());
    assert!(!notebook.script_path().exists());
}

#[test]
fn test_convert_plain_notebook_has_no_report() {
    let source = serde_json::json!({
        "cells": [{"cell_type": "code", "source": "x = 1"}],
        "nbformat": 4,
        "nbformat_minor": 2
    })
    .to_string();
    let notebook = TestFile::new("plain.ipynb", source.as_bytes());

    nbscript()
        .args(["convert", notebook.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("COMPATIBILITY REPORT").not());
}

#[test]
fn test_convert_wrong_extension_reports_without_failing() {
    let input = TestFile::new("notes.txt", b"not a notebook");

    nbscript()
        .args(["convert", input.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(".ipynb"));

    assert!(!input.path().with_extension("py").exists());
}

#[test]
fn test_convert_missing_notebook() {
    nbscript()
        .args(["convert", "/nonexistent/notebook.ipynb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notebook not found"));
}

#[test]
fn test_convert_malformed_notebook() {
    let notebook = TestFile::new("broken.ipynb", b"{\"cells\": 3}");

    nbscript()
        .args(["convert", notebook.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Malformed notebook"));

    assert!(!notebook.script_path().exists());
}

#[test]
fn test_convert_without_argument_uses_demo_path() {
    let temp = TempDir::new().unwrap();

    nbscript()
        .current_dir(temp.path())
        .arg("convert")
        .assert()
        .success()
        .stdout(predicate::str::contains("exemplo.ipynb"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_bare_invocation_converts_demo_path() {
    let temp = TempDir::new().unwrap();

    nbscript()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("nbscript convert"))
        .stdout(predicate::str::contains("exemplo.ipynb"))
        .stdout(predicate::str::contains("Notebook not found"));
}

#[test]
fn test_watch_survives_notebook_removal() {
    let notebook = TestFile::new("watched.ipynb", jupyter_notebook().as_bytes());

    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin("nbscript"))
        .args(["convert", notebook.path().to_str().unwrap(), "--watch"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to spawn nbscript");

    thread::sleep(Duration::from_millis(1000));
    fs::remove_file(notebook.path()).expect("Failed to remove notebook");
    thread::sleep(Duration::from_millis(1500));

    let still_running = child.try_wait().expect("Failed to poll child").is_none();

    // Restore the notebook with new content and wait for the re-conversion
    let updated = jupyter_notebook().replace("Resumo.", "Resumo atualizado.");
    fs::write(notebook.path(), updated).expect("Failed to restore notebook");
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut reconverted = false;
    while still_running && Instant::now() < deadline {
        let script = fs::read_to_string(notebook.script_path()).unwrap_or_default();
        if script.contains("# Resumo atualizado.") {
            reconverted = true;
            break;
        }
        thread::sleep(Duration::from_millis(100));
    }

    let _ = child.kill();
    let _ = child.wait();

    assert!(still_running, "watcher exited after the notebook was removed");
    assert!(reconverted, "watcher did not convert the restored notebook");
}

// =============================================================================
// nbscript load Tests
// =============================================================================

#[test]
fn test_load_semicolon_file() {
    let file = TestFile::new(
        "precos.csv",
        "Produto;Preço;Estoque\nLaptop;4500.50;30\nMouse;89.90;150".as_bytes(),
    );

    nbscript()
        .args(["load", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("UTF-8"))
        .stdout(predicate::str::contains("Delimiter: ';'"))
        .stdout(predicate::str::contains("Rows:    2"))
        .stdout(predicate::str::contains("Laptop"));
}

#[test]
fn test_load_missing_file() {
    nbscript()
        .args(["load", "/nonexistent/data.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found"));
}
