//! End-to-end extraction tests running the real binary against
//! filesystem fixtures.

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn sgen() -> Command {
    Command::cargo_bin("sgen").expect("binary builds")
}

#[test]
fn file_without_enablement_marker_emits_nothing() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    tmp.child("src/index.js")
        .write_str("// [START demo]\nlet x = 1;\n// [END demo]\n")
        .expect("write fixture");

    sgen()
        .current_dir(tmp.path())
        .args(["extract", "--quiet"])
        .assert()
        .success();

    tmp.child("snippets").assert(predicate::path::missing());
}

#[test]
fn suffix_override_rewrites_tags_and_imports() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    tmp.child("src/index.js")
        .write_str(concat!(
            "// [SNIPPETS enabled]\n",
            "// [SNIPPETS suffix _doc]\n",
            "function wrapper() {\n",
            "  // [START demo]\n",
            "\n",
            "  const {x} = require('y')\n",
            "  // [END demo]\n",
            "}\n",
        ))
        .expect("write fixture");

    sgen()
        .current_dir(tmp.path())
        .args(["extract", "--quiet"])
        .assert()
        .success();

    let expected = concat!(
        "// This snippet file was generated by processing the source file:\n",
        "// src/index.js\n",
        "//\n",
        "// To update the snippets in this file, edit the source file and\n",
        "// then run 'sgen extract'.\n",
        "\n",
        "// [START demo_doc]\n",
        "import {x} from 'y'\n",
        "// [END demo_doc]\n",
    );

    tmp.child("snippets/src_index/demo.js").assert(expected);
}

#[test]
fn nested_regions_each_get_their_own_file() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    tmp.child("app.js")
        .write_str(concat!(
            "// [SNIPPETS enabled]\n",
            "// [START outer]\n",
            "first();\n",
            "// [START inner]\n",
            "shared();\n",
            "// [END inner]\n",
            "last();\n",
            "// [END outer]\n",
        ))
        .expect("write fixture");

    sgen()
        .current_dir(tmp.path())
        .args(["extract", "--quiet"])
        .assert()
        .success();

    let outer = tmp.child("snippets/app/outer.js");
    outer.assert(predicate::str::contains("first();"));
    outer.assert(predicate::str::contains("shared();"));
    outer.assert(predicate::str::contains("last();"));
    outer.assert(predicate::str::contains("[START outer_modular]"));

    let inner = tmp.child("snippets/app/inner.js");
    inner.assert(predicate::str::contains("shared();"));
    inner.assert(predicate::str::contains("first();").not());
    inner.assert(predicate::str::contains("last();").not());
}

#[test]
fn duplicate_snippet_name_aborts_the_run() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    tmp.child("dup.js")
        .write_str(concat!(
            "// [SNIPPETS enabled]\n",
            "// [START x]\n",
            "// [END x]\n",
            "// [START x]\n",
            "// [END x]\n",
        ))
        .expect("write fixture");

    sgen()
        .current_dir(tmp.path())
        .args(["extract", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate snippet name: x"));
}

#[test]
fn unmatched_end_tag_aborts_the_run() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    tmp.child("bad.js")
        .write_str("// [SNIPPETS enabled]\ncode();\n// [END ghost]\n")
        .expect("write fixture");

    sgen()
        .current_dir(tmp.path())
        .args(["extract", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unmatched end tag: ghost"));
}

#[test]
fn dry_run_reports_without_writing() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    tmp.child("a.js")
        .write_str("// [SNIPPETS enabled]\n// [START one]\n// [END one]\n")
        .expect("write fixture");

    sgen()
        .current_dir(tmp.path())
        .args(["extract", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN: would write"))
        .stdout(predicate::str::contains("Would emit 1 snippets"))
        .stdout(predicate::str::contains("Emitted").not());

    tmp.child("snippets").assert(predicate::path::missing());
}

#[test]
fn init_writes_default_config() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    sgen()
        .current_dir(tmp.path())
        .args(["init"])
        .assert()
        .success();

    tmp.child("snipgen.toml")
        .assert(predicate::str::contains("out_dir = \"snippets\""));

    // A second init without --force refuses to overwrite
    sgen()
        .current_dir(tmp.path())
        .args(["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
