//! Black-box tests against the built `nextshift` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn nextshift() -> Command {
    Command::cargo_bin("nextshift").unwrap()
}

#[test]
fn migrates_a_tree_and_prints_the_summary() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("src");
    fs::create_dir_all(&root).unwrap();
    fs::write(
        root.join("Hero.tsx"),
        "import Image from \"next/image\";\nexport const Hero = () => <Image src=\"x\"/>;\n",
    )
    .unwrap();
    fs::write(root.join("plain.ts"), "export const n = 1;\n").unwrap();

    let json = dir.path().join("report.json");
    let html = dir.path().join("report.html");

    nextshift()
        .arg("--root")
        .arg(&root)
        .arg("--json-report")
        .arg(&json)
        .arg("--html-report")
        .arg(&html)
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated: Hero.tsx"))
        .stdout(predicate::str::contains("Processed: 2 files"))
        .stdout(predicate::str::contains("Modified:  1 files"))
        .stdout(predicate::str::contains("Now run: npm run build"));

    let hero = fs::read_to_string(root.join("Hero.tsx")).unwrap();
    assert!(hero.contains("<img src=\"x\"/>"));
    assert!(json.exists());
    assert!(html.exists());
}

#[test]
fn exits_zero_with_nothing_to_do() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("empty-src");
    fs::create_dir_all(&root).unwrap();

    nextshift()
        .arg("--root")
        .arg(&root)
        .arg("--json-report")
        .arg(dir.path().join("r.json"))
        .arg("--html-report")
        .arg(dir.path().join("r.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Modified:  0 files"));
}

#[test]
fn parse_errors_do_not_fail_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("src");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("broken.tsx"), "const = <div;\n").unwrap();

    nextshift()
        .arg("--root")
        .arg(&root)
        .arg("--json-report")
        .arg(dir.path().join("r.json"))
        .arg("--html-report")
        .arg(dir.path().join("r.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed: 0 files"));
}
