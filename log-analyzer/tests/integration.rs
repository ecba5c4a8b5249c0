use std::{fs, process::Command};

use serde_json::Value;

const LOGS: &str = r#"66.1.2.3 - - [22/May/2018:15:52:28 -0600] "GET /book/belle-de-jour-diary-of-an-unlikely-call-girl-by-belle-de-jour/ HTTP/1.1" 403 38
69.162.2.1 - - [22/May/2018:15:52:32 -0600] "GET / HTTP/1.1" 403 38
91.121.1.3 - - [22/May/2018:15:52:36 -0600] "GET /book/amigurumi-by-lan-anh-bui/ HTTP/1.1" 200 112423
66.1.2.3 - - [22/May/2018:15:52:38 -0600] "GET /img/cover.png HTTP/1.1" 200 4096
this line is not a log line
66.249.5.2 - - [22/May/2018:15:53:07 -0600] "GET /robots.txt HTTP/1.1" 200 24
66.249.5.2 - - [24/May/2018:16:53:07 -0600] "GET /robots.txt HTTP/1.1" 200 24
91.121.1.5 - - [24/May/2018:16:53:17 -0600] "GET / HTTP/1.1" 200 74852
"#;

fn run(args: &[&str], log: &str) -> std::process::Output {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("access.log");
    fs::write(&path, log).expect("Failed to write log");
    Command::new(env!("CARGO_BIN_EXE_log-analyzer"))
        .arg(&path)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to start log-analyzer")
}

/// The pretty-printed report sits between the leading blank lines and the
/// first closing brace in column zero.
fn report_json(stdout: &str) -> Value {
    let start = stdout.find('{').expect("report start");
    let end = stdout[start..].find("\n}").expect("report end") + start + 2;
    serde_json::from_str(&stdout[start..end]).expect("report is JSON")
}

#[test]
fn prints_report_and_top_routes() {
    let output = run(&[], LOGS);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let report = report_json(&stdout);

    assert_eq!(report["name"], "access.log");
    assert_eq!(report["total_unique_hits"], 5);
    assert_eq!(report["total_unique_spiders"], 1);
    assert_eq!(report["num_days"], 2);
    assert_eq!(report["unique_hits_per_day"], 2);
    assert_eq!(report["bandwidth_last_24_hours"], "75 kB");
    assert_eq!(report["total_hits_per_route"]["/robots.txt"], 2);
    assert_eq!(report["total_hits_per_route"]["/img/cover.png"], 1);

    assert!(stdout.contains("finished in"));
    let routes: Vec<_> = stdout.lines().filter(|l| l.starts_with('/')).collect();
    assert_eq!(routes.first(), Some(&"/, 2"));
    assert!(routes.contains(&"/robots.txt, 2"));
    assert!(!routes.iter().any(|r| r.contains("cover.png")));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("skipped lines"));
}

#[test]
fn name_and_top_flags() {
    let output = run(&["--name", "books", "--top", "1"], LOGS);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(report_json(&stdout)["name"], "books");
    assert_eq!(stdout.lines().filter(|l| l.starts_with('/')).count(), 1);
}

#[test]
fn empty_log_fails() {
    let output = run(&[], "\n\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no log records could be parsed"));
}

#[test]
fn missing_file_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_log-analyzer"))
        .arg("/nonexistent/access.log")
        .output()
        .expect("Failed to start log-analyzer");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to read /nonexistent/access.log"));
}
