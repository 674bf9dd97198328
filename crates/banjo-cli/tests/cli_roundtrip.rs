// crates/banjo-cli/tests/cli_roundtrip.rs

use std::fs;
use std::path::Path;
use std::process::Command;

fn run_ok(cmd: &mut Command) -> String {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_banjo-cli"))
}

fn path_str(p: &Path) -> &str {
    p.to_str().expect("utf-8 path")
}

#[test]
fn pitch_command_derives_12_tpi() {
    let stdout = run_ok(bin().args([
        "pitch",
        "--gears",
        "40,65,65,30",
        "--leadscrew",
        "16",
        "--unit",
        "tpi",
    ]));
    assert!(stdout.contains("12.0000 TPI"), "stdout:\n{stdout}");
    assert!(stdout.contains("valid      = true"), "stdout:\n{stdout}");
}

#[test]
fn combos_artifacts_are_deterministic_across_identical_runs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("lathe.json");
    let cache1 = dir.path().join("combos1.bgc");
    let cache2 = dir.path().join("combos2.bgc");
    let out1 = dir.path().join("combos1.json");
    let out2 = dir.path().join("combos2.json");

    run_ok(bin().args(["config", "init", "--out", path_str(&config)]));

    for (cache, out) in [(&cache1, &out1), (&cache2, &out2)] {
        run_ok(bin().args([
            "combos",
            "--config",
            path_str(&config),
            "--cache",
            path_str(cache),
            "--out",
            path_str(out),
            "--show",
            "0",
        ]));
    }

    let c1 = fs::read(&cache1).expect("read cache1");
    let c2 = fs::read(&cache2).expect("read cache2");
    assert_eq!(c1, c2, "cache artifacts differ across identical runs");

    let j1 = fs::read(&out1).expect("read combos1");
    let j2 = fs::read(&out2).expect("read combos2");
    assert_eq!(j1, j2, "combo JSON differs across identical runs");
    assert!(!j1.is_empty());
}

#[test]
fn best_answers_from_a_cache() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("lathe.json");
    let cache = dir.path().join("combos.bgc");

    run_ok(bin().args(["config", "init", "--out", path_str(&config)]));
    run_ok(bin().args([
        "combos",
        "--config",
        path_str(&config),
        "--cache",
        path_str(&cache),
        "--show",
        "0",
    ]));

    // The stock leadscrew is 1.6 mm/rev; ask for 0.4 mm/rev (ratio 0.25).
    let stdout = run_ok(bin().args([
        "best",
        "--cache",
        path_str(&cache),
        "--target",
        "0.4",
        "--unit",
        "mm",
    ]));
    assert!(stdout.contains("0.4000 mm/rev"), "stdout:\n{stdout}");
}

#[test]
fn batch_round_trips_and_prefers_the_spacer_train() {
    let dir = tempfile::tempdir().expect("tempdir");
    let request = dir.path().join("request.json");
    let response = dir.path().join("response.json");

    fs::write(
        &request,
        r#"[
  {
    "name": "M10",
    "targetPitch": 1.5,
    "candidates": [
      {"gearA": "M1 Z20", "gearB": "M1 Z40", "gearC": "M1 Z50", "gearD": "M1 Z80",
       "pitch": {"value": 1.5, "unit": 0}},
      {"gearA": "M1 Z20", "gearB": "M1 Z45", "gearC": "M1 Z45", "gearD": "M1 Z80",
       "pitch": {"value": 1.5, "unit": 0}}
    ]
  }
]"#,
    )
    .expect("write request");

    run_ok(bin().args([
        "batch",
        "--in",
        path_str(&request),
        "--out",
        path_str(&response),
    ]));

    let text = fs::read_to_string(&response).expect("read response");
    let parsed: serde_json::Value = serde_json::from_str(&text).expect("parse response");
    let chosen = &parsed[0];
    assert_eq!(chosen["name"], "M10");
    assert_eq!(chosen["setup"]["gearB"], "M1 Z45");
    assert_eq!(chosen["setup"]["gearC"], "M1 Z45");
}

#[test]
fn malformed_batch_input_fails_with_a_parse_diagnostic() {
    let dir = tempfile::tempdir().expect("tempdir");
    let request = dir.path().join("request.json");
    fs::write(
        &request,
        r#"[{"name": "bad", "targetPitch": 1.5, "candidates": [
            {"gearA": "bogus", "pitch": {"value": 1.5, "unit": 0}}
        ]}]"#,
    )
    .expect("write request");

    let out = bin()
        .args(["batch", "--in", path_str(&request)])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("parse error"), "stderr:\n{stderr}");
}
