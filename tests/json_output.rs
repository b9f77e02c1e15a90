use std::process::Command;

#[test]
fn json_output_carries_both_lines() {
    let out = Command::new(env!("CARGO_BIN_EXE_bitcols"))
        .arg("101")
        .arg("--json")
        .output()
        .expect("run binary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.trim_start().starts_with('{'));

    let v: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(v["bits"], " 1  0  1 ");
    assert_eq!(v["indices"], " 2     0 ");
}

#[test]
fn json_does_not_change_the_error_path() {
    let out = Command::new(env!("CARGO_BIN_EXE_bitcols"))
        .arg("xyz")
        .arg("--json")
        .output()
        .expect("run binary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout,
        "Error: Input must be a binary string containing only '0' and '1'.\n"
    );
}
