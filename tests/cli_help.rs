use std::process::Command;

#[test]
fn help_lists_subcommands() {
    let output = Command::new(env!("CARGO_BIN_EXE_shapesync"))
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["check", "optional", "parse", "init"] {
        assert!(stdout.contains(command), "missing '{}' in:\n{}", command, stdout);
    }
}

#[test]
fn version_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_shapesync"))
        .arg("--version")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn bad_arguments_exit_with_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_shapesync"))
        .args(["check", "--no-such-flag"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}
