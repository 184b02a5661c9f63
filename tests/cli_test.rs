use std::process::Command;

/// Test that the simulation runs headless without crashing
#[test]
fn test_headless_simulation_runs() {
    let output = Command::new("cargo")
        .args(["run", "--", "--requests", "10", "--seed", "42"])
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to execute simulation");

    assert!(
        output.status.success(),
        "Simulation failed to run. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SIMULATION COMPLETE"),
        "Simulation did not complete properly. stderr: {}",
        stderr
    );
}

/// Test that the final statistics are logged and every request was served
#[test]
fn test_simulation_statistics_logged() {
    let output = Command::new("cargo")
        .args(["run", "--", "--requests", "10", "--seed", "42"])
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to execute simulation");

    assert!(output.status.success(), "Simulation failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    for marker in [
        "Total requests accepted:",
        "Total requests rejected:",
        "Total arrivals:",
        "Total floor steps:",
        "Final state:",
    ] {
        assert!(stderr.contains(marker), "Missing '{}' in output", marker);
    }

    let accepted_line = stderr
        .lines()
        .find(|line| line.contains("Total requests accepted:"))
        .expect("Could not find 'Total requests accepted' line");
    let parts: Vec<&str> = accepted_line.split("Total requests accepted:").collect();
    let accepted: u32 = parts
        .get(1)
        .and_then(|s| s.trim().parse().ok())
        .expect("Could not parse accepted count");

    assert_eq!(accepted, 10, "All generated requests should be accepted");
}
