// End-to-end CLI behavior that doesn't need a live endpoint.

use assert_cmd::Command;
use predicates::prelude::*;

fn nlbctl() -> Command {
    let mut cmd = Command::cargo_bin("nlbctl").expect("binary builds");
    // Start from a clean slate regardless of the host environment.
    cmd.env_remove("ALIBABA_CLOUD_ACCESS_KEY_ID")
        .env_remove("ALIBABA_CLOUD_ACCESS_KEY_SECRET")
        .env_remove("ALIBABA_CLOUD_SECURITY_TOKEN")
        .env_remove("ALIBABA_CLOUD_REGION_ID")
        .env_remove("NLBCTL_PROFILE");
    cmd
}

#[test]
fn help_mentions_the_product() {
    nlbctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Network Load Balancers"));
}

#[test]
fn missing_credentials_exit_with_auth_code() {
    nlbctl()
        .args(["lb", "list", "--region", "cn-hangzhou"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("ALIBABA_CLOUD_ACCESS_KEY_ID"));
}

#[test]
fn missing_region_exits_with_usage_code() {
    nlbctl()
        .args(["regions"])
        .env("ALIBABA_CLOUD_ACCESS_KEY_ID", "test-ak")
        .env("ALIBABA_CLOUD_ACCESS_KEY_SECRET", "test-secret")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("region"));
}

#[test]
fn completions_generate_for_bash() {
    nlbctl()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nlbctl"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    nlbctl().arg("frobnicate").assert().failure().code(2);
}
