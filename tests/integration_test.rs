// file: tests/integration_test.rs
// version: 1.1.0
// guid: 5e83a1c7-09d4-4b62-8f15-3a7c0e92d648

//! Integration tests for the Terraform driver
//!
//! The driver is exercised end to end against a stub binary that answers
//! the wrapped subcommands with canned JSON, so no real tool install or
//! network access is needed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use terraform_driver::{
    config::ConfigLoader,
    install::Workspace,
    model::ActionKind,
    ApplyOptions, InitOptions, PlanOptions, Terraform,
};

const PLAN_JSON: &str = r#"{
  "format_version": "1.2",
  "terraform_version": "1.6.6",
  "planned_values": {
    "outputs": {"foo": {"sensitive": false, "type": ["list", "string"], "value": ["vpc-1", "vpc-2"]}},
    "root_module": {}
  },
  "resource_changes": [
    {
      "address": "null_resource.cluster",
      "mode": "managed",
      "type": "null_resource",
      "name": "cluster",
      "provider_name": "registry.terraform.io/hashicorp/null",
      "change": {"actions": ["create"], "before": null, "after": {"triggers": null}}
    }
  ],
  "timestamp": "2024-01-09T12:00:00Z",
  "errored": false
}"#;

const STATE_JSON: &str = r#"{
  "format_version": "1.0",
  "terraform_version": "1.6.6",
  "values": {
    "outputs": {"foo": {"sensitive": false, "type": ["list", "string"], "value": ["vpc-1", "vpc-2"]}},
    "root_module": {
      "resources": [
        {
          "address": "null_resource.cluster",
          "mode": "managed",
          "type": "null_resource",
          "name": "cluster",
          "provider_name": "registry.terraform.io/hashicorp/null",
          "values": {"id": "424881806176056736"}
        }
      ]
    }
  }
}"#;

/// Write a stub binary that mimics the wrapped tool's surface
#[cfg(unix)]
fn write_stub_binary(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let plan_json_path = dir.join("plan.json");
    let state_json_path = dir.join("state.json");
    std::fs::write(&plan_json_path, PLAN_JSON).unwrap();
    std::fs::write(&state_json_path, STATE_JSON).unwrap();

    let script = format!(
        r#"#!/bin/sh
cmd="$1"
case "$cmd" in
  -chdir=*) shift; cmd="$1" ;;
esac
case "$cmd" in
  version)
    echo '{{"terraform_version":"1.6.6","platform":"linux_amd64"}}'
    ;;
  init)
    echo "Terraform has been successfully initialized!"
    ;;
  plan)
    out=""
    for arg in "$@"; do
      case "$arg" in
        -out=*) out="${{arg#-out=}}" ;;
      esac
    done
    printf 'tfplan-binary' > "$out"
    echo "Plan: 1 to add, 0 to change, 0 to destroy."
    ;;
  apply)
    echo "Apply complete! Resources: 1 added, 0 changed, 0 destroyed."
    ;;
  show)
    if [ -n "$3" ]; then
      cat '{plan_json}'
    else
      cat '{state_json}'
    fi
    ;;
  *)
    echo "unknown subcommand: $cmd" >&2
    exit 1
    ;;
esac
"#,
        plan_json = plan_json_path.display(),
        state_json = state_json_path.display(),
    );

    let path = dir.join("terraform");
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
fn stub_terraform(temp: &TempDir) -> Terraform {
    let exec_path = write_stub_binary(temp.path());
    let workspace = Workspace::at(temp.path().join("work")).unwrap();
    Terraform::new(exec_path, workspace)
}

#[cfg(unix)]
#[tokio::test]
async fn test_init_plan_apply_round_trip() {
    let temp = TempDir::new().unwrap();
    let terraform = stub_terraform(&temp);

    terraform
        .init(&InitOptions {
            chdir: Some("./stack".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let mut vars = BTreeMap::new();
    vars.insert("region".to_string(), serde_json::json!("eu-west-1"));

    let outcome = terraform
        .plan(&PlanOptions {
            chdir: Some("./stack".to_string()),
            vars,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(outcome.plan_binary, b"tfplan-binary");
    assert!(outcome.plan_path.is_file());
    assert!(outcome.logs.iter().any(|l| l.contains("1 to add")));
    assert_eq!(outcome.plan.resource_changes.len(), 1);
    assert_eq!(
        outcome.plan.resource_changes[0].change.action_kind(),
        ActionKind::Create
    );

    // The materialized variables file lands in the workspace
    let var_file = terraform.workspace().join("vars.tfvars.json");
    let raw = std::fs::read_to_string(var_file).unwrap();
    assert!(raw.contains("eu-west-1"));

    let applied = terraform
        .apply(&ApplyOptions {
            plan_binary: Some(outcome.plan_binary),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(applied.logs.iter().any(|l| l.contains("Apply complete")));
    assert_eq!(applied.state.resource_count(), 1);
    let values = applied.state.values.as_ref().unwrap();
    let foo = values.outputs["foo"].value.as_ref().unwrap();
    for v in foo.as_array().unwrap() {
        assert!(v.as_str().unwrap().starts_with("vpc"));
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_show_state_and_plan() {
    let temp = TempDir::new().unwrap();
    let terraform = stub_terraform(&temp);

    let state = terraform.show_state(None).await.unwrap();
    assert_eq!(state.terraform_version, "1.6.6");
    assert_eq!(state.resource_count(), 1);

    let plan = terraform
        .show_plan(Path::new("saved.tfplan"), None)
        .await
        .unwrap();
    assert_eq!(plan.format_version, "1.2");
    assert!(plan.has_changes());
}

#[cfg(unix)]
#[tokio::test]
async fn test_version_probe() {
    let temp = TempDir::new().unwrap();
    let terraform = stub_terraform(&temp);

    let info = terraform.version().await.unwrap();

    assert_eq!(info.terraform_version, "1.6.6");
    assert_eq!(info.platform, "linux_amd64");
}

#[cfg(unix)]
#[tokio::test]
async fn test_unknown_subcommand_surfaces_stderr() {
    let temp = TempDir::new().unwrap();
    let exec_path = write_stub_binary(temp.path());
    let runner = terraform_driver::exec::CommandRunner::new(exec_path);

    let err = runner.run(&["refresh".to_string()]).await.unwrap_err();

    assert!(err.to_string().contains("unknown subcommand"));
}

#[tokio::test]
async fn test_config_loading_integration() {
    let temp = TempDir::new().unwrap();
    let config_content = r#"
terraform_version: "1.6.6"
chdir: ./stack
backend_config:
  bucket: tf-state
  region: eu-west-1
vars:
  replicas: 3
targets:
  - null_resource.cluster
"#;

    let config_path = temp.path().join("driver.yaml");
    tokio::fs::write(&config_path, config_content).await.unwrap();

    let loader = ConfigLoader::new();
    let config = loader.load_driver_config(&config_path).unwrap();

    assert_eq!(config.terraform_version.as_deref(), Some("1.6.6"));
    assert_eq!(config.chdir.as_deref(), Some("./stack"));
    assert_eq!(config.backend_config.len(), 2);
    assert_eq!(config.vars["replicas"], serde_json::json!(3));
    assert_eq!(config.targets, vec!["null_resource.cluster".to_string()]);
}
