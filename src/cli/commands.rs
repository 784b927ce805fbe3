// file: src/cli/commands.rs
// version: 1.3.0
// guid: f07d93b8-2c45-4a61-9e80-5b16c8d4a2e7

//! Command implementations for the CLI

use crate::{
    config::{ConfigLoader, DriverConfig},
    install::{installer, release, InstallOptions, Installation, Installer, NetworkDownloader},
    model::{ActionKind, Plan},
    terraform::{ApplyOptions, InitOptions, PlanOptions},
    Result,
};
use colored::Colorize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Load the optional driver config named on the command line
pub fn load_config(path: Option<&str>) -> Result<DriverConfig> {
    match path {
        Some(path) => ConfigLoader::new().load_driver_config(expand_path(path)),
        None => Ok(DriverConfig::default()),
    }
}

/// Download and install the tool binary
pub async fn install_command(
    config: &DriverConfig,
    version: Option<String>,
    install_dir: Option<String>,
    base_url: Option<String>,
    skip_verify: bool,
) -> Result<()> {
    let installer = Installer::new(InstallOptions {
        version: version.or_else(|| config.terraform_version.clone()),
        install_dir: install_dir.map(|d| expand_path(&d)).or_else(|| config.install_dir.clone()),
        base_url: base_url.or_else(|| config.release_base_url.clone()),
        skip_verify: skip_verify || config.skip_verify,
        ..Default::default()
    });

    let installation = installer.install().await?;

    info!(
        "terraform {} ready at {}",
        installation.version,
        installation.exec_path.display()
    );
    Ok(())
}

/// Initialize a working directory
pub async fn init_command(
    config: &DriverConfig,
    chdir: Option<String>,
    upgrade: bool,
    reconfigure: bool,
    migrate_state: bool,
    backend_config: Vec<String>,
) -> Result<()> {
    let mut merged_backend = config.backend_config.clone();
    for pair in backend_config {
        let (key, value) = parse_key_value(&pair)?;
        merged_backend.insert(key, value);
    }

    let options = InitOptions {
        chdir: chdir.or_else(|| config.chdir.clone()),
        upgrade,
        reconfigure,
        migrate_state,
        backend_config: merged_backend,
    };

    let terraform = ensure_installed(config).await?.terraform();
    terraform.init(&options).await?;

    info!("Working directory initialized");
    Ok(())
}

/// Produce a plan and print a change summary
#[allow(clippy::too_many_arguments)]
pub async fn plan_command(
    config: &DriverConfig,
    chdir: Option<String>,
    destroy: bool,
    targets: Vec<String>,
    vars: Vec<String>,
    var_file: Option<String>,
    out: Option<String>,
    json: bool,
) -> Result<()> {
    let mut merged_vars = config.vars.clone();
    for pair in vars {
        let (key, value) = parse_var(&pair)?;
        merged_vars.insert(key, value);
    }

    let mut merged_targets = config.targets.clone();
    merged_targets.extend(targets);

    let options = PlanOptions {
        chdir: chdir.or_else(|| config.chdir.clone()),
        destroy,
        targets: merged_targets,
        vars: merged_vars,
        var_file: var_file.map(|f| expand_path(&f)),
    };

    let terraform = ensure_installed(config).await?.terraform();
    let outcome = terraform.plan(&options).await?;

    if let Some(out) = out {
        let dest = expand_path(&out);
        tokio::fs::copy(&outcome.plan_path, &dest).await?;
        info!("Plan artifact copied to {}", dest.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.plan)?);
    } else {
        print_plan_summary(&outcome.plan);
    }

    if outcome.plan.errored {
        warn!("The tool reported the plan as errored");
    }
    Ok(())
}

/// Apply a saved plan
pub async fn apply_command(
    config: &DriverConfig,
    chdir: Option<String>,
    plan_file: String,
    json: bool,
) -> Result<()> {
    let options = ApplyOptions {
        chdir: chdir.or_else(|| config.chdir.clone()),
        plan_path: Some(expand_path(&plan_file)),
        plan_binary: None,
    };

    let terraform = ensure_installed(config).await?.terraform();
    let outcome = terraform.apply(&options).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.state)?);
    } else {
        info!(
            "Apply complete: {} resources in state",
            outcome.state.resource_count()
        );
    }
    Ok(())
}

/// Render the current state or a saved plan
pub async fn show_command(
    config: &DriverConfig,
    chdir: Option<String>,
    plan_file: Option<String>,
    json: bool,
) -> Result<()> {
    let chdir = chdir.or_else(|| config.chdir.clone());
    let terraform = ensure_installed(config).await?.terraform();

    match plan_file {
        Some(plan_file) => {
            let plan = terraform
                .show_plan(&expand_path(&plan_file), chdir.as_deref())
                .await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan_summary(&plan);
            }
        }
        None => {
            let state = terraform.show_state(chdir.as_deref()).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                info!("{} resources in state", state.resource_count());
                if let Some(values) = &state.values {
                    for (name, output) in &values.outputs {
                        if output.sensitive {
                            println!("{} = (sensitive)", name);
                        } else {
                            println!(
                                "{} = {}",
                                name,
                                output.value.clone().unwrap_or(serde_json::Value::Null)
                            );
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

/// Check prerequisites and release host reachability
pub async fn check_command(config: &DriverConfig) -> Result<()> {
    match which::which("terraform") {
        Ok(path) => info!("System terraform found at {}", path.display()),
        Err(_) => info!("No system terraform on PATH (the driver installs its own)"),
    }

    let base = config
        .release_base_url
        .clone()
        .unwrap_or_else(|| release::DEFAULT_BASE_URL.to_string());
    if NetworkDownloader::new().verify_url(&base).await {
        info!("Release host {} is reachable", base);
    } else {
        warn!("Release host {} is not reachable", base);
    }

    let version = config
        .terraform_version
        .clone()
        .unwrap_or_else(|| release::DEFAULT_VERSION.to_string());
    let install_dir = match &config.install_dir {
        Some(dir) => dir.clone(),
        None => installer::default_install_dir(&version)?,
    };
    if install_dir.join(installer::BINARY_NAME).is_file() {
        info!("Cached install present at {}", install_dir.display());
    } else {
        info!("No cached install at {}", install_dir.display());
    }

    Ok(())
}

/// Provision per config, reusing a cached binary when possible
async fn ensure_installed(config: &DriverConfig) -> Result<Installation> {
    Installer::new(InstallOptions {
        version: config.terraform_version.clone(),
        install_dir: config.install_dir.clone(),
        base_url: config.release_base_url.clone(),
        skip_verify: config.skip_verify,
        ..Default::default()
    })
    .install()
    .await
}

fn print_plan_summary(plan: &Plan) {
    for change in &plan.resource_changes {
        let (symbol, address) = match change.change.action_kind() {
            ActionKind::Create => ("+".green(), change.address.green()),
            ActionKind::Update => ("~".yellow(), change.address.yellow()),
            ActionKind::Delete => ("-".red(), change.address.red()),
            ActionKind::Replace => ("±".magenta(), change.address.magenta()),
            ActionKind::Read => ("<".cyan(), change.address.cyan()),
            ActionKind::NoOp => continue,
        };
        println!("  {} {}", symbol, address);
    }

    let counts = plan.action_counts();
    println!(
        "Plan: {} to add, {} to change, {} to replace, {} to destroy.",
        counts.create.to_string().green(),
        counts.update.to_string().yellow(),
        counts.replace.to_string().magenta(),
        counts.delete.to_string().red(),
    );
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

fn parse_key_value(raw: &str) -> Result<(String, String)> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| {
            crate::error::DriverError::validation(format!("Expected KEY=VALUE, got {}", raw))
        })
}

/// Values that parse as JSON are passed through typed; everything else is a
/// string, matching how the tool treats `-var`
fn parse_var(raw: &str) -> Result<(String, serde_json::Value)> {
    let (key, value) = parse_key_value(raw)?;
    let parsed = serde_json::from_str(&value).unwrap_or(serde_json::Value::String(value));
    Ok((key, parsed))
}
