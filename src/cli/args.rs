// file: src/cli/args.rs
// version: 1.2.0
// guid: e94b06d1-5c78-4f23-a1e9-8b42d7c05f16

//! Command line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "terraform-driver")]
#[command(about = "Provision the Terraform CLI and drive init/plan/apply with typed results")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// YAML config file supplying defaults for the subcommands
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download and install the tool binary
    Install {
        #[arg(long, help = "Release version, e.g. 1.6.6")]
        version: Option<String>,

        #[arg(long, help = "Directory to install into (defaults to the user cache)")]
        install_dir: Option<String>,

        #[arg(long, help = "Release mirror base URL")]
        base_url: Option<String>,

        #[arg(long, help = "Skip SHA256SUMS verification of the archive")]
        skip_verify: bool,
    },

    /// Initialize a working directory
    Init {
        #[arg(long, help = "Working directory passed through as -chdir")]
        chdir: Option<String>,

        #[arg(long)]
        upgrade: bool,

        #[arg(long)]
        reconfigure: bool,

        #[arg(long)]
        migrate_state: bool,

        #[arg(long = "backend-config", value_name = "KEY=VALUE")]
        backend_config: Vec<String>,
    },

    /// Produce a plan and print a change summary
    Plan {
        #[arg(long, help = "Working directory passed through as -chdir")]
        chdir: Option<String>,

        #[arg(long, help = "Plan the destruction of all resources")]
        destroy: bool,

        #[arg(long = "target", value_name = "ADDRESS")]
        targets: Vec<String>,

        #[arg(long = "var", value_name = "KEY=VALUE")]
        vars: Vec<String>,

        #[arg(long, value_name = "FILE")]
        var_file: Option<String>,

        #[arg(short, long, help = "Copy the binary plan artifact to this path")]
        out: Option<String>,

        #[arg(long, help = "Print the decoded plan document as JSON")]
        json: bool,
    },

    /// Apply a saved plan
    Apply {
        #[arg(long, help = "Working directory passed through as -chdir")]
        chdir: Option<String>,

        #[arg(short, long, value_name = "FILE", help = "Plan artifact produced by plan")]
        plan_file: String,

        #[arg(long, help = "Print the resulting state document as JSON")]
        json: bool,
    },

    /// Render the current state or a saved plan
    Show {
        #[arg(long, help = "Working directory passed through as -chdir")]
        chdir: Option<String>,

        #[arg(short, long, value_name = "FILE", help = "Saved plan to render instead of state")]
        plan_file: Option<String>,

        #[arg(long, help = "Print the raw decoded document as JSON")]
        json: bool,
    },

    /// Check prerequisites and release host reachability
    Check,
}
