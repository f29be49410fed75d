mod commands;

use cfn_cloud::StackProvider;
use cfn_cloud_aws::CloudFormationProvider;
use cfn_core::{ProjectLayout, REGION_ENV, Settings, Stack};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Exit status for usage errors and `--help`
const USAGE_EXIT_CODE: i32 = 2;

#[derive(Parser)]
#[command(name = "cfn")]
#[command(about = "Small tool to manipulate AWS CloudFormation stacks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Environment, like development, testing, staging, production, etc.
    #[arg(long, global = true, value_name = "ENV")]
    environment: Option<String>,

    /// AWS region name
    #[arg(long, global = true, env = REGION_ENV)]
    region: Option<String>,

    /// Accepted for compatibility; operations never wait for completion
    #[arg(long, global = true)]
    no_wait: bool,

    /// Indent the generated JSON
    #[arg(long, global = true)]
    format_json: bool,

    /// Indent the generated JSON and echo the resolved settings
    #[arg(long, global = true)]
    debug: bool,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            environment: self.environment.clone().unwrap_or_default(),
            region: self.region.clone().unwrap_or_default(),
            debug: self.debug,
            format_json: self.format_json,
            no_wait: self.no_wait,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check if the stack exists in the current AWS region
    Exists {
        /// Stack base name (stacks/<stack>[.<env>][.<region>].yml)
        stack: String,
    },
    /// Generate the CloudFormation JSON template into output/
    Generate {
        /// Stack base name (stacks/<stack>[.<env>][.<region>].yml)
        stack: String,
    },
    /// Generate and validate the template
    Validate {
        /// Stack base name (stacks/<stack>[.<env>][.<region>].yml)
        stack: String,
    },
    /// Generate the template and create the stack
    Create {
        /// Stack base name (stacks/<stack>[.<env>][.<region>].yml)
        stack: String,
    },
    /// Generate the template and update the existing stack
    Update {
        /// Stack base name (stacks/<stack>[.<env>][.<region>].yml)
        stack: String,
    },
    /// Delete the existing stack
    Delete {
        /// Stack base name (stacks/<stack>[.<env>][.<region>].yml)
        stack: String,
    },
    /// Show version information
    Version,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Exists { .. } => "exists",
            Commands::Generate { .. } => "generate",
            Commands::Validate { .. } => "validate",
            Commands::Create { .. } => "create",
            Commands::Update { .. } => "update",
            Commands::Delete { .. } => "delete",
            Commands::Version => "version",
        }
    }
}

/// Print usage (help goes to stdout, errors to stderr) and exit with 2.
fn exit_with_usage(err: clap::Error) -> ! {
    let _ = err.print();
    std::process::exit(USAGE_EXIT_CODE);
}

fn init_tracing(debug: bool) {
    let default_directives = if debug {
        "warn,cfn=debug,cfn_core=debug,cfn_cloud_aws=debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    // stdout carries command output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_settings(settings: &Settings, command: &str, name: &str) {
    println!("--environment={}", settings.environment);
    println!("--region={}", settings.region);
    println!("--debug={}", settings.debug);
    println!("--no-wait={}", settings.no_wait);
    println!("command={}", command);
    println!("name={}", name);
}

/// Echo the settings under --debug, then load the stack config from the working directory.
fn load_stack(command: &str, base: &str, settings: Settings) -> anyhow::Result<Stack> {
    if settings.debug {
        print_settings(&settings, command, base);
    }

    let layout = ProjectLayout::from_current_dir()?;
    let stack = Stack::load(layout, base, settings)?;
    tracing::debug!(config = %stack.config_path().display(), name = %stack.name(), "Stack loaded");
    Ok(stack)
}

async fn connect(settings: &Settings) -> CloudFormationProvider {
    let provider = CloudFormationProvider::connect(Some(&settings.region)).await;
    tracing::debug!(provider = provider.name(), region = ?provider.region(), "Provider connected");
    provider
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|e| exit_with_usage(e));

    init_tracing(cli.debug);

    let settings = cli.settings();
    let command = cli.command.name();

    match &cli.command {
        Commands::Version => {
            println!("cfn {}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Exists { stack } => {
            let stack = load_stack(command, stack, settings)?;
            let provider = connect(stack.settings()).await;
            commands::exists::handle(&stack, &provider).await?;
        }
        Commands::Generate { stack } => {
            let stack = load_stack(command, stack, settings)?;
            commands::generate::handle(&stack)?;
        }
        Commands::Validate { stack } => {
            let stack = load_stack(command, stack, settings)?;
            let provider = connect(stack.settings()).await;
            commands::validate::handle(&stack, &provider).await?;
        }
        Commands::Create { stack } => {
            let stack = load_stack(command, stack, settings)?;
            let provider = connect(stack.settings()).await;
            commands::create::handle(&stack, &provider).await?;
        }
        Commands::Update { stack } => {
            let stack = load_stack(command, stack, settings)?;
            let provider = connect(stack.settings()).await;
            commands::update::handle(&stack, &provider).await?;
        }
        Commands::Delete { stack } => {
            let stack = load_stack(command, stack, settings)?;
            let provider = connect(stack.settings()).await;
            commands::delete::handle(&stack, &provider).await?;
        }
    }

    Ok(())
}
