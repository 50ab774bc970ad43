use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod app;
mod commands;
mod logging;
mod notifier;
mod render;

#[derive(Parser)]
#[command(name = "brainstorm")]
#[command(about = "Brainstorm with the AI backend and manage your ideas and inquiries", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Deployment to talk to (development or production)
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// Origin that production API paths are resolved against
    #[arg(long, global = true)]
    pub origin: Option<String>,

    /// Application backend base URL
    #[arg(long, global = true)]
    pub app_api: Option<String>,

    /// AI brainstorming backend base URL
    #[arg(long, global = true)]
    pub ai_api: Option<String>,

    /// Directory holding config.toml, local storage and logs
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Keep local storage in memory for this run only
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Answer yes to every confirmation
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a bearer token obtained from the web login
    Login {
        /// Token to store; prompted for when omitted
        #[arg(long)]
        token: Option<String>,
    },
    /// Forget the stored token
    Logout,
    /// Show the logged-in account
    Whoami,
    /// My Ideas: list, show or delete saved ideas
    Ideas {
        #[command(subcommand)]
        action: Option<commands::ideas::IdeasAction>,
    },
    /// Run the brainstorming wizard
    Brainstorm,
    /// Support desk for your own inquiries
    Inquiry {
        #[command(subcommand)]
        action: Option<commands::inquiry::InquiryAction>,
    },
    /// Admin console for all inquiries
    Admin {
        #[command(subcommand)]
        action: Option<commands::admin::AdminAction>,
    },
    /// Print the resolved configuration
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = app::resolve_paths(&cli.global)?;
    let _log_guard = logging::init(&paths.logs_dir(), cli.global.verbose)?;

    let app = app::App::build(&cli.global, paths)?;

    match cli.command {
        Commands::Login { token } => commands::auth::login(&app, token).await?,
        Commands::Logout => commands::auth::logout(&app).await,
        Commands::Whoami => commands::auth::whoami(&app).await,
        Commands::Ideas { action } => commands::ideas::run(&app, action.unwrap_or_default()).await,
        Commands::Brainstorm => commands::brainstorm::run(&app).await?,
        Commands::Inquiry { action } => {
            commands::inquiry::run(&app, action.unwrap_or_default()).await
        }
        Commands::Admin { action } => commands::admin::run(&app, action.unwrap_or_default()).await,
        Commands::Config => commands::config::show(&app),
    }

    Ok(())
}
