mod commands;
mod http;
mod session_file;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::CliError;
use crate::http::ReqwestAuthApi;
use crate::session_file::FileSessionStore;

#[derive(Parser, Debug)]
#[command(name = "deepcheck", about = "DeepCheck account CLI")]
struct Cli {
    #[arg(long, env = "DEEPCHECK_API_URL", default_value = authflow::api::DEFAULT_API_URL)]
    base_url: String,

    #[arg(long, env = "DEEPCHECK_SESSION_FILE", default_value = ".deepcheck-session.json")]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new account.
    Signup(SignupArgs),
    /// Log in and store the session.
    Login(LoginArgs),
    /// Print the stored user record.
    Whoami,
    /// Forget the stored session.
    Logout,
    /// Check that the auth backend answers.
    Ping,
}

#[derive(Args, Debug)]
struct SignupArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    confirm_password: String,
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    }
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let store = FileSessionStore::new(cli.session_file);
    match cli.command {
        Command::Signup(args) => {
            let api = ReqwestAuthApi::new(&cli.base_url)?;
            commands::run_signup(&api, &args.name, &args.email, &args.password, &args.confirm_password).await
        }
        Command::Login(args) => {
            let api = ReqwestAuthApi::new(&cli.base_url)?;
            commands::run_login(&api, &store, &args.email, &args.password).await
        }
        Command::Whoami => commands::run_whoami(&store),
        Command::Logout => commands::run_logout(&store),
        Command::Ping => {
            let api = ReqwestAuthApi::new(&cli.base_url)?;
            commands::run_ping(&api).await
        }
    }
}
