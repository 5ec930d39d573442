mod store;
mod transport;


use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use client::config::ApiConfig;
use client::data::regions::{departments_for_region, region_for_department};
use client::net::api::AuthClient;
use client::net::error::AuthError;
use client::net::types::{LoginCredentials, Registration, Role, UserProfile};
use client::state::session::SessionStore;
use client::state::storage::KeyValueStore;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::store::FileStore;
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `soundmap login` first")]
    NotLoggedIn,
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("unknown department code `{0}`")]
    UnknownDepartment(String),
}

#[derive(Parser, Debug)]
#[command(name = "soundmap", about = "SoundMap account and session CLI")]
struct Cli {
    #[arg(long, env = "SOUNDMAP_BASE_URL", default_value = client::config::DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = "SOUNDMAP_SESSION_FILE", default_value = ".soundmap-session.json")]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account.
    Register(RegisterArgs),
    /// Log in and store the session.
    Login(LoginArgs),
    /// Fetch the basic profile with the stored token.
    Whoami,
    /// Fetch the detailed profile with the stored token.
    Profile,
    /// Show the stored session without contacting the backend.
    Status,
    /// Print the URL of an endpoint for the stored user's role.
    Url { endpoint: String },
    /// Look up the region of a department code.
    Region { code: String },
    /// Forget the stored session.
    Logout,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "SOUNDMAP_PASSWORD")]
    password: String,
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long, help = "Birth date as YYYY-MM-DD")]
    birth_date: Option<String>,
    #[arg(long, help = "Comma separated, e.g. \"Rock, Jazz\"")]
    favorite_genres: Option<String>,
    #[arg(long, help = "listener or artist")]
    role: Option<String>,
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    username: String,
    #[arg(long, env = "SOUNDMAP_PASSWORD")]
    password: String,
}

type CliClient = AuthClient<ReqwestTransport, FileStore>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let http = reqwest::Client::builder().build()?;
    let client = AuthClient::new(
        ApiConfig::new(cli.base_url),
        ReqwestTransport::new(http),
        FileStore::new(cli.session_file),
    );

    match cli.command {
        Command::Register(args) => run_register(&client, args).await,
        Command::Login(args) => run_login(&client, args).await,
        Command::Whoami => run_whoami(&client).await,
        Command::Profile => run_profile(&client).await,
        Command::Status => {
            println!("{}", describe_session(client.session()));
            Ok(())
        }
        Command::Url { endpoint } => {
            println!("{}", client.resolve_role_based_url(&endpoint));
            Ok(())
        }
        Command::Region { code } => run_region(&code),
        Command::Logout => {
            client.logout();
            tracing::info!("session cleared");
            println!("logged out");
            Ok(())
        }
    }
}

fn registration_from_args(args: RegisterArgs) -> Registration {
    let mut registration = Registration::new(args.username, args.email, args.password);
    registration.first_name = args.first_name;
    registration.last_name = args.last_name;
    registration.birth_date = args.birth_date;
    registration.favorite_genres = args.favorite_genres;
    registration.role = args.role.map(Role::from);
    registration
}

async fn run_register(client: &CliClient, args: RegisterArgs) -> Result<(), CliError> {
    let profile = client.register(&registration_from_args(args)).await?;
    print_profile(&profile)
}

async fn run_login(client: &CliClient, args: LoginArgs) -> Result<(), CliError> {
    let credentials = LoginCredentials::new(args.username, args.password);
    let outcome = client.complete_login(&credentials).await?;
    tracing::info!(path = %client.session().storage().path().display(), "session stored");
    print_profile(&outcome.profile)
}

async fn run_whoami(client: &CliClient) -> Result<(), CliError> {
    let token = client.session().access_token().ok_or(CliError::NotLoggedIn)?;
    let profile = client.fetch_profile(&token).await?;
    print_profile(&profile)
}

async fn run_profile(client: &CliClient) -> Result<(), CliError> {
    let token = client.session().access_token().ok_or(CliError::NotLoggedIn)?;
    let profile = client.fetch_detailed_profile(&token).await?;
    print_profile(&profile)
}

fn run_region(code: &str) -> Result<(), CliError> {
    let region = region_for_department(code).ok_or_else(|| CliError::UnknownDepartment(code.to_owned()))?;
    println!("{region}: {}", departments_for_region(region).join(", "));
    Ok(())
}

/// One-line summary of the stored session.
fn describe_session<S: KeyValueStore>(session: &SessionStore<S>) -> String {
    if !session.is_authenticated() {
        return "not logged in".to_owned();
    }
    match session.current_user() {
        Some(user) => format!("logged in as {} ({})", user.username, user.role),
        None => format!("logged in ({} role, no stored profile)", Role::Guest),
    }
}

fn print_profile(profile: &UserProfile) -> Result<(), CliError> {
    print_json(&serde_json::to_value(profile)?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
