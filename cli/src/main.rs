use clap::{Args, Parser, Subcommand};
use reqwest::header::{COOKIE, HeaderMap, HeaderValue, SET_COOKIE};
use serde::Serialize;
use serde_json::Value;
use wire::{LoginRequest, NewAddress, NewServiceRequest, SignupRequest, endpoints};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing session cookie; run `sc login` and pass --session or set SC_SESSION")]
    MissingSession,
    #[error("login succeeded but the backend sent no session cookie")]
    NoSessionCookie,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("backend returned {status}: {message}")]
    Backend { status: u16, message: String },
    #[error(transparent)]
    InvalidInput(#[from] wire::WireError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "sc", about = "Service Connect backend CLI")]
struct Cli {
    #[arg(long, env = "SC_BASE_URL", default_value = "http://localhost:8000")]
    base_url: String,

    /// Session cookie pair (`name=value`) printed by `sc login`.
    #[arg(long, env = "SC_SESSION")]
    session: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    session: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and print the session cookie to export as `SC_SESSION`.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        mobile: String,
        #[arg(long)]
        password: String,
    },
    Profile,
    Services,
    Requests,
    CreateRequest(CreateRequestArgs),
    Addresses(AddressCommand),
}

#[derive(Args, Debug)]
struct CreateRequestArgs {
    #[arg(long, default_value = "1")]
    service_id: String,
    #[arg(long)]
    description: String,
    #[arg(long, default_value = "1")]
    location_id: String,
    #[arg(long, default_value = "")]
    urgency_level: String,
    #[arg(long, default_value = "")]
    additional_notes: String,
}

#[derive(Args, Debug)]
struct AddressCommand {
    #[command(subcommand)]
    command: AddressSubcommand,
}

#[derive(Subcommand, Debug)]
enum AddressSubcommand {
    List,
    Add {
        #[arg(long)]
        address: String,
        #[arg(long)]
        pincode: String,
    },
    Delete {
        location_id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url, session: cli.session };

    match cli.command {
        Command::Login { username, password } => run_login(&ctx, LoginRequest { username, password }).await,
        Command::Logout => {
            let json = api_request(&ctx, reqwest::Method::POST, endpoints::LOGOUT, Some(serde_json::json!({}))).await?;
            print_json(&json)
        }
        Command::Signup { username, email, mobile, password } => {
            let body = SignupRequest { username, email, mobile, password };
            let json = public_request(&ctx, reqwest::Method::POST, endpoints::SIGNUP, Some(&body)).await?;
            print_json(&json)
        }
        Command::Profile => print_json(&api_request(&ctx, reqwest::Method::GET, endpoints::PROFILE, None).await?),
        Command::Services => {
            print_json(&public_request::<()>(&ctx, reqwest::Method::GET, endpoints::ALL_SERVICES, None).await?)
        }
        Command::Requests => print_json(&api_request(&ctx, reqwest::Method::GET, endpoints::ALL_REQUESTS, None).await?),
        Command::CreateRequest(args) => {
            let body = NewServiceRequest::from_form(
                &args.service_id,
                &args.description,
                &args.location_id,
                &args.urgency_level,
                &args.additional_notes,
            )?;
            let json =
                api_request(&ctx, reqwest::Method::POST, endpoints::REQUESTS, Some(serde_json::to_value(&body)?)).await?;
            print_json(&json)
        }
        Command::Addresses(command) => run_addresses(&ctx, command).await,
    }
}

async fn run_login(cli: &CliContext, credentials: LoginRequest) -> Result<(), CliError> {
    let response = reqwest::Client::new()
        .post(url(&cli.base_url, endpoints::LOGIN))
        .json(&credentials)
        .send()
        .await?;
    let status = response.status();
    let cookie = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(session_cookie_pair);
    let body = response.text().await?;
    if !status.is_success() {
        return Err(backend_error(status.as_u16(), &body));
    }

    let cookie = cookie.ok_or(CliError::NoSessionCookie)?;
    eprintln!("{}", serde_json::from_str::<wire::MessageResponse>(&body).map_or(body, |m| m.message));
    println!("export SC_SESSION='{cookie}'");
    Ok(())
}

async fn run_addresses(cli: &CliContext, addresses: AddressCommand) -> Result<(), CliError> {
    match addresses.command {
        AddressSubcommand::List => {
            print_json(&api_request(cli, reqwest::Method::GET, endpoints::ADDRESSES, None).await?)
        }
        AddressSubcommand::Add { address, pincode } => {
            let body = serde_json::to_value(NewAddress { address, pincode })?;
            print_json(&api_request(cli, reqwest::Method::POST, endpoints::ADDRESSES, Some(body)).await?)
        }
        AddressSubcommand::Delete { location_id } => {
            let path = endpoints::address(location_id);
            api_request(cli, reqwest::Method::DELETE, &path, None).await?;
            println!("deleted address {location_id}");
            Ok(())
        }
    }
}

/// Call an endpoint that needs the session cookie.
async fn api_request(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let session = cli.session.as_deref().ok_or(CliError::MissingSession)?;

    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_str(session)?);

    let client = reqwest::Client::builder().default_headers(headers).build()?;
    send(client.request(method, url(&cli.base_url, path)), body.as_ref()).await
}

/// Call an endpoint that works without a session.
async fn public_request<B: Serialize>(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<&B>,
) -> Result<Value, CliError> {
    send(reqwest::Client::new().request(method, url(&cli.base_url, path)), body).await
}

async fn send<B: Serialize>(request: reqwest::RequestBuilder, body: Option<&B>) -> Result<Value, CliError> {
    let request = if let Some(json) = body { request.json(json) } else { request };

    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(backend_error(status.as_u16(), &text));
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

fn backend_error(status: u16, body: &str) -> CliError {
    let message = wire::error_detail(body).unwrap_or_else(|| {
        if body.trim().is_empty() { "Unknown error".to_owned() } else { body.trim().to_owned() }
    });
    CliError::Backend { status, message }
}

fn url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// The leading `name=value` pair of a `Set-Cookie` header.
fn session_cookie_pair(set_cookie: &str) -> Option<String> {
    let pair = set_cookie.split(';').next()?.trim();
    let (name, value) = pair.split_once('=')?;
    if name.trim().is_empty() || value.is_empty() {
        return None;
    }
    Some(pair.to_owned())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
