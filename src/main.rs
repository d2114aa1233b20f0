use storefront::api::{self, ProductRow};
use storefront::{build_router, config, AppState, ShopifyConfig};

use std::net::{AddrParseError, SocketAddr};
use std::process;
use std::time::Duration;
use clap::{Parser, Subcommand};
use thiserror::Error;
use yansi::Paint;
use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use comfy_table::{Table, presets, modifiers, ContentArrangement};
use terminal_size::{Width, terminal_size};

use config::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_HOST, DEFAULT_PORT};

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let client = match api::build_client(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS)) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", Paint::red("Failed to create HTTP client"), e);
            process::exit(1);
        }
    };
    AppState::new(client, ShopifyConfig::from_env())
}

/// Reasons the web server stops before or while serving.
#[derive(Debug, Error)]
enum ServeError {
    #[error("Failed to read custom stylesheet at {path}: {source}")]
    Stylesheet { path: String, source: std::io::Error },

    #[error("Invalid listen address {addr}: {source}")]
    Address { addr: String, source: AddrParseError },

    #[error("Failed to bind to {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },

    #[error("Server error: {0}")]
    Server(std::io::Error),
}

impl ServeError {
    fn hint(&self) -> Option<&'static str> {
        match self {
            ServeError::Bind { .. } => Some("Stop the process holding this port, or pass a different --port value."),
            _ => None,
        }
    }
}

async fn run_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) -> Result<(), ServeError> {
    if let Some(path) = stylesheet {
        let css = std::fs::read_to_string(&path).map_err(|source| ServeError::Stylesheet { path: path.clone(), source })?;
        tracing::info!(%path, "Loaded custom stylesheet");
        state.custom_css = Some(css);
    }

    let missing = state.shopify.missing_settings();
    if !missing.is_empty() {
        tracing::warn!(?missing, "Commerce platform settings are empty; the home page will fail to load products");
    }

    let raw_addr = format!("{}:{}", host, port);
    let addr: SocketAddr = raw_addr.parse().map_err(|source| ServeError::Address { addr: raw_addr.clone(), source })?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    tracing::info!(%addr, products_url = %state.shopify.products_url(), "Storefront listening");
    println!("{} {}", Paint::green("Storefront running on"), Paint::cyan(&format!("http://{}", addr)));
    axum::serve(listener, build_router(state)).await.map_err(ServeError::Server)
}

async fn serve_or_exit(state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Err(e) = run_server(state, host, port, stylesheet).await {
        tracing::error!(error = %e, "Storefront stopped");
        eprintln!("{}", Paint::red(&e.to_string()));
        if let Some(hint) = e.hint() {
            eprintln!("{}", Paint::yellow(hint));
        }
        process::exit(1);
    }
}

fn print_products(body: &serde_json::Value) {
    let Some(rows) = api::product_rows(body) else {
        // No listing in the body (an error envelope, usually); show it as sent.
        println!("{}", serde_json::to_string_pretty(body).unwrap_or_default());
        return;
    };
    if rows.is_empty() {
        println!("(no products)");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(ProductRow::HEADERS);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    for row in &rows {
        table.add_row(row.cells());
    }
    println!("\n{table}\n{} product(s)", rows.len());
}

#[derive(Parser)]
#[command(
    name = "storefront",
    author,
    version,
    about = "Storefront web server",
    long_about = r#"Storefront — a server-rendered shop front backed by a commerce platform admin API.

Provide SHOPIFY_HOSTNAME and SHOPIFY_API_KEY through the environment or a .env file (`--env-file`).

Examples:
  1) Run the web server:
      storefront serve --host 127.0.0.1 --port 3000
  2) Fetch the product list once:
      storefront products
"#,
    after_help = "Use `storefront <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response echo
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Fetch the product list from the admin API and print it
    Products {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Print the raw JSON instead of a table
        #[arg(long)]
        raw: bool,
    },
    /// Validate configuration
    #[command(about = "Validate configuration and optionally API connectivity.", long_about = "Check that SHOPIFY_HOSTNAME and SHOPIFY_API_KEY are set, and with --ping try one products request against the configured store.")]
    CheckConfig {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Also issue a products request
        #[arg(long)]
        ping: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    // Serve the web app when no command is given
    let Some(command) = cli.command else {
        let state = build_state_from_env(None);
        serve_or_exit(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };

    match command {
        Commands::Serve { host, port, env_file, stylesheet } => {
            let state = build_state_from_env(env_file.as_deref());
            serve_or_exit(state, &host, port, stylesheet).await;
        }
        Commands::Products { env_file, raw } => {
            let state = build_state_from_env(env_file.as_deref());
            match api::fetch_products(&state.client, &state.shopify).await {
                Ok(products) => {
                    if raw {
                        println!("{}", serde_json::to_string_pretty(&products).unwrap_or_default());
                    } else {
                        print_products(&products);
                    }
                }
                Err(e) => {
                    eprintln!("{}: {}", Paint::red("Failed to fetch products"), e);
                    process::exit(1);
                }
            }
        }
        Commands::CheckConfig { env_file, ping } => {
            let state = build_state_from_env(env_file.as_deref());
            let missing = state.shopify.missing_settings();
            if missing.is_empty() {
                println!("{}", Paint::green("Configuration looks good."));
                println!("Products endpoint: {}", state.shopify.products_url());
            } else {
                for name in &missing {
                    eprintln!("{} {}", Paint::red("Missing setting:"), name);
                }
            }
            if ping {
                match api::fetch_products(&state.client, &state.shopify).await {
                    Ok(_) => println!("{}", Paint::green("Products request succeeded.")),
                    Err(e) => {
                        eprintln!("{}: {}", Paint::red("Products request failed"), e);
                        process::exit(1);
                    }
                }
            }
            if !missing.is_empty() {
                process::exit(1);
            }
        }
    }
}
