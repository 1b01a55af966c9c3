use clap::Parser;
use tierdns_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "tierdns")]
#[command(version)]
#[command(about = "tierdns - authoritative DNS with a SQLite record store and static fallback")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind,
        database_path: cli.database,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting tierdns v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await;
    let repos = di::Repositories::new(pool, &config.database);

    if config.database.seed_defaults && repos.online {
        bootstrap::seed_defaults(&repos).await;
    }

    let use_cases = di::UseCases::new(&config, &repos)?;

    let dns_socket = server::bind_dns_socket(config.server.dns_addr()?)?;
    let dns_task = tokio::spawn(server::start_dns_server(
        dns_socket,
        use_cases.resolve.clone(),
        config.server.max_inflight_queries,
    ));

    let web_task = if config.server.web_enabled {
        let web_addr = config.server.web_addr()?;
        let state = use_cases.app_state();
        Some(tokio::spawn(async move {
            if let Err(e) = server::start_web_server(web_addr, state).await {
                error!(error = %e, "Web server error");
            }
        }))
    } else {
        info!("Web server disabled");
        None
    };

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    dns_task.abort();
    if let Some(task) = web_task {
        task.abort();
    }

    info!("Server shutdown complete");
    Ok(())
}
