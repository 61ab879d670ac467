//! kbw - An embeddable knowledge-base widget.
//!
//! This binary serves the widget read API, prints embed code, previews
//! widgets mounted on a host page, and queries a running server.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use kbw_client::{HttpApiClient, WidgetApi};
use kbw_config::Config;
use kbw_protocol::Theme;
use kbw_server::{ContentStore, build_router, serve};
use kbw_widget::loader::embed_snippet;
use kbw_widget::{HtmlContainer, Loader, Mount, WidgetController};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kbw")]
#[command(version, about = "Embeddable knowledge-base widget")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the widget read API, article pages and stylesheet
    Serve {
        /// JSON content file (serves the demo content when omitted)
        #[arg(long)]
        content: Option<PathBuf>,
        /// Address to listen on
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print the embed code for a knowledge base
    Snippet {
        knowledge_base_id: String,
        /// Origin the loader is served from
        #[arg(long)]
        origin: Option<String>,
        #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
        theme: ThemeArg,
    },
    /// Mount widgets on a host page and print the resulting markup
    Preview {
        page: PathBuf,
        /// URL the page is served from
        #[arg(long)]
        page_url: String,
    },
    /// Fetch a resource from a running server and print it as JSON
    Fetch {
        #[arg(value_enum)]
        resource: Resource,
        id: String,
        /// Origin of the server
        #[arg(long)]
        origin: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Resource {
    Kb,
    Categories,
    Articles,
    Article,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;

    match cli.command {
        Commands::Serve { content, bind } => run_serve(config, content, bind).await,
        Commands::Snippet {
            knowledge_base_id,
            origin,
            theme,
        } => {
            let origin = origin.unwrap_or_else(|| config.origin());
            println!(
                "{}",
                embed_snippet(
                    &knowledge_base_id,
                    theme.into(),
                    &origin,
                    &config.loader.loader_path
                )
            );
            Ok(())
        }
        Commands::Preview { page, page_url } => run_preview(config, &page, &page_url).await,
        Commands::Fetch {
            resource,
            id,
            origin,
        } => {
            let origin = origin.unwrap_or_else(|| config.origin());
            run_fetch(&origin, resource, &id).await
        }
    }
}

async fn run_serve(
    mut config: Config,
    content: Option<PathBuf>,
    bind: Option<String>,
) -> Result<()> {
    if let Some(content) = content {
        config.server.content_path = Some(content);
    }
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    let addr = config.server.socket_addr()?;

    let store = match &config.server.content_path {
        Some(path) => ContentStore::load(path)
            .with_context(|| format!("Failed to load content from {}", path.display()))?,
        None => {
            info!("no content file configured, serving demo content");
            ContentStore::demo()
        }
    };

    let router = build_router(store, config.server.assets_dir.as_deref());
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    serve(listener, router, shutdown_signal())
        .await
        .context("Server error")?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

async fn run_preview(config: Config, page: &Path, page_url: &str) -> Result<()> {
    let html = std::fs::read_to_string(page)
        .with_context(|| format!("Failed to read {}", page.display()))?;

    let loader = Loader::new(config.loader);
    let page = loader.parse_page(&html, page_url)?;
    let resources = loader.resources(&page)?;
    let client = HttpApiClient::new(resources.origin())?;

    println!("{}", resources.head_markup());

    let mounts = loader
        .initialize(page, &client, WidgetController::<HtmlContainer>::from_container)
        .await;
    for mount in mounts {
        let container = match mount {
            Mount::Ready(mut widget) => {
                widget.load(&client).await;
                widget.into_container()
            }
            Mount::Failed(container) => container,
        };
        println!("{}", container.outer_html());
    }
    Ok(())
}

async fn run_fetch(origin: &str, resource: Resource, id: &str) -> Result<()> {
    let client = HttpApiClient::new(origin)?;

    let json = match resource {
        Resource::Kb => serde_json::to_string_pretty(&client.fetch_knowledge_base(id).await?)?,
        Resource::Categories => serde_json::to_string_pretty(&client.fetch_categories(id).await?)?,
        Resource::Articles => serde_json::to_string_pretty(&client.fetch_articles(id).await?)?,
        Resource::Article => serde_json::to_string_pretty(&client.fetch_article(id).await?)?,
    };
    println!("{json}");
    Ok(())
}
