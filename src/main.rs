use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use image_finder::api::{ImageApi, MockApi, PixabayApi};
use image_finder::app::{AppContext, Viewport};
use image_finder::config::{find_config_file, get_config, load_config, Config, ConfigFile};
use image_finder::ui::{
    print_divider, print_page_summary, print_section, print_status, Status, TerminalNotifier,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Cards per gallery row and pixel sizes used to model the scroll geometry
const CARDS_PER_ROW: u32 = 4;
const CARD_HEIGHT: u32 = 280;
const WINDOW_HEIGHT: u32 = 900;

/// Image Finder - Search images and browse them page by page
#[derive(Parser, Debug)]
#[command(name = "image-finder")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search images and browse the results page by page", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Serve this many generated results instead of calling the API
    #[arg(long, global = true)]
    offline: Option<usize>,

    /// Show all environment variables
    #[arg(long, global = true)]
    env: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search once and load up to N pages
    #[command(alias = "s")]
    Search {
        /// Search query string
        query: String,

        /// Number of pages to load (first page plus load-more clicks)
        #[arg(long, short, default_value_t = 1)]
        pages: u32,

        /// Write the gallery as an HTML document
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Line-driven session: type a query, `:more`, `:end`, `:quit`
    #[command(alias = "i")]
    Interactive {
        /// Rewrite the gallery HTML document after every command
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Destination (default: ./image-finder.toml)
        path: Option<PathBuf>,
    },
}

fn print_env_vars() {
    println!("Image Finder - Environment Variables");
    println!();
    println!("API Keys:");
    println!("  PIXABAY_API_KEY             API key for the Pixabay search API");
    println!();
    println!("Configuration Overrides:");
    println!("  IMAGE_FINDER_API__BASE_URL          Search endpoint");
    println!("  IMAGE_FINDER_API__KEY               API key");
    println!("  IMAGE_FINDER_TIMING__INPUT_QUIET_MS Input debounce (default: 200)");
    println!("  IMAGE_FINDER_TIMING__SCROLL_QUIET_MS Scroll debounce (default: 500)");
    println!();
    println!("Logging:");
    println!("  IMAGE_FINDER_LOGGING__LEVEL Default log level (default: warn)");
    println!("  RUST_LOG                    Log filter (e.g., image_finder=debug)");
    std::process::exit(0);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.env {
        print_env_vars();
    }

    let config_path = cli.config.clone().or_else(find_config_file);
    let config = match &config_path {
        Some(path) => load_config(path)?,
        None => get_config(),
    };

    // Initialize tracing based on verbosity, falling back to the configured level
    let log_level = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("image_finder={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(path) = &config_path {
        tracing::info!("Using config file: {}", path.display());
    }

    match cli.command {
        Some(Commands::Search { query, pages, out }) => {
            let mut ctx = build_context(&config, cli.offline)?;
            run_search(&mut ctx, &config, &query, pages).await;
            if let Some(path) = out {
                write_document(&ctx, &path)?;
            }
        }

        Some(Commands::Interactive { out }) => {
            let mut ctx = build_context(&config, cli.offline)?;
            run_interactive(&mut ctx, out.as_deref()).await?;
        }

        Some(Commands::Config {
            action: ConfigAction::Init { path },
        }) => {
            let path = path.unwrap_or_else(|| PathBuf::from(image_finder::config::CONFIG_FILE_NAME));
            ConfigFile::template()
                .save(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            print_status(
                Status::Success,
                &format!("Wrote default configuration to {}", path.display()),
            );
        }

        None => {
            print_section("Image Finder");
            println!("  image-finder search \"yellow flowers\" --pages 2 --out gallery.html");
            println!("  image-finder interactive --out gallery.html");
            println!("  image-finder config init");
            println!();
        }
    }

    Ok(())
}

fn build_context(config: &Config, offline: Option<usize>) -> Result<AppContext> {
    let api: Arc<dyn ImageApi> = match offline {
        Some(total) => Arc::new(MockApi::with_total(total)),
        None => Arc::new(PixabayApi::from_config(&config.api)?),
    };
    tracing::debug!(api = api.name(), "Search API ready");

    Ok(AppContext::with_api(
        api,
        Box::new(TerminalNotifier),
        config,
    )?)
}

/// Sleep until pending debounced work is due, then run it.
async fn settle(ctx: &mut AppContext) {
    while let Some(deadline) = ctx.next_deadline() {
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        ctx.tick(Instant::now());
    }
}

/// Scroll geometry for the cards currently rendered
fn viewport_for(ctx: &AppContext, offset: u32) -> Viewport {
    let cards = ctx.gallery().lightbox().items().len() as u32;
    let rows = cards.div_ceil(CARDS_PER_ROW);
    Viewport::new(WINDOW_HEIGHT, offset, rows * CARD_HEIGHT)
}

fn summarize(ctx: &AppContext) {
    let client = ctx.client();
    if client.query().is_empty() {
        return;
    }
    print_page_summary(
        client.query(),
        client.current_page(),
        client.last_page(),
        ctx.gallery().lightbox().items().len(),
    );
}

async fn type_and_submit(ctx: &mut AppContext, query: &str) {
    ctx.on_input(query, Instant::now());
    settle(ctx).await;
    if ctx.refs().search_button.disabled {
        print_status(Status::Warning, "Type a query first");
        return;
    }
    ctx.on_submit().await;
}

async fn run_search(ctx: &mut AppContext, config: &Config, query: &str, pages: u32) {
    tracing::debug!(input_quiet = ?config.timing.input_quiet(), "Submitting query");
    type_and_submit(ctx, query).await;

    for _ in 1..pages {
        if !ctx.refs().load_button.is_actionable() {
            break;
        }
        ctx.on_load_more().await;
    }

    summarize(ctx);
}

async fn run_interactive(ctx: &mut AppContext, out: Option<&Path>) -> Result<()> {
    print_section("Image Finder");
    println!("Type a query and press enter. Commands: :more, :end, :quit");
    print_divider();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            ":quit" | ":q" => break,
            ":more" | ":m" => {
                if ctx.refs().load_button.is_actionable() {
                    ctx.on_load_more().await;
                } else {
                    print_status(Status::Info, "Nothing more to load");
                }
            }
            ":end" | ":e" => {
                let mut viewport = viewport_for(ctx, 0);
                viewport.scroll_to_bottom();
                ctx.on_scroll(viewport, Instant::now());
                settle(ctx).await;
            }
            text => type_and_submit(ctx, text).await,
        }

        summarize(ctx);
        if let Some(path) = out {
            write_document(ctx, path)?;
        }
    }

    Ok(())
}

fn write_document(ctx: &AppContext, path: &Path) -> Result<()> {
    std::fs::write(path, ctx.render_document())
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!("Gallery written to {}", path.display());
    Ok(())
}
