use std::{path::PathBuf, sync::Arc, time::Duration};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::{Section, eyre::eyre};
use docshell::{
    config::{DEFAULT_ADDR, FETCH_TIMEOUT, site_meta},
    content::HttpMarkdownSource,
    nav::{LinkStyle, NavTable},
    pages::{Fragments, PageSet, render_page},
    server::{AppState, router},
    shell::{ShellOptions, SiteShell},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Serve the Mechanic documentation site")]
struct Cli {
    /// Directory holding the header/footer fragments and static assets.
    #[arg(long, default_value = ".", env = "DOCSHELL_ROOT")]
    root: PathBuf,

    #[arg(long, value_enum, default_value_t = LinkStyleArg::Plain)]
    link_style: LinkStyleArg,

    /// Leave the fork ribbon out of every page.
    #[arg(long)]
    no_ribbon: bool,

    /// Timeout in seconds for fetching page content.
    #[arg(long, default_value_t = FETCH_TIMEOUT.as_secs())]
    timeout: u64,

    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve pages over HTTP.
    Serve {
        #[arg(long, default_value = DEFAULT_ADDR)]
        addr: String,
    },
    /// Render one page to stdout.
    Render { page: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LinkStyleArg {
    Plain,
    Emphasized,
}

impl From<LinkStyleArg> for LinkStyle {
    fn from(arg: LinkStyleArg) -> Self {
        match arg {
            LinkStyleArg::Plain => LinkStyle::Plain,
            LinkStyleArg::Emphasized => LinkStyle::Emphasized,
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so `render` output stays clean.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let nav = NavTable::default_site().with_note(|| "While building the navigation table")?;
    let shell = SiteShell::new(
        nav,
        ShellOptions {
            link_style: cli.link_style.into(),
            ribbon: !cli.no_ribbon,
        },
    );
    let pages =
        PageSet::default_site(&site_meta()).with_note(|| "While building the page table")?;
    let source = HttpMarkdownSource::new(Duration::from_secs(cli.timeout));

    match cli.command {
        Command::Serve { addr } => {
            let state = Arc::new(AppState {
                root: cli.root,
                shell,
                pages,
                source: Arc::new(source),
            });
            serve(state, &addr)
        }
        Command::Render { page } => {
            let page = pages
                .get(&page)
                .ok_or_else(|| eyre!("Unknown page {page:?}"))
                .with_suggestion(|| "Known pages are index, install and userguide")?;
            let fragments = Fragments::load(&cli.root);
            let html = render_page(&shell, page, &fragments, &source)
                .with_note(|| format!("While fetching {}", page.source_url))?;
            println!("{html}");
            Ok(())
        }
    }
}

fn serve(state: Arc<AppState>, addr: &str) -> color_eyre::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .with_note(|| "While starting the async runtime")?;

    runtime.block_on(async {
        let app = router(state);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_note(|| format!("While binding {addr}"))?;
        info!(site = %site_meta().title, "Serving on http://{addr}");
        axum::serve(listener, app).await?;
        Ok::<_, color_eyre::Report>(())
    })
}
