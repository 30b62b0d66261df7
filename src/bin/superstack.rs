//! Fetch an article page and save a clean standalone HTML copy.
//!
//! Usage: `superstack <source_url> [output_path]`

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use superstack::{extract_article, fetch_page, render_document, write_document, Options};
use tracing_subscriber::EnvFilter;

/// Strip an article page down to a clean, offline-readable HTML file.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    after_help = "Example:\n  superstack https://substack.com/inbox/post/183535301 article.html"
)]
struct Args {
    /// Article page to fetch
    source_url: String,

    /// Destination file (overwritten if it exists)
    #[arg(default_value = "output.html")]
    output_path: PathBuf,

    /// Request timeout in seconds
    #[arg(
        long = "timeout",
        env = "SUPERSTACK_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    /// User-Agent header sent with the request
    #[arg(long, env = "SUPERSTACK_USER_AGENT")]
    user_agent: Option<String>,
}

impl Args {
    fn options(&self) -> Options {
        let mut options = Options {
            timeout: Duration::from_secs(self.timeout_secs),
            ..Options::default()
        };
        if let Some(ref agent) = self.user_agent {
            options.user_agent.clone_from(agent);
        }
        options
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    println!("Fetching: {}", args.source_url);
    let html = fetch_page(&args.source_url, &args.options())
        .with_context(|| format!("failed to fetch {}", args.source_url))?;

    println!("Extracting article...");
    let article = extract_article(&html).context("failed to extract article")?;

    println!("Title: {}", article.title);
    println!("Author: {}", article.author);

    let document = render_document(&article);
    write_document(&args.output_path, &document)
        .with_context(|| format!("failed to write {}", args.output_path.display()))?;

    println!("Saved to: {}", args.output_path.display());
    Ok(())
}

fn main() {
    init_logging();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
