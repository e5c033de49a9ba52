use anyhow::{bail, Context};
use article_parser::observability::{init_logging, LogConfig, LogFormat};
use article_parser::{extract, utils, FetchConfig, HttpFetcher, PageFetcher};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract title, date and main text from an article page", long_about = None)]
struct Args {
    /// URL of the article to fetch
    #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
    url: Option<String>,

    /// Read HTML from a local file instead of fetching
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Write the JSON result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fetch timeout in seconds
    #[arg(short, long, env = "FETCH_TIMEOUT_SECS", default_value_t = 30)]
    timeout: u64,

    /// Log encoding: text or json
    #[arg(long, env = "LOG_FORMAT", default_value = "text")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_logging(LogConfig {
        format: args.log_format,
        default_filter: "warn,article_parser=info",
    })?;

    let html = match (&args.url, &args.file) {
        (Some(raw), _) => {
            let Some(url) = utils::validate_url(raw) else {
                bail!("`{raw}` is not an absolute http(s) URL");
            };
            let config = FetchConfig::default().with_timeout(Duration::from_secs(args.timeout));
            HttpFetcher::new(&config)?
                .fetch(url.as_str())
                .await
                .with_context(|| format!("could not load {url}"))?
        }
        (None, Some(path)) => utils::read_html(path)
            .with_context(|| format!("could not read {}", path.display()))?,
        (None, None) => bail!("either --url or --file is required"),
    };

    let result = extract(&html);
    tracing::info!(content_chars = result.content_length(), "article extracted");

    match &args.output {
        Some(path) => utils::save_json(&result, path)?,
        None => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}
