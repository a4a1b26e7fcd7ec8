use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pushshift::models::{ClientConfig, CommentSearchParams, SubmissionSearchParams};
use pushshift::PushShift;

const USAGE: &str = "usage: pushshift-search <submissions|comments> [query-string]\n\
                     example: pushshift-search comments \"author=foo&limit=5\"";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let resource = match args.next() {
        Some(r) => r,
        None => bail!(USAGE),
    };
    let query = args.next().unwrap_or_default();
    if args.next().is_some() {
        bail!(USAGE);
    }

    let cfg = ClientConfig::from_env()?;
    let ps = PushShift::from_config(&cfg);

    let output = match resource.as_str() {
        "submissions" | "submission" => {
            let params: SubmissionSearchParams = serde_urlencoded::from_str(&query)
                .with_context(|| format!("invalid submission search params: {}", query))?;
            let list = ps
                .submissions
                .search(&params)
                .await
                .context("submission search failed")?;
            info!("Fetched {} submission(s)", list.len());
            serde_json::to_string_pretty(&list)?
        }
        "comments" | "comment" => {
            let params: CommentSearchParams = serde_urlencoded::from_str(&query)
                .with_context(|| format!("invalid comment search params: {}", query))?;
            let list = ps
                .comments
                .search(&params)
                .await
                .context("comment search failed")?;
            info!("Fetched {} comment(s)", list.len());
            serde_json::to_string_pretty(&list)?
        }
        other => bail!("unknown resource '{}'\n{}", other, USAGE),
    };

    println!("{}", output);
    Ok(())
}
