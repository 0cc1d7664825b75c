use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use photo_core::SearchQuery;
use photo_search::state::AppConfig;
use photosearch::{PhotoSearch, PxFetcher};
use std::env;
use tokio::sync::oneshot;

const USAGE: &str = "Usage: find_photos <term> [--cc] [--between <min_rfc3339> <max_rfc3339>]";

fn parse_date(s: &str) -> Result<DateTime<Utc>> {
    let dt = DateTime::parse_from_rfc3339(s).with_context(|| format!("Invalid date: {}", s))?;
    Ok(dt.with_timezone(&Utc))
}

fn parse_args(args: &[String]) -> Result<SearchQuery> {
    let (term, rest) = args.split_first().context(USAGE)?;
    let mut query = SearchQuery::new(term.as_str());

    let mut rest = rest.iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--cc" => query = query.creative_commons_only(),
            "--between" => {
                let min = rest.next().context(USAGE)?;
                let max = rest.next().context(USAGE)?;
                query = query.between(parse_date(min)?, parse_date(max)?);
            }
            other => anyhow::bail!("Unknown option: {}\n{}", other, USAGE),
        }
    }

    Ok(query)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    photo_search::init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let query = match parse_args(&args) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(2);
        }
    };

    let config = AppConfig::from_env()?;
    let search = PhotoSearch::new(PxFetcher::new(photo_search::http_client()?), config.consumer_key)
        .with_api_url(config.api_url);

    println!("Searching: {}", query.text);

    let (tx, rx) = oneshot::channel();
    let task = search.find_photos_with(query, move |result| {
        let _ = tx.send(result);
    });
    task.await.context("Search task failed")?;

    match rx.await.context("Search finished without a result")? {
        Ok(photos) => {
            println!("----------------------------------------");
            for photo in &photos {
                println!(
                    "{}  {}  {}",
                    photo.captured_at.to_rfc3339(),
                    photo.title,
                    photo.image_url
                );
            }
            println!("----------------------------------------");
            println!("{} photos", photos.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            tracing::debug!("Search error: {}", e);
            std::process::exit(1);
        }
    }
}
