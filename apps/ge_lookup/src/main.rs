use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use ge_exchange::{Category, GrandExchange, ItemInfo};
use image::ImageFormat;
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
mod settings;
use settings::Settings;

#[derive(Parser, Debug)]
#[command(author, version, about = "Grand Exchange item lookups", long_about = None)]
struct Args {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full record from the official item database
    Detail { item_id: i32 },
    /// Daily price history from the official item database
    Graph {
        item_id: i32,
        /// Only show the most recent N days
        #[arg(long, default_value = "30")]
        days: usize,
    },
    /// Item counts per starting letter in a category
    Category {
        #[arg(value_parser = parse_category)]
        category: Category,
    },
    /// One page of current prices in a category
    Prices {
        #[arg(value_parser = parse_category)]
        category: Category,
        alpha: char,
        #[arg(long, default_value = "1")]
        page: u32,
    },
    /// Search rsapi.net by name
    Search { query: String },
    /// Look up one or more items on rsapi.net
    Item {
        #[arg(required = true, num_args = 1.., value_delimiter = ',')]
        item_ids: Vec<i32>,
    },
    /// Download an item thumbnail as PNG
    Thumbnail { item_id: i32, output: PathBuf },
}

/// Accepts a category id or its exact display name.
fn parse_category(value: &str) -> Result<Category, String> {
    let category = match value.trim().parse::<i32>() {
        Ok(id) => Category::from_id(id),
        Err(_) => Category::from_name(value.trim()),
    };
    category.ok_or_else(|| format!("unknown category: {value}"))
}

fn print<T: Serialize + Display>(value: &T, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{value}");
    }
    Ok(())
}

fn print_list<T: Serialize + Display>(values: &[T], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(values)?);
    } else if values.is_empty() {
        println!("No items found");
    } else {
        for value in values {
            println!("{value}");
        }
    }
    Ok(())
}

async fn run(ge: GrandExchange, command: Command, json: bool) -> anyhow::Result<()> {
    match command {
        Command::Detail { item_id } => {
            let Some(item) = ge
                .ge_item_info(item_id)
                .await
                .with_context(|| format!("Failed to fetch item {item_id}"))?
            else {
                bail!("No item with id {item_id} in the item database");
            };
            print(&item, json)?;
        }
        Command::Graph { item_id, days } => {
            let graph = ge
                .item_graph(item_id)
                .await
                .with_context(|| format!("Failed to fetch price graph for item {item_id}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&graph)?);
            } else {
                let skip = graph.daily().len().saturating_sub(days);
                for (at, price) in graph.daily().iter().skip(skip) {
                    let average = graph.average().get(at).copied().unwrap_or_default();
                    println!("{}  {price:>14}  avg {average:>14}", at.format("%Y-%m-%d"));
                }
            }
        }
        Command::Category { category } => {
            let info = ge
                .category_info(category)
                .await
                .with_context(|| format!("Failed to fetch category {category}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{category} (id {})", category.id());
                for count in info.alpha.iter().filter(|count| count.items > 0) {
                    println!("  {}: {}", count.letter, count.items);
                }
            }
        }
        Command::Prices {
            category,
            alpha,
            page,
        } => {
            let prices = ge
                .category_prices(category, alpha, page)
                .await
                .with_context(|| format!("Failed to fetch prices for {category} '{alpha}'"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&prices)?);
            } else {
                println!("{category} '{alpha}' page {page} of {} items", prices.total());
                print_list(prices.items(), false)?;
            }
        }
        Command::Search { query } => {
            let items = ge
                .search_items(&query)
                .await
                .with_context(|| format!("Failed to search for {query:?}"))?;
            debug!(count = items.len(), "search finished");
            print_list(&items, json)?;
        }
        Command::Item { item_ids } => {
            let items = ge
                .item_infos_from(item_ids.iter().copied())
                .await
                .with_context(|| format!("Failed to fetch items {item_ids:?}"))?;
            print_list(&items, json)?;
            if !json && items.len() < item_ids.len() {
                let found: Vec<i32> = items.iter().map(|item| item.id()).collect();
                let missing: Vec<i32> = item_ids
                    .into_iter()
                    .filter(|id| !found.contains(id))
                    .collect();
                if !missing.is_empty() {
                    println!("Not found: {missing:?}");
                }
            }
        }
        Command::Thumbnail { item_id, output } => {
            let thumbnail = ge
                .thumbnail(item_id)
                .await
                .with_context(|| format!("Failed to fetch thumbnail for item {item_id}"))?;
            thumbnail
                .save_with_format(&output, ImageFormat::Png)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!(item_id, path = %output.display(), "thumbnail saved");
            println!(
                "Saved {}x{} thumbnail to {}",
                thumbnail.width(),
                thumbnail.height(),
                output.display()
            );
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let ge = Settings::from_env()?.grand_exchange()?;

    let rt = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    rt.block_on(run(ge, args.command, args.json))
}
