//! Command-line front-end for the Cairo Bites menu and cart

use libcairobites::core::events::CartEvent;
use libcairobites::utils::format_price;
use libcairobites::{CartConfig, CustomerApi};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::sync::mpsc::UnboundedReceiver;

/// Cairo Bites cart CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the storage file (overrides CAIRO_BITES_STORAGE_PATH)
    #[arg(short, long)]
    storage: Option<PathBuf>,

    /// Subcommands
    #[command(subcommand)]
    command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the menu, optionally a single category
    Menu {
        /// Category key (appetizers, mainDishes, drinks, desserts)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Add one unit of a menu item
    Add {
        /// Item name as shown on the menu
        name: String,
    },
    /// Remove a cart line
    Remove {
        /// Line position as shown by `show`
        index: usize,
    },
    /// Add one unit to a cart line
    Increase { index: usize },
    /// Take one unit off a cart line
    Decrease { index: usize },
    /// Empty the cart
    Clear,
    /// Show the cart
    Show {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sign up for the newsletter
    Subscribe { email: String },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = CartConfig::from_env();
    if let Some(path) = cli.storage {
        config = config.with_storage_path(path);
    }

    let mut api = CustomerApi::open(&config);
    let mut events = api.subscribe();

    match cli.command {
        Commands::Menu { category } => print_menu(&api, category.as_deref())?,
        Commands::Add { name } => api.add_to_order(&name)?,
        Commands::Remove { index } => api.order_mut().remove_item(index),
        Commands::Increase { index } => api.order_mut().increase_quantity(index),
        Commands::Decrease { index } => api.order_mut().decrease_quantity(index),
        Commands::Clear => api.order_mut().clear(),
        Commands::Show { json } => {
            if json {
                let summary = serde_json::to_string_pretty(&api.cart_summary())
                    .context("Failed to encode cart summary")?;
                println!("{}", summary);
            } else {
                print_cart(&api);
            }
        }
        Commands::Subscribe { email } => {
            // a rejected address is reported as a toast
            let _ = api.subscribe_newsletter(&email);
        }
    }

    print_events(&mut events);
    Ok(())
}

fn print_menu(api: &CustomerApi, category: Option<&str>) -> Result<()> {
    let categories: Vec<_> = match category {
        Some(key) => vec![api
            .catalog()
            .category(key)
            .with_context(|| format!("Unknown category: {}", key))?],
        None => api.catalog().categories().iter().collect(),
    };

    for category in categories {
        println!("== {} ==", category.title());
        for item in category.items() {
            println!("  {}", item.display_info());
            if !item.description().is_empty() {
                println!("      {}", item.description());
            }
        }
    }

    Ok(())
}

fn print_cart(api: &CustomerApi) {
    let summary = api.cart_summary();

    if summary.lines.is_empty() {
        println!("Your cart is empty");
        return;
    }

    for line in &summary.lines {
        println!(
            "[{}] {} x{} = {}",
            line.index,
            line.display,
            line.quantity,
            format_price(line.total_price)
        );
    }
    println!(
        "{} items, total {}",
        summary.item_count,
        format_price(summary.total)
    );
}

fn print_events(events: &mut UnboundedReceiver<CartEvent>) {
    while let Ok(event) = events.try_recv() {
        match event {
            CartEvent::Notification(notification) => {
                println!("[{}] {}", notification.kind.as_str(), notification.message)
            }
            CartEvent::BadgeUpdated {
                item_count,
                visible: true,
            } => println!("Cart: {}", item_count),
            CartEvent::BadgeUpdated { .. } => println!("Cart is empty"),
        }
    }
}
