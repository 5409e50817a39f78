use clap::Parser;

use green_invest_rs::analysis::compare;
use green_invest_rs::cli::{Cli, Command};
use green_invest_rs::dataset::{
    build_dataset, marketplace_listings, partners, to_json, write_csv, ProductCatalog,
};
use green_invest_rs::error::{EsgError, Result};
use green_invest_rs::interface::{
    collect_contact_request, collect_investor_profile, display_comparison, display_dashboard,
    display_home, display_partners, display_profile_summary, prompt_page, prompt_product_pair,
    prompt_yes_no, Page,
};
use green_invest_rs::models::Product;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Menu => cmd_menu(),
        Command::Dashboard { json } => cmd_dashboard(json),
        Command::Compare {
            first,
            second,
            json,
        } => cmd_compare(&first, &second, json),
        Command::Export { output } => cmd_export(&output),
    }
}

/// Run the interactive page-navigation loop.
fn cmd_menu() -> Result<()> {
    display_home();

    loop {
        // The dataset is a per-interaction value, rebuilt on every pass.
        let catalog = ProductCatalog::new(build_dataset());

        match prompt_page()? {
            Page::Home => display_home(),
            Page::Profiling => page_profiling()?,
            Page::Dashboard => display_dashboard(&catalog),
            Page::Comparator => page_comparator(&catalog)?,
            Page::Partners => display_partners(&partners(), &marketplace_listings()),
            Page::Contacts => page_contacts()?,
            Page::Quit => break,
        }
    }

    Ok(())
}

/// Profiling page: collect the form, echo the summary and suggestion.
fn page_profiling() -> Result<()> {
    let profile = collect_investor_profile()?;
    display_profile_summary(&profile);
    Ok(())
}

/// Comparator page: re-prompts until two distinct products are selected.
fn page_comparator(catalog: &ProductCatalog) -> Result<()> {
    loop {
        let (first, second) = prompt_product_pair(catalog)?;

        match compare(first, second, catalog.max_co2_emissions()) {
            Ok(result) => {
                display_comparison(&result, first, second);
                break;
            }
            Err(EsgError::SameProductSelected(_)) => {
                println!("Please select two different products to compare.");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Contacts page: validate required fields, nothing is stored.
fn page_contacts() -> Result<()> {
    loop {
        let request = collect_contact_request()?;

        match request.validate() {
            Ok(()) => {
                println!();
                println!(
                    "Thanks for your interest, {}! We will get back to you soon.",
                    request.name.trim()
                );
                if !request.topics.is_empty() {
                    println!("Topics: {}", request.topics.join(", "));
                }
                println!();
                break;
            }
            Err(e) => {
                println!("Incomplete request: {}", e);
                if !prompt_yes_no("Try again?", true)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Print the portfolio overview, rendered or as JSON.
fn cmd_dashboard(json: bool) -> Result<()> {
    let catalog = ProductCatalog::new(build_dataset());

    if json {
        println!("{}", to_json(&catalog)?);
    } else {
        display_dashboard(&catalog);
    }

    Ok(())
}

/// Compare two products given by name on the command line.
fn cmd_compare(first: &str, second: &str, json: bool) -> Result<()> {
    let catalog = ProductCatalog::new(build_dataset());

    let a = resolve_product(&catalog, first)?;
    let b = resolve_product(&catalog, second)?;

    let result = compare(a, b, catalog.max_co2_emissions())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_comparison(&result, a, b);
    }

    Ok(())
}

/// Export the product table to CSV.
fn cmd_export(output: &str) -> Result<()> {
    let catalog = ProductCatalog::new(build_dataset());
    write_csv(output, &catalog)?;
    println!("Exported {} products to {}", catalog.len(), output);
    Ok(())
}

/// Look up a product by name, offering a fuzzy suggestion on a near miss.
fn resolve_product<'a>(catalog: &'a ProductCatalog, name: &str) -> Result<&'a Product> {
    if let Some(product) = catalog.get(name) {
        return Ok(product);
    }

    match catalog.suggest(name) {
        Some(suggestion) => Err(EsgError::InvalidInput(format!(
            "unknown product '{}', did you mean '{}'?",
            name, suggestion.name
        ))),
        None => Err(EsgError::ProductNotFound(name.to_string())),
    }
}
