use clap::Parser;
use product_page::{PageExtractor, PageRecord};
use std::io::Read;

mod args;
use args::Args;

fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let html = match read_input(&args) {
        Ok(html) => html,
        Err(e) => {
            ::log::error!("Failed to read input: {}", e);
            std::process::exit(1);
        }
    };

    let extractor = match build_extractor(&args) {
        Ok(extractor) => extractor,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let page = match extractor.extract_str(&html) {
        Ok(page) => page,
        Err(e) => {
            ::log::error!("Extraction failed: {}", e);
            std::process::exit(3);
        }
    };

    ::log::info!(
        "Extracted product {} ({} suggested, {} reviews)",
        page.product.id,
        page.suggested.len(),
        page.reviews.len()
    );

    if let Err(e) = print_page(&page, args.compact) {
        ::log::error!("Failed to serialize result: {}", e);
        std::process::exit(1);
    }
}

fn read_input(args: &Args) -> std::io::Result<String> {
    match args.input_path() {
        Some(path) => {
            ::log::debug!("Reading {}", path.display());
            std::fs::read_to_string(path)
        }
        None => {
            ::log::debug!("Reading stdin");
            let mut html = String::new();
            std::io::stdin().read_to_string(&mut html)?;
            Ok(html)
        }
    }
}

fn build_extractor(args: &Args) -> Result<PageExtractor, product_page::ConfigError> {
    let mut extractor = PageExtractor::new();
    if let Some(path) = &args.config {
        extractor = extractor.with_config_file(path)?;
    }
    if let Some(base_url) = &args.base_url {
        extractor = extractor.with_base_url(base_url.clone());
    }
    Ok(extractor)
}

fn print_page(page: &PageRecord, compact: bool) -> serde_json::Result<()> {
    let json = if compact {
        serde_json::to_string(page)?
    } else {
        serde_json::to_string_pretty(page)?
    };
    println!("{}", json);
    Ok(())
}
