use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "product-page")]
#[command(about = "Extracts product data from a saved product page as JSON")]
#[command(version)]
pub struct Args {
    /// HTML file to read (`-` or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// JSON file with extractor configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL image sources are resolved against (overrides the config file)
    #[arg(short, long)]
    pub base_url: Option<url::Url>,

    /// Print single-line JSON instead of pretty output
    #[arg(long)]
    pub compact: bool,
}

impl Args {
    /// Input path, or `None` when reading stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
