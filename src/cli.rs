use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cellarscout")]
#[command(author, version, about = "Scan retail pages for bottles listed cheaper on a reference catalog", long_about = None)]
#[command(after_help = r#"Examples:
  cellarscout check https://retailer.example/whisky     Compare a live page
  cellarscout check saved-page.html                     Compare a saved page
  cellarscout scan saved-page.html                      Show what the scanner harvests
  cellarscout catalog --size 20                         Show the first catalog page
  cellarscout check page.html --json | jq '.[].cheaper' Script the results
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a page and compare candidates against the catalog
    Check {
        /// Page URL or local HTML file path
        #[arg(value_name = "TARGET")]
        target: String,

        /// Catalog pagination offset
        #[arg(long, default_value_t = 0)]
        from: usize,

        /// Catalog page size (defaults to the configured size)
        #[arg(long)]
        size: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Harvest candidate listings from a page without matching
    Scan {
        /// Page URL or local HTML file path
        #[arg(value_name = "TARGET")]
        target: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch and print a page of catalog listings
    Catalog {
        /// Catalog pagination offset
        #[arg(long, default_value_t = 0)]
        from: usize,

        /// Catalog page size (defaults to the configured size)
        #[arg(long)]
        size: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    Init,
}
