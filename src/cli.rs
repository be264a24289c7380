use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "skippick", version, about = "TUI for choosing a skip size")]
pub struct Args {
    /// Postcode to fetch skip offerings for (e.g., "NR32")
    #[arg(short, long)]
    pub postcode: Option<String>,

    /// Area name the postcode belongs to (e.g., "Lowestoft")
    #[arg(short, long)]
    pub area: Option<String>,

    /// Base URL of the skip hire API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Theme name (e.g., "Catppuccin Mocha")
    #[arg(long)]
    pub theme: Option<String>,
}
