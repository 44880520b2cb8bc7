use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "seo-report")]
#[command(about = "Analyze and report on the Search Experience of a website")]
#[command(version)]
pub struct Args {
    /// Website domain to analyze (e.g. https://www.example.com)
    #[arg(short, long)]
    pub domain: String,

    /// Sitemap.xml to seed the crawl with (URL or path on the domain)
    #[arg(short, long)]
    pub sitemap: Option<String>,

    /// Single page to analyze instead of the whole site
    #[arg(short, long)]
    pub page: Option<String>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Per-request timeout in seconds (overrides the config file)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// User-Agent header (overrides the config file)
    #[arg(long)]
    pub user_agent: Option<String>,
}
