use clap::Parser;
use seo_report::Audit;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting SEO audit for domain: {}", args.domain);

    let mut audit = Audit::new(&args.domain);
    if let Some(path) = &args.config {
        audit = match audit.with_config_file(path) {
            Ok(audit) => audit,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        };
    }
    if let Some(sitemap) = args.sitemap {
        audit = audit.with_sitemap(sitemap);
    }
    if let Some(page) = args.page {
        audit = audit.with_page(page);
    }
    if let Some(timeout) = args.timeout {
        audit = audit.with_timeout(timeout);
    }
    if let Some(user_agent) = args.user_agent {
        audit = audit.with_user_agent(user_agent);
    }

    let start_time = std::time::Instant::now();
    let report = match audit.run().await {
        Ok(report) => report,
        Err(e) => {
            ::log::error!("Failed to run audit: {}", e);
            std::process::exit(1);
        }
    };

    ::log::info!(
        "Audit complete - {} pages in {:.2} seconds",
        report.pages.len(),
        start_time.elapsed().as_secs_f64()
    );

    match report.to_json_pretty() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            ::log::error!("Failed to serialize report: {}", e);
            std::process::exit(1);
        }
    }
}
