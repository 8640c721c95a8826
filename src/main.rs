// cidrwatch - Network range tracker for service domains

use anyhow::Result;
use cidrwatch::Config;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let config = Config::default();
    let summary = cidrwatch::run(&config).await?;

    println!(
        "\n{} {} domains -> {} addresses -> {} subnets ({})",
        "✓".green(),
        summary.domains,
        summary.addresses,
        summary.subnets,
        config.subnet_file.display()
    );
    if summary.new_addresses > 0 {
        println!(
            "{} {} new addresses recorded in {}",
            "✓".green(),
            summary.new_addresses,
            config.new_ips_file.display()
        );
    }

    Ok(())
}
