use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vibescope_core::{LogNotifier, Sentiment};
use vibescope_dashboard::build_gateway;
use vibescope_dashboard::cli::{Cli, Commands};
use vibescope_dashboard::server::run_server;
use vibescope_dashboard::state::AppState;
use vibescope_engine::{sentiment_breakdown, Analyzer, AnalyzerConfig};
use vibescope_export::write_export;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            address,
            classifier_config,
            max_concurrency,
            verbose,
        } => {
            init_logging(verbose);

            let gateway = Arc::new(build_gateway(classifier_config));
            let state = AppState::new(gateway, AnalyzerConfig { max_concurrency });

            let addr: SocketAddr = format!("{}:{}", address, port).parse()?;

            println!();
            println!("  vibescope — sentiment analysis dashboard");
            println!("  API at http://{addr}/api, live feed at ws://{addr}/ws");
            println!();

            run_server(state, addr).await?;
        }

        Commands::Analyze {
            input,
            format,
            output,
            classifier_config,
            max_concurrency,
            verbose,
        } => {
            init_logging(verbose);

            let content = if input.as_os_str() == "-" {
                use std::io::Read;
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            } else {
                std::fs::read_to_string(&input)?
            };
            let texts: Vec<String> = content
                .split('\n')
                .filter(|line| !line.trim().is_empty())
                .map(String::from)
                .collect();

            let gateway = Arc::new(build_gateway(classifier_config));
            let analyzer = Analyzer::with_config(
                gateway,
                Arc::new(LogNotifier),
                AnalyzerConfig { max_concurrency },
            );

            let results = analyzer.analyze(&texts).await?;

            match format {
                Some(format) => {
                    let path = write_export(&output, format, &results)?;
                    println!("Wrote {}", path.display());
                }
                None => {
                    for result in &results {
                        println!(
                            "{:>8}  {:>7}  {}",
                            result.label,
                            vibescope_export::format_percentage(result.score),
                            result.text
                        );
                    }
                    let breakdown = sentiment_breakdown(&results);
                    println!();
                    println!(
                        "{} analyzed: {:.0}% positive, {:.0}% negative, {:.0}% neutral",
                        breakdown.total,
                        breakdown.percentage(Sentiment::Positive),
                        breakdown.percentage(Sentiment::Negative),
                        breakdown.percentage(Sentiment::Neutral),
                    );
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
