#![warn(clippy::all)]

use tracing_subscriber::fmt::format::FmtSpan;

mod checks;
mod config;
mod report;
mod store;
mod types;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let config = match config::Config::new() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("✘ {}", error);
            std::process::exit(1);
        }
    };

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        format!(
            "handle_errors={},qa_smoke={},sqlx=warn",
            config.log_level, config.log_level
        )
    });

    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!(run_id = %uuid::Uuid::new_v4(), "starting smoke run");

    println!("===== Q&A Store Smoke Tests =====");

    let mut report = report::Report::default();

    match store::Store::new(&config.database_url()).await {
        Ok(store) => match store.run_migrations().await {
            Ok(()) => {
                checks::question::post_question(&store, &mut report).await;
                checks::question::delete_question(&store, &mut report).await;
                checks::question::update_question(&store, &mut report).await;
                checks::answer::post_answer(&store, &mut report).await;
                checks::answer::answers_for_question(&store, &mut report).await;

                store.close().await;
            }
            Err(error) => println!("✘ {}", error),
        },
        Err(error) => println!("✘ {}", error),
    }

    println!("\n===== SUMMARY =====");
    println!(" Passed: {}", report.passed);
    println!(" Failed: {}", report.failed);
}
