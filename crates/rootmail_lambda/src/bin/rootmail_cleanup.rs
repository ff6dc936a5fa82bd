//! Tears down leftovers of integration-test deployments.

use aws_config::{BehaviorVersion, Region};
use clap::{Parser, Subcommand};
use rootmail_lambda::aws::logs::CloudWatchLogsAdapter;
use rootmail_lambda::aws::s3::S3Adapter;
use rootmail_lambda::cleanup::{delete_log_groups, empty_and_delete_bucket};
use rootmail_lambda::logging::init_logging;

#[derive(Debug, Parser)]
#[command(name = "rootmail_cleanup", about = "Delete rootmail test leftovers")]
struct Cli {
    /// Region to clean up; falls back to the SDK's default provider chain.
    #[arg(long, global = true, env = "AWS_REGION")]
    region: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Delete every log group whose name contains PATTERN.
    DeleteLogGroups { pattern: String },
    /// Delete all object versions in BUCKET, then the bucket.
    PurgeBucket { bucket: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging();
    let cli = Cli::parse();
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = cli.region.clone() {
        loader = loader.region(Region::new(region));
    }
    let aws_config = loader.load().await;

    match cli.command {
        Command::DeleteLogGroups { pattern } => {
            let logs = CloudWatchLogsAdapter::new(aws_sdk_cloudwatchlogs::Client::new(&aws_config));
            let deleted = delete_log_groups(&pattern, &logs)?;
            tracing::info!(pattern = %pattern, deleted = deleted.len(), "log group cleanup finished");
        }
        Command::PurgeBucket { bucket } => {
            let buckets = S3Adapter::new(aws_sdk_s3::Client::new(&aws_config));
            empty_and_delete_bucket(&bucket, &buckets)?;
        }
    }

    Ok(())
}
