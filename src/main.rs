use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use stock_sentiment::{
    ConsoleObserver, InferenceClassifier, LexiconClassifier, Pipeline, ReportPath,
    SentimentClassifier, SentimentClient, SentimentError, Source,
};
use url::Url;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ClassifierKind {
    /// Hosted FinancialBERT text-classification endpoint.
    Inference,
    /// Offline financial word list.
    Lexicon,
}

#[derive(Parser)]
#[command(name = "stock-sentiment")]
#[command(about = "Score news sentiment per ticker from RSS headlines and the linked articles")]
struct Cli {
    /// Ticker symbols
    #[arg(value_name = "TICKER", required = true)]
    tickers: Vec<String>,

    /// Source of news articles
    #[arg(short, long, default_value = "yahoo")]
    source: Source,

    /// File to write the report to (.txt, .json)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Sentiment classifier to score paragraphs with
    #[arg(long, value_enum, default_value_t = ClassifierKind::Inference)]
    classifier: ClassifierKind,

    /// Override the inference endpoint
    #[arg(long, value_name = "URL")]
    endpoint: Option<Url>,

    /// Bearer token for the inference endpoint
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Overall per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), SentimentError> {
    // Validated before any request is made.
    let output = cli.file.map(ReportPath::parse).transpose()?;

    let mut builder = SentimentClient::builder();
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build()?;

    let classifier: Box<dyn SentimentClassifier> = match cli.classifier {
        ClassifierKind::Inference => {
            let mut b = InferenceClassifier::builder(&client);
            if let Some(url) = cli.endpoint {
                b = b.endpoint(url);
            }
            if let Some(token) = cli.token {
                b = b.token(token);
            }
            Box::new(b.build()?)
        }
        ClassifierKind::Lexicon => Box::new(LexiconClassifier::default()),
    };

    let pipeline = Pipeline::new(client, classifier, cli.source);
    let report = pipeline.run(&cli.tickers, &mut ConsoleObserver).await;

    if let Some(output) = output {
        report.write_json(&output)?;
        println!("Wrote data to {}", output.path().display());
    }
    println!("Done");
    Ok(())
}
