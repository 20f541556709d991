//! Command-line front end: extract one HTML file and print its metadata and
//! tokens.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use docfeatures::{ExtractedDocument, Extractor};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// HTML file to extract.
    #[arg(long, env = "DOCFEATURES_INPUT", default_value = "./input/geeksforgeeks.html")]
    input: PathBuf,

    /// URL the document is known by; echoed into the metadata record.
    #[arg(long, env = "DOCFEATURES_URL", default_value = "https://www.geeksforgeeks.org")]
    url: String,

    /// Print the result as pretty JSON instead of the line layout.
    #[arg(long)]
    json: bool,
}

fn init_logging() -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Logs go to stderr so stdout only carries the extraction result.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
}

fn render_text(doc: &ExtractedDocument) -> String {
    format!(
        "Webpage URL: {}\nTitle: {}\nDescription: {}\nKeywords: {}\nTokens: {}",
        doc.metadata.url,
        doc.metadata.title,
        doc.metadata.description,
        doc.metadata.keywords,
        doc.joined_tokens()
    )
}

/// Extracts the file named by `args` and renders the report printed on stdout.
fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let doc = Extractor::default().extract_file(&args.input, &args.url)?;

    if args.json {
        Ok(serde_json::to_string_pretty(&doc)?)
    } else {
        Ok(render_text(&doc))
    }
}

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("warning: logging disabled: {e}");
    }
    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
