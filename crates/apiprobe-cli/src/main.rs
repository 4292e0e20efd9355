//! apiprobe CLI - ad-hoc inspection of web API responses

use apiprobe::{fetch, Response, TemplateRequest};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};

/// What to print for the fetched response
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Raw response body
    #[default]
    Body,
    /// Detected document type
    Type,
    /// Walked node names, one per line
    Nodes,
    /// JSON summary
    Json,
}

/// apiprobe - fetch a templated URL and inspect what came back
#[derive(Parser, Debug)]
#[command(name = "apiprobe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL template; `[name]` placeholders are filled from --param
    url: String,

    /// Placeholder substitution, e.g. -p zip=90210 (repeatable)
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE")]
    params: Vec<String>,

    /// Extra request header, e.g. -H X-Api-Key=secret (repeatable)
    #[arg(short = 'H', long = "header", value_name = "NAME=VALUE")]
    headers: Vec<String>,

    /// Output format
    #[arg(long, short, default_value = "body")]
    output: OutputFormat,
}

fn main() {
    let cli = Cli::parse();

    let mut request = TemplateRequest::new(&cli.url);
    for pair in &cli.params {
        let (name, value) = parse_key_value(pair).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
        request = request.param(name, value);
    }
    for pair in &cli.headers {
        let (name, value) = parse_key_value(pair).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
        request = request.header(name, value);
    }

    match fetch(request) {
        Ok(response) => match cli.output {
            OutputFormat::Body => writeln_safe(response.body()),
            OutputFormat::Type => writeln_safe(&response.document_type().to_string()),
            OutputFormat::Nodes => writeln_safe(&format_nodes(&response)),
            OutputFormat::Json => writeln_safe(&format_json_summary(&response)),
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Split a NAME=VALUE argument on its first `=`
fn parse_key_value(pair: &str) -> Result<(String, String), String> {
    match pair.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", pair)),
    }
}

/// Walked node names one per line, or a notice for untraversable types
fn format_nodes(response: &Response) -> String {
    let traversal = response.walk();
    if !traversal.is_supported() {
        return format!(
            "unable to traverse a {} response",
            response.document_type()
        );
    }
    traversal.collect::<Vec<_>>().join("\n")
}

/// Machine-readable summary of the fetch outcome
fn format_json_summary(response: &Response) -> String {
    let summary = serde_json::json!({
        "url": response.url(),
        "document_type": response.document_type().to_string(),
        "parsed": response.is_parsed(),
        "body": response.body(),
    });
    serde_json::to_string_pretty(&summary).unwrap_or_else(|e| {
        eprintln!("Error serializing summary: {}", e);
        std::process::exit(1);
    })
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
