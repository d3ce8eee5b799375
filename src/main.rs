use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tfidf_search::api::{self, AppState};
use tfidf_search::config;
use tfidf_search::document::parser::{parse_block, read_bounded};
use tfidf_search::{Normalizer, RankingReport, Retriever, StemmerKind, StopWords};

#[derive(Parser)]
#[command(name = "tfidf-search", about = "Find the short text most relevant to a query")]
struct Args {
    /// Stop-word file, one word per line (defaults to the bundled English list)
    #[arg(long, global = true)]
    stop_words: Option<PathBuf>,

    /// Stemming algorithm: snowball or porter
    #[arg(long, default_value = "snowball", global = true)]
    stemmer: StemmerKind,

    /// Maximum normalized tokens per run, documents and query together
    #[arg(long, default_value_t = config::MAX_TOTAL_TOKENS, global = true)]
    max_tokens: usize,

    /// Maximum raw input bytes per run, documents and query together
    #[arg(long, default_value_t = config::MAX_INPUT_BYTES, global = true)]
    max_bytes: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = config::DEFAULT_HOST)]
        host: String,

        #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
        port: u16,
    },
    /// Rank documents (one per line) against a query and print the result
    Query {
        /// Documents file; reads stdin when omitted
        #[arg(short, long)]
        documents: Option<PathBuf>,

        query: String,
    },
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tfidf_search=info,actix_web=info")),
        )
        .init();

    let args = Args::parse();

    let stop_words = match &args.stop_words {
        Some(path) => StopWords::load(path)?,
        None => StopWords::english(),
    };
    let normalizer = Normalizer::new(stop_words, args.stemmer.build());
    tracing::info!(
        stemmer = normalizer.stemmer_name(),
        stop_words = normalizer.stop_words().len(),
        "Normalizer ready"
    );
    let retriever = Retriever::new(normalizer)
        .with_max_tokens(args.max_tokens)
        .with_max_bytes(args.max_bytes);

    match args.command {
        Command::Serve { host, port } => serve(retriever, &host, port).await?,
        Command::Query { documents, query } => {
            let reader: Box<dyn Read> = match documents {
                Some(path) => Box::new(File::open(path)?),
                None => Box::new(io::stdin()),
            };
            let content = read_bounded(reader, retriever.max_bytes())?;
            let documents = parse_block(&content);
            let report = retriever.run(&documents, &query)?;
            print_report(&query, &report);
        }
    }

    Ok(())
}

async fn serve(retriever: Retriever, host: &str, port: u16) -> io::Result<()> {
    let app_state = web::Data::new(AppState::new(retriever));

    tracing::info!("Starting HTTP server at http://{}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();
        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .configure(api::configure)
    })
    .bind((host, port))?
    .run()
    .await
}

fn print_report(query: &str, report: &RankingReport) {
    let precision = config::DISPLAY_PRECISION;
    let table = &report.weight_matrix;

    println!("TF-IDF matrix");
    print!("{:>8}", "");
    for term in &table.columns {
        print!(" {:>10}", term);
    }
    println!();
    for (ordinal, row) in table.rows.iter().zip(&table.values) {
        print!("{:>8}", format!("Doc {}", ordinal));
        for weight in row {
            print!(" {:>10.*}", precision, weight);
        }
        println!();
    }

    println!();
    println!("Query: {}", query);
    for doc in &report.ranked_results {
        println!("Doc {} | Score: {:.4} | {}", doc.ordinal, doc.score, doc.text);
    }

    println!();
    let best = &report.best_match;
    println!("Best match: Doc {} -> {} (score {:.3})", best.ordinal, best.text, best.score);
    println!("Matched query stems: {:?}", report.matched_query_terms);
}
