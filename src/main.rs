use std::{
    io::{self, BufWriter, Write},
    process::ExitCode,
    sync::Arc,
};

use tracing::{error, info};
use transport_catalogue::{
    ingestion::requests::RequestDocument,
    services::{
        build::build_catalogue,
        handler::RequestHandler,
        persistence::{load_base, save_base},
        stats::{answer_stat_requests, write_responses},
    },
    structures::Config,
    web::app::server,
};

fn print_usage() {
    eprintln!("Usage: transport-catalogue [make_base|process_requests|serve <config.yml>]");
}

fn make_base() -> Result<(), String> {
    let doc = RequestDocument::from_reader(io::stdin().lock())
        .map_err(|e| format!("Failed to parse requests: {e}"))?;
    let settings = doc
        .routing_settings
        .ok_or_else(|| "Missing routing_settings".to_string())?;
    settings
        .validate()
        .map_err(|e| format!("Invalid routing settings: {e}"))?;

    let cat = build_catalogue(&doc.base_requests)
        .map_err(|e| format!("Failed to build catalogue: {e}"))?;
    save_base(&doc.serialization_settings.file, &cat, &settings).map_err(|e| e.to_string())
}

fn process_requests() -> Result<(), String> {
    let doc = RequestDocument::from_reader(io::stdin().lock())
        .map_err(|e| format!("Failed to parse requests: {e}"))?;
    let (cat, settings) = load_base(&doc.serialization_settings.file).map_err(|e| e.to_string())?;
    let handler = RequestHandler::new(cat, settings).map_err(|e| e.to_string())?;

    let responses = answer_stat_requests(&handler, &doc.stat_requests);
    info!("Answered {} requests", responses.len());

    let mut out = BufWriter::new(io::stdout().lock());
    write_responses(&mut out, &responses).map_err(|e| format!("Failed to write answers: {e}"))?;
    writeln!(out).and_then(|_| out.flush()).map_err(|e| e.to_string())
}

fn serve(config_path: &str) -> Result<(), String> {
    let config = Config::load(config_path).map_err(|e| e.to_string())?;
    let (cat, settings) = load_base(&config.database).map_err(|e| e.to_string())?;
    let handler = Arc::new(RequestHandler::new(cat, settings).map_err(|e| e.to_string())?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {e}"))?;
    runtime
        .block_on(server(handler, &config.listen))
        .map_err(|e| format!("Server failed: {e}"))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let result = match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["make_base"] => make_base(),
        ["process_requests"] => process_requests(),
        ["serve", config] => serve(config),
        _ => {
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
