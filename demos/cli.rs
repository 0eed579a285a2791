//! Minimal stdin/stdout driver. Input format:
//!
//! ```text
//! <space-joined stop-words, possibly empty>
//! <document count N>
//! <status> <ratings space-joined, possibly empty>
//! <document body>
//! ... (repeated N times)
//! <query>
//! ```

use std::io::{self, BufRead};

use search_core::core::types::DocumentStatus;
use search_core::{ExecutionMode, SearchEngine};

fn parse_status(word: &str) -> Option<DocumentStatus> {
    match word {
        "ACTUAL" => Some(DocumentStatus::Actual),
        "IRRELEVANT" => Some(DocumentStatus::Irrelevant),
        "BANNED" => Some(DocumentStatus::Banned),
        "REMOVED" => Some(DocumentStatus::Removed),
        _ => None,
    }
}

fn run() -> Result<(), String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let stop_word_line = lines
        .next()
        .ok_or("missing stop-words line")?
        .map_err(|e| e.to_string())?;
    let mut engine =
        SearchEngine::from_stop_word_text(&stop_word_line).map_err(|e| e.to_string())?;

    let count_line = lines
        .next()
        .ok_or("missing document count line")?
        .map_err(|e| e.to_string())?;
    let count: usize = count_line.trim().parse().map_err(|_| "invalid document count")?;

    for id in 0..count {
        let header = lines
            .next()
            .ok_or("missing document header line")?
            .map_err(|e| e.to_string())?;
        let mut parts = header.split_whitespace();
        let status = parts
            .next()
            .and_then(parse_status)
            .ok_or("missing or invalid document status")?;
        let ratings: Vec<i64> = parts
            .map(|r| r.parse::<i64>().map_err(|_| "invalid rating"))
            .collect::<Result<_, _>>()?;

        let body = lines
            .next()
            .ok_or("missing document body line")?
            .map_err(|e| e.to_string())?;

        engine
            .add_document(id as i64, &body, status, &ratings)
            .map_err(|e| e.to_string())?;
    }

    let query = lines
        .next()
        .ok_or("missing query line")?
        .map_err(|e| e.to_string())?;

    let results = engine
        .find_top_documents(&query, ExecutionMode::Sequential)
        .map_err(|e| e.to_string())?;

    for doc in results {
        println!(
            "{{ document_id = {}, relevance = {:.6}, rating = {} }}",
            doc.id.0, doc.relevance, doc.rating
        );
    }

    Ok(())
}

fn main() {
    if run().is_err() {
        eprintln!("search failed");
        std::process::exit(1);
    }
}
