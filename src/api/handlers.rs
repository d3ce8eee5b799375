use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;

use crate::document::parser::{parse_block, parse_lines};
use crate::engine::Retriever;
use crate::error::Error;

/// Shared, read-only. Per-request state lives inside `Retriever::run`.
pub struct AppState {
    pub retriever: Retriever,
}

impl AppState {
    pub fn new(retriever: Retriever) -> Self {
        Self { retriever }
    }
}

/// Either the raw text-area content or lines already split by the caller.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DocumentsInput {
    Block(String),
    Lines(Vec<String>),
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub documents: DocumentsInput,
    pub query: String,
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("TF-IDF retrieval API")
}

#[post("/rank")]
pub async fn rank(
    request: web::Json<RankRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let request = request.into_inner();
    let documents = match request.documents {
        DocumentsInput::Block(text) => parse_block(&text),
        DocumentsInput::Lines(lines) => parse_lines(lines),
    };
    if documents.is_empty() {
        tracing::warn!("Rejected ranking request without documents");
        return Err(Error::EmptyCorpus);
    }

    let report = data.retriever.run(&documents, &request.query)?;
    tracing::info!(
        documents = documents.len(),
        terms = report.weight_matrix.columns.len(),
        best = report.best_match.ordinal,
        score = report.best_match.score,
        "Ranked documents"
    );

    Ok(HttpResponse::Ok().json(report))
}

#[get("/normalizer")]
pub async fn normalizer_info(data: web::Data<AppState>) -> impl Responder {
    let normalizer = data.retriever.normalizer();
    HttpResponse::Ok().json(serde_json::json!({
        "stemmer": normalizer.stemmer_name(),
        "stop_words": normalizer.stop_words().len(),
        "min_token_len": normalizer.min_token_len(),
        "max_tokens": data.retriever.max_tokens(),
        "max_bytes": data.retriever.max_bytes(),
    }))
}
