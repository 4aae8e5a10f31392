//! HTTP surface: home page, word lookup and verse search

use crate::error::QuranError;
use crate::state::AppState;
use crate::translate::{lookup_word, WordLookup};
use crate::translit::romanized_to_arabic;
use crate::verses::VerseResult;
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Form posts carry a single short field
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Longest word or search term accepted, in characters. The longest verse is
/// well under this, so longer input can only fail to match.
pub const MAX_INPUT_CHARS: usize = 2_000;

const HOME_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Quran Lookup</title></head>
<body>
  <h1>Quran Lookup</h1>
  <p>Type Arabic, English or Romanized Arabic (3 = ع, 7 = ح, 2 = ء, gh = غ, dh = ذ).</p>
  <form action="/lookup" method="post">
    <label>Word <input name="word"></label>
    <button type="submit">Translate</button>
  </form>
  <form action="/search" method="post">
    <label>Search verses <input name="search_term"></label>
    <button type="submit">Search</button>
  </form>
</body>
</html>
"#;

// === Request/Response types ===

#[derive(Debug, Default, Deserialize)]
pub struct LookupQuery {
    pub word: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub verses: usize,
}

/// Reject absent, blank or oversized input before it reaches the core.
///
/// Surrounding spaces are kept: "the " is a different substring from "the".
fn require_input(value: Option<String>, field: &str) -> Result<String, QuranError> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return Err(QuranError::InvalidInput(format!("{} is required", field))),
    };
    if value.chars().count() > MAX_INPUT_CHARS {
        return Err(QuranError::InvalidInput(format!(
            "{} is longer than {} characters",
            field, MAX_INPUT_CHARS
        )));
    }
    Ok(value)
}

// === Handlers ===

pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, QuranError> {
    let verses = state.with_repository(|repo| repo.count_verses()).await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        verses,
    }))
}

async fn lookup(state: &AppState, word: Option<String>) -> Result<Json<WordLookup>, QuranError> {
    let word = require_input(word, "word")?;
    lookup_word(state.translator.as_ref(), &word).await.map(Json)
}

pub async fn lookup_get(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LookupQuery>,
) -> Result<Json<WordLookup>, QuranError> {
    lookup(&state, params.word).await
}

pub async fn lookup_post(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LookupQuery>,
) -> Result<Json<WordLookup>, QuranError> {
    lookup(&state, form.word).await
}

async fn search(state: &Arc<AppState>, term: Option<String>) -> Result<Json<Vec<VerseResult>>, QuranError> {
    let term = romanized_to_arabic(&require_input(term, "search term")?);
    state
        .with_repository(move |repo| repo.search_verses(&term))
        .await
        .map(Json)
}

pub async fn search_get(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<VerseResult>>, QuranError> {
    search(&state, params.q).await
}

pub async fn search_post(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Result<Json<Vec<VerseResult>>, QuranError> {
    search(&state, form.search_term).await
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/lookup", get(lookup_get).post(lookup_post))
        .route("/search", get(search_get).post(search_post))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{import_surahs, parse_surahs};
    use crate::translate::tests::StubTranslator;
    use crate::translate::Translator;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use rusqlite::Connection;
    use tempfile::TempDir;

    const FIXTURE: &str = r#"[
        {
            "id": 1, "name": "Al-Fatiha", "transliteration": "Al-Fatihah",
            "translation": "The Opener", "type": "meccan", "total_verses": 2,
            "verses": [
                {"id": 1, "text": "الحمد لله", "translation": "Praise be to Allah"},
                {"id": 2, "text": "رب العالمين", "translation": "Lord of the worlds"}
            ]
        }
    ]"#;

    fn state_with(translator: Arc<dyn Translator>) -> (TempDir, Arc<AppState>) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quran.db");
        let mut conn = Connection::open(&path).unwrap();
        import_surahs(&mut conn, &parse_surahs(FIXTURE).unwrap()).unwrap();
        (dir, Arc::new(AppState::new(path, translator)))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_require_input() {
        assert_eq!(require_input(Some(" kitab ".into()), "word").unwrap(), " kitab ");
        assert!(matches!(require_input(None, "word"), Err(QuranError::InvalidInput(_))));
        assert!(matches!(require_input(Some("   ".into()), "word"), Err(QuranError::InvalidInput(_))));
        assert!(require_input(Some("ع".repeat(MAX_INPUT_CHARS)), "word").is_ok());
        assert!(matches!(
            require_input(Some("a".repeat(MAX_INPUT_CHARS + 1)), "word"),
            Err(QuranError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_search_keeps_surrounding_spaces() {
        let (_dir, state) = state_with(Arc::new(StubTranslator::ok("x", None)));

        let Json(hits) = search_get(State(state.clone()), Query(SearchQuery { q: Some("of the ".into()) }))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].translation, "Lord of the worlds");

        // "worlds" ends its verse, so a trailing space must not match it
        let Json(hits) = search_get(State(state), Query(SearchQuery { q: Some("worlds ".into()) }))
            .await
            .unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_oversized_search_is_rejected() {
        let (_dir, state) = state_with(Arc::new(StubTranslator::ok("x", None)));
        let err = search_get(State(state), Query(SearchQuery { q: Some("z".repeat(60_000)) }))
            .await
            .unwrap_err();
        assert!(matches!(err, QuranError::InvalidInput(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_get() {
        let (_dir, state) = state_with(Arc::new(StubTranslator::ok("x", None)));
        let Json(results) = search_get(State(state), Query(SearchQuery { q: Some("Praise".into()) }))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].verse_number, 1);
    }

    #[tokio::test]
    async fn test_search_post_normalizes_romanized_input() {
        let (_dir, state) = state_with(Arc::new(StubTranslator::ok("x", None)));
        // "7" becomes ح, which only the first verse contains
        let Json(results) = search_post(
            State(state),
            Form(SearchForm { search_term: Some("7".into()) }),
        )
        .await
        .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].arabic, "الحمد لله");
    }

    #[tokio::test]
    async fn test_romanized_clusters_apply_to_english_terms() {
        let (_dir, state) = state_with(Arc::new(StubTranslator::ok("x", None)));
        // "ah" is the ta-marbuta cluster, so "Allah" is searched as "Allة"
        let Json(results) = search_get(State(state), Query(SearchQuery { q: Some("Allah".into()) }))
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_blank_search_is_rejected() {
        let (_dir, state) = state_with(Arc::new(StubTranslator::ok("x", None)));
        let err = search_get(State(state), Query(SearchQuery { q: Some("  ".into()) }))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_store_is_503() {
        let dir = tempfile::tempdir().unwrap();
        let state = Arc::new(AppState::new(
            dir.path().join("missing.db"),
            Arc::new(StubTranslator::ok("x", None)),
        ));
        let err = search_get(State(state.clone()), Query(SearchQuery { q: Some("Praise".into()) }))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(health(State(state)).await.is_err());
    }

    #[tokio::test]
    async fn test_lookup_success() {
        let (_dir, state) = state_with(Arc::new(StubTranslator::ok("كتاب", None)));
        let Json(lookup) = lookup_get(State(state), Query(LookupQuery { word: Some("book".into()) }))
            .await
            .unwrap();
        assert_eq!(lookup.translated_word, "كتاب");
        assert_eq!(lookup.pronunciation, "ktab");
    }

    #[tokio::test]
    async fn test_lookup_failure_becomes_display_payload() {
        let (_dir, state) = state_with(Arc::new(StubTranslator::failing("connection reset")));
        let err = lookup_post(State(state), Form(LookupQuery { word: Some("book".into()) }))
            .await
            .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        let message = body["error"].as_str().unwrap();
        assert!(!message.is_empty());
        assert!(message.starts_with("Translation failed"));
    }

    #[tokio::test]
    async fn test_health_counts_verses() {
        let (_dir, state) = state_with(Arc::new(StubTranslator::ok("x", None)));
        let Json(report) = health(State(state)).await.unwrap();
        assert_eq!(report.status, "ok");
        assert_eq!(report.verses, 2);
    }

    #[tokio::test]
    async fn test_home_is_static() {
        let Html(page) = home().await;
        assert!(page.contains("action=\"/search\""));
        assert!(page.contains("action=\"/lookup\""));
    }
}
