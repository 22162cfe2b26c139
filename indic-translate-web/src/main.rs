use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use indic_translate::{
    AppConfig, FailureKind, MtError, SourceLanguage, TranslationDetails, TranslationResult,
    TranslationService, init_tracing,
};

#[derive(Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    /// Language label as shown in the selector, or a name/code
    pub language: String,
}

#[derive(Serialize, Deserialize)]
pub struct LanguageOption {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub label: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: FailureKind,
}

#[derive(Clone)]
pub struct AppState {
    pub service: TranslationService,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load(None)?;

    init_tracing(&config.logging.level);

    let service = config
        .build_service()
        .map_err(|e| format!("Failed to initialize translator: {}", e))?;

    info!("🈯 Starting Indian Language Translator");

    let app = router(AppState { service });

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("🚀 Server running at http://{}", address);

    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/health", get(health))
        .route("/api/languages", get(list_languages))
        .route("/api/translate", post(translate_text))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

async fn health() -> &'static str {
    "ok"
}

async fn list_languages() -> Json<Vec<LanguageOption>> {
    Json(
        SourceLanguage::ALL
            .into_iter()
            .map(|lang| LanguageOption {
                code: lang.code().to_string(),
                name: lang.name().to_string(),
                native_name: lang.native_name().to_string(),
                label: lang.label(),
            })
            .collect(),
    )
}

async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslationDetails>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        "Translating {} characters from {}",
        request.text.chars().count(),
        &request.language
    );

    state
        .service
        .translate_detailed(&request.text, &request.language)
        .await
        .map(Json)
        .map_err(error_response)
}

fn error_response(err: MtError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, kind) = if err.is_validation() {
        (StatusCode::UNPROCESSABLE_ENTITY, FailureKind::Validation)
    } else {
        (StatusCode::BAD_GATEWAY, FailureKind::Provider)
    };

    let error = TranslationResult::from_error(&err).display_text().to_string();
    (status, Json(ErrorResponse { error, kind }))
}
