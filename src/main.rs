use axum::{
    routing::{get, post},
    Router,
};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower_http::services::ServeDir;

use review_sentiment_api::api;
use review_sentiment_api::artifacts::ModelSet;
use review_sentiment_api::translate::Translator;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::analyze_review,
        api::list_models,
        api::health
    ),
    components(
        schemas(
            api::AnalyzeRequest,
            api::AnalyzeResponse,
            api::ModelPrediction,
            api::ModelsResponse,
            api::ErrorResponse
        )
    ),
    tags(
        (name = "sentiment", description = "Movie Review Sentiment API")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    // Explicit startup load: everything the pipeline needs is immutable
    // after this point and shared through the axum state.
    let model_dir = ModelSet::dir_from_env();
    let models = ModelSet::load(&model_dir)?;
    let translator = Translator::from_env();

    let state = Arc::new(api::AppState { models, translator });

    let app = Router::new()
        .merge(SwaggerUi::new("/sentiment-swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/analyze", post(api::analyze_review))
        .route("/models", get(api::list_models))
        .route("/health", get(api::health))
        .nest_service("/", ServeDir::new("static")) // Serve the review form
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    println!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
