//! # API Server Module
//!
//! ## Purpose
//! REST API server binding the query engine to the case-search wire
//! contract, plus operational endpoints for health, stats, and a plain HTML
//! index listing the search categories.
//!
//! ## Input/Output Specification
//! - **Input**: HTTP requests with `state`, `commission`, `searchValue`
//!   query parameters
//! - **Output**: JSON responses in the contract shapes; JSON error bodies
//!   with the offending field named for validation failures
//! - **Endpoints**: States, commissions, seven case-search routes, health,
//!   stats, index
//!
//! ## Key Features
//! - One shared search handler parameterized by category
//! - Error taxonomy mapped to HTTP statuses (400 validation, 404 not found)
//! - CORS toggle for browser front ends
//! - Per-request id and elapsed-time logging

use crate::category::SearchCategory;
use crate::engine::{SearchRequest, SearchStats};
use crate::errors::SearchError;
use crate::reference::{Commission, State};
use crate::utils::{truncate, Timer};
use crate::AppState;
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// API server over shared application state
pub struct ApiServer {
    app_state: AppState,
}

/// Query parameters accepted by every case-search endpoint.
///
/// All parameters are optional at the HTTP layer so that a missing one
/// reaches the engine and comes back as a validation error naming the field,
/// rather than as a framework-generated message.
#[derive(Debug, Deserialize)]
pub struct CaseSearchQuery {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub commission: Option<String>,
    #[serde(default, rename = "searchValue")]
    pub search_value: Option<String>,
}

/// Response payload for the states listing
#[derive(Debug, Serialize)]
pub struct StatesResponse {
    pub states: Vec<State>,
}

/// Response payload for the commissions listing
#[derive(Debug, Serialize)]
pub struct CommissionsResponse {
    pub commissions: Vec<Commission>,
    pub state_id: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: HealthComponents,
}

/// Component health status
#[derive(Debug, Serialize)]
pub struct HealthComponents {
    pub engine: String,
    pub store: String,
    pub reference: String,
}

/// Statistics response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub search_engine: SearchStats,
    pub store_records: usize,
}

impl ApiServer {
    /// Create new API server
    pub fn new(app_state: AppState) -> Self {
        Self { app_state }
    }

    /// Run the API server until it is stopped
    pub async fn run(self) -> crate::Result<()> {
        let config = self.app_state.config.clone();
        let bind_addr = format!("{}:{}", config.server.host, config.server.port);
        let app_state = self.app_state;

        info!("Starting API server on {}", bind_addr);

        let server = HttpServer::new(move || {
            let cors = if app_state.config.server.enable_cors {
                Cors::permissive()
            } else {
                Cors::default()
            };

            App::new()
                .app_data(web::Data::new(app_state.clone()))
                .wrap(cors)
                .configure(configure_routes)
        })
        .workers(config.performance.worker_threads)
        .bind(&bind_addr)
        .map_err(|e| SearchError::Internal {
            message: format!("Failed to bind server to {}: {}", bind_addr, e),
        })?
        .run();

        server.await.map_err(|e| SearchError::Internal {
            message: format!("Server error: {}", e),
        })?;

        Ok(())
    }
}

/// Register every route; shared between `run` and the handler tests
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_handler))
        .route("/health", web::get().to(health_handler))
        .route("/stats", web::get().to(stats_handler))
        .route("/api/states", web::get().to(states_handler))
        .route(
            "/api/commissions/{state_id}",
            web::get().to(commissions_handler),
        )
        .route(
            "/api/cases/by-case-number",
            web::get().to(by_case_number_handler),
        )
        .route(
            "/api/cases/by-complainant",
            web::get().to(by_complainant_handler),
        )
        .route(
            "/api/cases/by-respondent",
            web::get().to(by_respondent_handler),
        )
        .route(
            "/api/cases/by-complainant-advocate",
            web::get().to(by_complainant_advocate_handler),
        )
        .route(
            "/api/cases/by-respondent-advocate",
            web::get().to(by_respondent_advocate_handler),
        )
        .route(
            "/api/cases/by-industry-type",
            web::get().to(by_industry_type_handler),
        )
        .route("/api/cases/by-judge", web::get().to(by_judge_handler));
}

/// Map an engine error to its HTTP response
fn error_response(err: &SearchError) -> HttpResponse {
    match err {
        SearchError::ValidationFailed { field, reason } => {
            HttpResponse::BadRequest().json(serde_json::json!({
                "error": "validation_failed",
                "field": field,
                "message": reason,
            }))
        }
        SearchError::NotFound { .. } => HttpResponse::NotFound().json(serde_json::json!({
            "error": "not_found",
            "message": err.to_string(),
        })),
        _ => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "internal",
            "message": err.to_string(),
        })),
    }
}

/// Shared implementation for the seven case-search endpoints
async fn run_case_search(
    app_state: web::Data<AppState>,
    params: web::Query<CaseSearchQuery>,
    category: SearchCategory,
) -> ActixResult<HttpResponse> {
    let request_id = Uuid::new_v4();
    let timer = Timer::new("case_search");
    let params = params.into_inner();

    let request = SearchRequest {
        state: params.state.unwrap_or_default(),
        commission: params.commission.unwrap_or_default(),
        query: params.search_value.unwrap_or_default(),
        category,
    };

    match app_state.engine.search(&request) {
        Ok(response) => {
            info!(
                %request_id,
                category = %category,
                query = %truncate(&request.query, 60),
                results = response.total_count,
                elapsed_ms = timer.elapsed_ms(),
                "search request served"
            );
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            info!(
                %request_id,
                category = %category,
                error_category = e.category(),
                elapsed_ms = timer.elapsed_ms(),
                "search request rejected"
            );
            Ok(error_response(&e))
        }
    }
}

async fn by_case_number_handler(
    app_state: web::Data<AppState>,
    params: web::Query<CaseSearchQuery>,
) -> ActixResult<HttpResponse> {
    run_case_search(app_state, params, SearchCategory::CaseNumber).await
}

async fn by_complainant_handler(
    app_state: web::Data<AppState>,
    params: web::Query<CaseSearchQuery>,
) -> ActixResult<HttpResponse> {
    run_case_search(app_state, params, SearchCategory::Complainant).await
}

async fn by_respondent_handler(
    app_state: web::Data<AppState>,
    params: web::Query<CaseSearchQuery>,
) -> ActixResult<HttpResponse> {
    run_case_search(app_state, params, SearchCategory::Respondent).await
}

async fn by_complainant_advocate_handler(
    app_state: web::Data<AppState>,
    params: web::Query<CaseSearchQuery>,
) -> ActixResult<HttpResponse> {
    run_case_search(app_state, params, SearchCategory::Advocate).await
}

async fn by_respondent_advocate_handler(
    app_state: web::Data<AppState>,
    params: web::Query<CaseSearchQuery>,
) -> ActixResult<HttpResponse> {
    run_case_search(app_state, params, SearchCategory::Advocate).await
}

async fn by_industry_type_handler(
    app_state: web::Data<AppState>,
    params: web::Query<CaseSearchQuery>,
) -> ActixResult<HttpResponse> {
    run_case_search(app_state, params, SearchCategory::Industry).await
}

async fn by_judge_handler(
    app_state: web::Data<AppState>,
    params: web::Query<CaseSearchQuery>,
) -> ActixResult<HttpResponse> {
    run_case_search(app_state, params, SearchCategory::Judge).await
}

/// States listing handler
async fn states_handler(app_state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let states = app_state.reference.states().to_vec();
    Ok(HttpResponse::Ok().json(StatesResponse { states }))
}

/// Commissions listing handler
async fn commissions_handler(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let state_id = path.into_inner();

    match app_state.reference.commissions_for_state(&state_id) {
        Ok(commissions) => Ok(HttpResponse::Ok().json(CommissionsResponse {
            commissions,
            state_id,
        })),
        Err(e) => Ok(error_response(&e)),
    }
}

/// Health check endpoint handler
async fn health_handler(app_state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let engine_status = match app_state.engine.health_check() {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };
    let reference_status = if app_state.reference.states().is_empty() {
        "unhealthy"
    } else {
        "healthy"
    };

    let response = HealthResponse {
        status: if engine_status == "healthy" && reference_status == "healthy" {
            "healthy".to_string()
        } else {
            "unhealthy".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: app_state.started_at.elapsed().as_secs(),
        components: HealthComponents {
            engine: engine_status.to_string(),
            store: "healthy".to_string(),
            reference: reference_status.to_string(),
        },
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Statistics endpoint handler
async fn stats_handler(app_state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let response = StatsResponse {
        search_engine: app_state.engine.get_stats(),
        store_records: app_state.store.len(),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Index page handler: the landing page's category grid, as plain HTML
async fn index_handler() -> ActixResult<HttpResponse> {
    let mut rows = String::new();
    for category in SearchCategory::ALL {
        let info = category.info();
        let paths = category.endpoint_paths().join("<br>");
        rows.push_str(&format!(
            "<div class=\"endpoint\"><h3>{}</h3><p>{}</p><code>{}</code></div>\n",
            info.title, info.description, paths
        ));
    }

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Lexi Case Search</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; }}
        .header {{ color: #2c3e50; }}
        .endpoint {{ margin: 20px 0; padding: 15px; background: #f8f9fa; border-radius: 5px; }}
        code {{ color: #27ae60; }}
    </style>
</head>
<body>
    <h1 class="header">Lexi Case Search API</h1>
    <p>Search District Consumer Court (DCDRC) case records by state, commission, and category.</p>
    <p>Reference data: <code>GET /api/states</code>, <code>GET /api/commissions/{{state_id}}</code>.
       Case endpoints take <code>state</code>, <code>commission</code>, and <code>searchValue</code> query parameters.</p>
    <h2>Search Categories</h2>
    {rows}
</body>
</html>
"#
    );

    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::engine::QueryEngine;
    use crate::reference::ReferenceData;
    use crate::store::{seed_records, CaseStore};
    use actix_web::test;
    use std::sync::Arc;
    use std::time::Instant;

    fn test_state() -> AppState {
        let config = Arc::new(Config::default());
        let store = Arc::new(CaseStore::new(seed_records()));
        let reference = Arc::new(ReferenceData::seed());
        let engine = Arc::new(QueryEngine::new(
            config.clone(),
            store.clone(),
            reference.clone(),
        ));

        AppState {
            config,
            engine,
            store,
            reference,
            started_at: Instant::now(),
        }
    }

    async fn get_json(path: &str) -> (u16, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_routes),
        )
        .await;

        let request = test::TestRequest::get().uri(path).to_request();
        let response = test::call_service(&app, request).await;
        let status = response.status().as_u16();
        let body = test::read_body(response).await;
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[actix_web::test]
    async fn test_states_endpoint() {
        let (status, json) = get_json("/api/states").await;
        assert_eq!(status, 200);
        assert_eq!(json["states"].as_array().unwrap().len(), 5);
        assert_eq!(json["states"][0]["id"], "KA");
    }

    #[actix_web::test]
    async fn test_commissions_endpoint_filters_by_state() {
        let (status, json) = get_json("/api/commissions/MH").await;
        assert_eq!(status, 200);
        assert_eq!(json["state_id"], "MH");
        let commissions = json["commissions"].as_array().unwrap();
        assert_eq!(commissions.len(), 3);
        assert!(commissions.iter().all(|c| c["state_id"] == "MH"));
    }

    #[actix_web::test]
    async fn test_unknown_state_is_404() {
        let (status, json) = get_json("/api/commissions/XX").await;
        assert_eq!(status, 404);
        assert_eq!(json["error"], "not_found");
    }

    #[actix_web::test]
    async fn test_case_number_search_round_trip() {
        let (status, json) =
            get_json("/api/cases/by-case-number?state=KA&commission=KA001&searchValue=123/2024")
                .await;

        assert_eq!(status, 200);
        assert_eq!(json["total_count"], 1);
        assert_eq!(json["cases"][0]["case_number"], "123/2024");
        assert_eq!(json["cases"][0]["filing_date"], "2024-03-15");
        assert_eq!(json["search_params"]["searchValue"], "123/2024");
    }

    #[actix_web::test]
    async fn test_missing_parameter_names_field() {
        let (status, json) =
            get_json("/api/cases/by-complainant?state=KA&commission=KA001").await;

        assert_eq!(status, 400);
        assert_eq!(json["error"], "validation_failed");
        assert_eq!(json["field"], "searchValue");
    }

    #[actix_web::test]
    async fn test_both_advocate_endpoints_share_policy() {
        let complainant_side =
            get_json("/api/cases/by-complainant-advocate?state=KA&commission=KA001&searchValue=singh")
                .await;
        let respondent_side =
            get_json("/api/cases/by-respondent-advocate?state=KA&commission=KA001&searchValue=singh")
                .await;

        assert_eq!(complainant_side.0, 200);
        assert_eq!(complainant_side.1["cases"], respondent_side.1["cases"]);
    }

    #[actix_web::test]
    async fn test_judge_endpoint_serves_placeholder() {
        let (status, json) =
            get_json("/api/cases/by-judge?state=DL&commission=DL001&searchValue=Justice%20Rao")
                .await;

        assert_eq!(status, 200);
        assert_eq!(json["total_count"], 3);
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let (status, json) = get_json("/health").await;
        assert_eq!(status, 200);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["components"]["engine"], "healthy");
    }
}
