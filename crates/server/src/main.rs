// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use clap::Parser;
use roster::RosterController;
use roster_api::{
    ApiError, InitializeResponse, ListEmployeesResponse, SetDepartmentFilterRequest,
    SetSearchTextRequest, SubmitEmployeeRequest, SubmitEmployeeResponse, all_records, initialize,
    set_department_filter, set_search_text, submit_new_record, visible_records,
};
use roster_persistence::SqliteRecordStore;
use roster_seed::{DEFAULT_SEED_URL, HttpSeedSource};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Roster Server - HTTP server for the employee roster
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// URL of the seed user directory, fetched once when the roster is empty
    #[arg(long, default_value = DEFAULT_SEED_URL)]
    seed_url: String,

    /// Timeout for the seed request, in seconds
    #[arg(long, default_value_t = 30)]
    seed_timeout_secs: u64,
}

type Controller = RosterController<SqliteRecordStore, HttpSeedSource>;

/// Application state shared across handlers.
///
/// The controller is the single writer of the roster. Each request holds
/// the lock for the whole operation.
#[derive(Clone)]
struct AppState {
    /// The roster controller for this process.
    controller: Arc<Mutex<Controller>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotReady { .. } => Self {
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: err.to_string(),
            },
            ApiError::PersistenceFailed { .. } => {
                error!(error = %err, "Persistence error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
        }
    }
}

async fn handle_list_visible(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListEmployeesResponse>, HttpError> {
    let controller = app_state.controller.lock().await;
    let response: ListEmployeesResponse = visible_records(&*controller)?;
    drop(controller);
    Ok(Json(response))
}

async fn handle_list_all(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListEmployeesResponse>, HttpError> {
    let controller = app_state.controller.lock().await;
    let response: ListEmployeesResponse = all_records(&*controller)?;
    drop(controller);
    Ok(Json(response))
}

async fn handle_submit_employee(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<SubmitEmployeeRequest>,
) -> Result<Json<SubmitEmployeeResponse>, HttpError> {
    info!(name = %request.name, "Handling submit_employee request");

    let mut controller = app_state.controller.lock().await;
    let response: SubmitEmployeeResponse = submit_new_record(&mut *controller, request)?;
    drop(controller);
    Ok(Json(response))
}

async fn handle_set_search_text(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<SetSearchTextRequest>,
) -> Result<Json<ListEmployeesResponse>, HttpError> {
    let mut controller = app_state.controller.lock().await;
    let response: ListEmployeesResponse = set_search_text(&mut *controller, request)?;
    drop(controller);
    Ok(Json(response))
}

async fn handle_set_department_filter(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<SetDepartmentFilterRequest>,
) -> Result<Json<ListEmployeesResponse>, HttpError> {
    let mut controller = app_state.controller.lock().await;
    let response: ListEmployeesResponse = set_department_filter(&mut *controller, request)?;
    drop(controller);
    Ok(Json(response))
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            get(handle_list_visible).post(handle_submit_employee),
        )
        .route("/employees/all", get(handle_list_all))
        .route("/filter/search", put(handle_set_search_text))
        .route("/filter/department", put(handle_set_department_filter))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Roster Server");

    let store: SqliteRecordStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqliteRecordStore::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqliteRecordStore::new_in_memory()?
    };

    let seed: HttpSeedSource = HttpSeedSource::new(
        args.seed_url.clone(),
        Duration::from_secs(args.seed_timeout_secs),
    )?;

    // Hydrate before the listener is bound
    let mut controller: Controller = RosterController::new(store, seed);
    let init: InitializeResponse = initialize(&mut controller).await;
    info!(
        source = %init.source,
        record_count = init.record_count,
        "Roster ready"
    );

    let app_state: AppState = AppState {
        controller: Arc::new(Mutex::new(controller)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
