use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{CreateVehicleRequest, CreatedVehicleResponse, LabeledVehicleList};
use crate::models::vehicle::SearchField;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::split_range_segment;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(list_vehicles).post(create_vehicle))
        .route("/searchbymake/:term", get(search_by_make))
        .route("/searchbymake/:term/:range", get(search_by_make_paginated))
        .route("/searchbymodel/:term", get(search_by_model))
        .route("/searchbymodel/:term/:range", get(search_by_model_paginated))
        .route("/searchbyyear/:term", get(search_by_year))
        .route("/searchbyyear/:term/:range", get(search_by_year_paginated))
        .route("/searchbycolor/:term", get(search_by_color))
        .route("/searchbycolor/:term/:range", get(search_by_color_paginated))
}

async fn list_vehicles(State(state): State<AppState>) -> Result<Json<LabeledVehicleList>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.list_all().await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<CreateVehicleRequest>, JsonRejection>,
) -> Result<Json<CreatedVehicleResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::MissingField(e.body_text()))?;
    let controller = VehicleController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn search(state: AppState, field: SearchField, term: String) -> Result<Json<LabeledVehicleList>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.search(field, &term).await?;
    Ok(Json(response))
}

async fn search_paginated(
    state: AppState,
    field: SearchField,
    term: String,
    range: String,
) -> Result<Json<LabeledVehicleList>, AppError> {
    // Un segmento que no tiene la forma s=<start>e=<end> no es esta ruta
    let (start, end) = split_range_segment(&range)
        .ok_or_else(|| AppError::NotFound(format!("/searchby{}/{}/{}", field, term, range)))?;

    let controller = VehicleController::new(state.store.clone());
    let response = controller.search_paginated(field, &term, start, end).await?;
    Ok(Json(response))
}

async fn search_by_make(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<LabeledVehicleList>, AppError> {
    search(state, SearchField::Make, term).await
}

async fn search_by_make_paginated(
    State(state): State<AppState>,
    Path((term, range)): Path<(String, String)>,
) -> Result<Json<LabeledVehicleList>, AppError> {
    search_paginated(state, SearchField::Make, term, range).await
}

async fn search_by_model(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<LabeledVehicleList>, AppError> {
    search(state, SearchField::Model, term).await
}

async fn search_by_model_paginated(
    State(state): State<AppState>,
    Path((term, range)): Path<(String, String)>,
) -> Result<Json<LabeledVehicleList>, AppError> {
    search_paginated(state, SearchField::Model, term, range).await
}

async fn search_by_year(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<LabeledVehicleList>, AppError> {
    search(state, SearchField::Year, term).await
}

async fn search_by_year_paginated(
    State(state): State<AppState>,
    Path((term, range)): Path<(String, String)>,
) -> Result<Json<LabeledVehicleList>, AppError> {
    search_paginated(state, SearchField::Year, term, range).await
}

async fn search_by_color(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<LabeledVehicleList>, AppError> {
    search(state, SearchField::Color, term).await
}

async fn search_by_color_paginated(
    State(state): State<AppState>,
    Path((term, range)): Path<(String, String)>,
) -> Result<Json<LabeledVehicleList>, AppError> {
    search_paginated(state, SearchField::Color, term, range).await
}
