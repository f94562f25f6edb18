use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::workout::{CreateWorkout, UpdateWorkout, WorkoutResponse},
};

use crate::error::WebResult;
use crate::extract::{AppJson, AppPath};

use super::services;

#[utoipa::path(
    post,
    path = "/workouts/",
    request_body = CreateWorkout,
    responses(
        (status = 201, description = "Workout created successfully", body = WorkoutResponse),
        (status = 422, description = "Missing or mistyped field")
    ),
    tag = "workouts"
)]
pub async fn create_workout(
    State(db): State<Database>,
    AppJson(req): AppJson<CreateWorkout>,
) -> WebResult<Response> {
    let workout = services::create_workout(&db, &req).await?;

    Ok((StatusCode::CREATED, Json(WorkoutResponse::from(workout))).into_response())
}

#[utoipa::path(
    get,
    path = "/workouts/",
    responses(
        (status = 200, description = "List all workouts successfully", body = Vec<WorkoutResponse>)
    ),
    tag = "workouts"
)]
pub async fn list_workouts(State(db): State<Database>) -> WebResult<Response> {
    let workouts = services::list_workouts(&db).await?;

    let response: Vec<WorkoutResponse> = workouts.into_iter().map(WorkoutResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/workouts/{id}",
    params(
        ("id" = i64, Path, description = "Workout ID")
    ),
    responses(
        (status = 200, description = "Workout found", body = WorkoutResponse),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn get_workout(
    State(db): State<Database>,
    AppPath(id): AppPath<i64>,
) -> WebResult<Response> {
    let workout = services::get_workout(&db, id).await?;

    Ok(Json(WorkoutResponse::from(workout)).into_response())
}

#[utoipa::path(
    put,
    path = "/workouts/{id}",
    params(
        ("id" = i64, Path, description = "Workout ID")
    ),
    request_body = UpdateWorkout,
    responses(
        (status = 200, description = "Workout updated successfully", body = WorkoutResponse),
        (status = 404, description = "Workout not found"),
        (status = 422, description = "Missing or mistyped field")
    ),
    tag = "workouts"
)]
pub async fn update_workout(
    State(db): State<Database>,
    AppPath(id): AppPath<i64>,
    AppJson(update_req): AppJson<UpdateWorkout>,
) -> WebResult<Response> {
    let updated = services::update_workout(&db, id, &update_req).await?;

    Ok(Json(WorkoutResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/workouts/{id}",
    params(
        ("id" = i64, Path, description = "Workout ID")
    ),
    responses(
        (status = 204, description = "Workout deleted successfully"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn delete_workout(
    State(db): State<Database>,
    AppPath(id): AppPath<i64>,
) -> WebResult<Response> {
    services::delete_workout(&db, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
