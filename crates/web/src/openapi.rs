use utoipa::OpenApi;

use crate::features::workouts::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::create_workout,
        handlers::list_workouts,
        handlers::get_workout,
        handlers::update_workout,
        handlers::delete_workout,
    ),
    components(
        schemas(
            storage::dto::workout::CreateWorkout,
            storage::dto::workout::UpdateWorkout,
            storage::dto::workout::WorkoutResponse,
        )
    ),
    tags(
        (name = "workouts", description = "Workout record endpoints"),
    )
)]
pub struct ApiDoc;
