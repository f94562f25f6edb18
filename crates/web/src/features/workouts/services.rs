use storage::{
    Database,
    dto::workout::{CreateWorkout, UpdateWorkout},
    error::Result,
    models::Workout,
    repository::workout::WorkoutRepository,
};

/// List all workouts
pub async fn list_workouts(db: &Database) -> Result<Vec<Workout>> {
    let mut session = db.session().await?;
    let mut repo = WorkoutRepository::new(&mut session);
    let workouts = repo.list().await?;
    Ok(workouts)
}

/// Get workout by ID
pub async fn get_workout(db: &Database, id: i64) -> Result<Workout> {
    let mut session = db.session().await?;
    let mut repo = WorkoutRepository::new(&mut session);
    let workout = repo.find_by_id(id).await?;
    Ok(workout)
}

/// Create a new workout
pub async fn create_workout(db: &Database, request: &CreateWorkout) -> Result<Workout> {
    let mut session = db.session().await?;
    let mut repo = WorkoutRepository::new(&mut session);
    let workout = repo.create(request).await?;

    tracing::info!(workout_id = workout.id, "Workout created");
    Ok(workout)
}

/// Replace a workout's title, load and reps
pub async fn update_workout(db: &Database, id: i64, request: &UpdateWorkout) -> Result<Workout> {
    let mut session = db.session().await?;
    let mut repo = WorkoutRepository::new(&mut session);
    let workout = repo.update(id, request).await?;

    tracing::info!(workout_id = id, "Workout updated");
    Ok(workout)
}

/// Delete a workout
pub async fn delete_workout(db: &Database, id: i64) -> Result<()> {
    let mut session = db.session().await?;
    let mut repo = WorkoutRepository::new(&mut session);
    repo.delete(id).await?;

    tracing::info!(workout_id = id, "Workout deleted");
    Ok(())
}
