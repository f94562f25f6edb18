use sqlx::SqliteConnection;

use crate::dto::workout::{CreateWorkout, UpdateWorkout};
use crate::error::{Result, StorageError};
use crate::models::Workout;

pub struct WorkoutRepository<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// List all workouts in storage order
    pub async fn list(&mut self) -> Result<Vec<Workout>> {
        let workouts =
            sqlx::query_as::<_, Workout>("SELECT id, title, load, reps FROM workouts")
                .fetch_all(&mut *self.conn)
                .await?;

        Ok(workouts)
    }

    /// Find workout by ID
    pub async fn find_by_id(&mut self, id: i64) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            "SELECT id, title, load, reps FROM workouts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(workout)
    }

    /// Create a new workout, returning it with its generated ID
    pub async fn create(&mut self, req: &CreateWorkout) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            INSERT INTO workouts (title, load, reps)
            VALUES (?, ?, ?)
            RETURNING id, title, load, reps
            "#,
        )
        .bind(&req.title)
        .bind(req.load)
        .bind(req.reps)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(workout)
    }

    /// Overwrite every mutable field of an existing workout
    pub async fn update(&mut self, id: i64, req: &UpdateWorkout) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            UPDATE workouts
            SET title = ?, load = ?, reps = ?
            WHERE id = ?
            RETURNING id, title, load, reps
            "#,
        )
        .bind(&req.title)
        .bind(req.load)
        .bind(req.reps)
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(workout)
    }

    /// Delete a workout by ID
    pub async fn delete(&mut self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
