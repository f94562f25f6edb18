use sqlx::FromRow;

/// One row of the `workouts` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Workout {
    pub id: i64,
    pub title: String,
    pub load: i64,
    pub reps: i64,
}
