use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use utoipa::ToSchema;

use crate::models::Workout;

/// Response containing a stored workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct WorkoutResponse {
    pub id: i64,
    pub title: String,
    pub load: i64,
    pub reps: i64,
}

/// Request payload for creating a new workout.
///
/// `load` and `reps` also accept integers written as strings, e.g. `"80"`.
#[serde_as]
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateWorkout {
    pub title: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub load: i64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub reps: i64,
}

/// Request payload for replacing an existing workout.
///
/// Every field is required; there is no partial update.
#[serde_as]
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateWorkout {
    pub title: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub load: i64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub reps: i64,
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.id,
            title: workout.title,
            load: workout.load,
            reps: workout.reps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_requires_every_field() {
        let err = serde_json::from_str::<CreateWorkout>(r#"{"title": "Bench", "reps": 5}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field `load`"));
    }

    #[test]
    fn create_payload_rejects_non_integer_load() {
        let result = serde_json::from_str::<CreateWorkout>(
            r#"{"title": "Bench", "load": "heavy", "reps": 5}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn numeric_strings_are_coerced_to_integers() {
        let create: CreateWorkout =
            serde_json::from_str(r#"{"title": "Bench", "load": "80", "reps": "5"}"#).unwrap();
        assert_eq!(create.load, 80);
        assert_eq!(create.reps, 5);

        let update: UpdateWorkout =
            serde_json::from_str(r#"{"title": "Squat", "load": 100, "reps": "8"}"#).unwrap();
        assert_eq!(update.load, 100);
        assert_eq!(update.reps, 8);
    }

    #[test]
    fn fractional_strings_are_rejected() {
        let result = serde_json::from_str::<CreateWorkout>(
            r#"{"title": "Bench", "load": "80.5", "reps": 5}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn update_payload_ignores_unknown_fields() {
        let update: UpdateWorkout =
            serde_json::from_str(r#"{"id": 42, "title": "Squat", "load": 100, "reps": 8}"#)
                .unwrap();
        assert_eq!(update.title, "Squat");
        assert_eq!(update.load, 100);
        assert_eq!(update.reps, 8);
    }

    #[test]
    fn response_exposes_exactly_four_fields() {
        let response = WorkoutResponse::from(Workout {
            id: 7,
            title: "Deadlift".to_string(),
            load: 180,
            reps: 3,
        });

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 4);
        assert_eq!(value["id"], 7);
        assert_eq!(value["title"], "Deadlift");
        assert_eq!(value["load"], 180);
        assert_eq!(value["reps"], 3);
    }
}
