//! Student endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::repos::{NewStudent, Student, StudentRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /students - list all students
async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = StudentRepo::new(&state.pool).list().await?;
    Ok(Json(students))
}

/// POST /students - create a new student
async fn create_student(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewStudent>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let student = StudentRepo::new(&state.pool).create(req).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /students/{student_id} - get a single student
async fn get_student(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i64>,
) -> Result<Json<Student>, ApiError> {
    let student = StudentRepo::new(&state.pool).get(student_id).await?;
    Ok(Json(student))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route("/students/", get(list_students).post(create_student))
        .route("/students/{student_id}", get(get_student))
}
