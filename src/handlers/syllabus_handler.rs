use actix_web::{get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{SelectSyllabusRequest, UpdateFieldRequest},
};

#[get("/api/sessions/{id}/syllabi")]
async fn get_syllabi(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let view = state.syllabus_service.session_view(&id).await;
    Ok(HttpResponse::Ok().json(view))
}

#[put("/api/sessions/{id}/syllabi/selected")]
async fn select_syllabus(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SelectSyllabusRequest>,
) -> Result<HttpResponse, AppError> {
    let view = state.syllabus_service.select(&id, request.index).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[put("/api/sessions/{id}/syllabi/selected/fields/{field}")]
async fn update_field(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<UpdateFieldRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let (session_id, field_key) = path.into_inner();
    let syllabus = state
        .syllabus_service
        .update_field(&session_id, &field_key, request.into_inner().value)
        .await?;
    Ok(HttpResponse::Ok().json(syllabus))
}

#[post("/api/sessions/{id}/syllabi/selected/save")]
async fn save_selected(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.syllabus_service.save_selected(&id).await?;
    Ok(HttpResponse::Created().json(response))
}
