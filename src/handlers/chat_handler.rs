use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::AttachedFile,
        dto::request::{AttachFilesRequest, SubmitMessageRequest},
    },
};

#[get("/api/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[post("/api/sessions/{id}/messages")]
async fn submit_message(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitMessageRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let reply = state
        .chat_service
        .submit_message(&id, &request.message)
        .await?;
    Ok(HttpResponse::Ok().json(reply))
}

#[post("/api/sessions/{id}/attachments")]
async fn attach_files(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<AttachFilesRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let files: Vec<AttachedFile> = request
        .into_inner()
        .files
        .into_iter()
        .map(Into::into)
        .collect();

    let reply = state.chat_service.attach_files(&id, files).await?;
    Ok(HttpResponse::Ok().json(reply))
}

#[get("/api/sessions/{id}/messages")]
async fn get_transcript(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let transcript = state.chat_service.transcript(&id).await;
    Ok(HttpResponse::Ok().json(transcript))
}
