// src/api/handlers/sessions.rs
use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::api::AppState;
use crate::models::ApiError;
use crate::session::{Effect, SessionState};

#[derive(Deserialize)]
pub struct InputRequest {
    pub input: String,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub state: SessionState,
}

fn not_found(id: Uuid) -> HttpResponse {
    HttpResponse::NotFound().json(ApiError {
        error: format!("Session {} not found", id),
    })
}

pub async fn create_session(state: web::Data<AppState>) -> Result<HttpResponse> {
    let Some((id, controller)) = state.sessions.create().await else {
        log::warn!("Session store is full, refusing a new session");
        return Ok(HttpResponse::ServiceUnavailable().json(ApiError {
            error: "Too many open sessions, please try again later".to_string(),
        }));
    };
    let snapshot = controller.lock().await.state().clone();
    log::debug!("Opened session {}", id);

    Ok(HttpResponse::Created().json(SessionResponse { id, state: snapshot }))
}

pub async fn get_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let Some(controller) = state.sessions.get(&id).await else {
        return Ok(not_found(id));
    };
    let snapshot = controller.lock().await.state().clone();

    Ok(HttpResponse::Ok().json(SessionResponse { id, state: snapshot }))
}

pub async fn set_input(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<InputRequest>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let Some(controller) = state.sessions.get(&id).await else {
        return Ok(not_found(id));
    };

    let mut controller = controller.lock().await;
    controller.set_input(req.into_inner().input);

    Ok(HttpResponse::Ok().json(SessionResponse { id, state: controller.state().clone() }))
}

/// Runs the submit transition and, when it asks for one, the conversion request.
/// The session lock is not held while the request is outstanding.
pub async fn submit(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<InputRequest>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let Some(controller) = state.sessions.get(&id).await else {
        return Ok(not_found(id));
    };

    let (effect, snapshot) = {
        let mut controller = controller.lock().await;
        let effect = controller.submit(req.into_inner().input);
        (effect, controller.state().clone())
    };

    match effect {
        Effect::None if snapshot.is_loading() => {
            log::warn!("Session {} already has a conversion in flight", id);
            Ok(HttpResponse::Conflict().json(SessionResponse { id, state: snapshot }))
        }
        Effect::None => Ok(HttpResponse::Ok().json(SessionResponse { id, state: snapshot })),
        Effect::Translate { source, started } => {
            log::info!("🔄 Session {} converting {} bytes of Java", id, source.len());
            let result = state.translator.translate(&source, started).await;
            if !result.is_success() {
                log::warn!("Session {} conversion failed", id);
            }

            let mut controller = controller.lock().await;
            controller.complete(result);
            if let Some(seconds) = controller.state().elapsed_display() {
                log::info!("⏱️  Session {} finished in {}s", id, seconds);
            }

            Ok(HttpResponse::Ok().json(SessionResponse { id, state: controller.state().clone() }))
        }
    }
}

pub async fn clear(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let Some(controller) = state.sessions.get(&id).await else {
        return Ok(not_found(id));
    };

    let mut controller = controller.lock().await;
    controller.clear();

    Ok(HttpResponse::Ok().json(SessionResponse { id, state: controller.state().clone() }))
}

pub async fn load_example(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let Some(controller) = state.sessions.get(&id).await else {
        return Ok(not_found(id));
    };

    let mut controller = controller.lock().await;
    controller.load_example();

    Ok(HttpResponse::Ok().json(SessionResponse { id, state: controller.state().clone() }))
}

pub async fn delete_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    if state.sessions.remove(&id).await {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(not_found(id))
    }
}
