// src/api/handlers/convert.rs
use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use std::time::Instant;
use crate::api::AppState;
use crate::errors::ErrorKind;
use crate::models::{ConversionRequest, ConversionResult};
use crate::session::SAMPLE_JAVA;

/// One-shot conversion without a session.
pub async fn convert(
    state: web::Data<AppState>,
    req: web::Json<ConversionRequest>,
) -> Result<HttpResponse> {
    let started = Instant::now();

    match state.translator.convert(&req.source).await {
        Ok(code) => Ok(HttpResponse::Ok().json(ConversionResult::Success {
            code,
            elapsed_seconds: started.elapsed().as_secs_f64(),
        })),
        Err(e) => {
            let response = ConversionResult::Failure { message: e.user_message() };
            match e.kind() {
                ErrorKind::EmptyInput => {
                    log::warn!("Rejected conversion with empty input");
                    Ok(HttpResponse::BadRequest().json(response))
                }
                _ => {
                    log::error!("Error converting code: {}", e);
                    Ok(HttpResponse::BadGateway().json(response))
                }
            }
        }
    }
}

pub async fn get_example() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "source": SAMPLE_JAVA })))
}
