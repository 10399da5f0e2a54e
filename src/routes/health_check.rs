use actix_web::{HttpResponse, Responder};
use uuid::Uuid;

pub async fn health_check() -> impl Responder {
    let request_id = Uuid::new_v4();
    tracing::debug!(%request_id, "Health check");

    HttpResponse::Ok().finish()
}
