use crate::api::service;
use actix_web::{post, web, Responder};
use ownership_proof::types::{CheckOwnershipRequest, RpcRegistry};

#[post("/checkOwnership")]
async fn check_ownership(
    registry: web::Data<RpcRegistry>,
    body: web::Json<CheckOwnershipRequest>,
) -> impl Responder {
    log::info!("check_ownership - {:?}", body);
    web::Json(service::check_ownership(&registry, &body).await)
}
