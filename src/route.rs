//! HTTP surface wrapping [`fieldpath::dispatch`] (spec §6, `[ADDED]`
//! transport layer). Generalized from the teacher's single `/route`
//! endpoint — OSM lat/lon routing over a database-backed graph — into two
//! endpoints over caller-supplied dense arrays.

use actix_web::{post, web, HttpResponse, Responder};
use fieldpath::error::PathError;
use fieldpath::{find_path_2d, find_route_temporal, TemporalOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct Path2dRequest {
    array: Vec<u8>,
    width: usize,
    height: usize,
    start: (usize, usize),
    end: (usize, usize),
    algorithm: String,
}

#[derive(Debug, Deserialize)]
struct Route3dRequest {
    volume: Vec<u8>,
    dims: [usize; 3],
    start: (usize, usize, usize),
    end: (usize, usize, usize),
    algorithm: String,
    #[serde(default)]
    reach: Option<usize>,
    #[serde(default)]
    axis: Option<usize>,
}

#[derive(Debug, Serialize)]
struct PathResponse<C> {
    path: Vec<C>,
    cost: u64,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    detail: String,
}

fn error_response(err: PathError) -> HttpResponse {
    let kind = match err {
        PathError::UnknownAlgorithm { .. } => "UnknownAlgorithm",
        PathError::OutOfBounds { .. } => "OutOfBounds",
        PathError::BadShape { .. } => "BadShape",
        PathError::BadParameter { .. } => "BadParameter",
        PathError::Internal { .. } => "Internal",
    };
    let status = match err {
        PathError::Internal { .. } => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        _ => actix_web::http::StatusCode::BAD_REQUEST,
    };
    HttpResponse::build(status).json(ErrorResponse {
        error: kind.to_string(),
        detail: err.to_string(),
    })
}

#[post("/path2d")]
async fn path2d(body: web::Json<Path2dRequest>) -> impl Responder {
    let req = body.into_inner();
    match find_path_2d(
        &req.array,
        req.width,
        req.height,
        req.start,
        req.end,
        &req.algorithm,
    ) {
        Ok(Some((path, cost))) => HttpResponse::Ok().json(PathResponse { path, cost }),
        Ok(None) => HttpResponse::Ok().json(Option::<()>::None),
        Err(err) => error_response(err),
    }
}

#[post("/route3d")]
async fn route3d(body: web::Json<Route3dRequest>) -> impl Responder {
    let req = body.into_inner();
    let options = TemporalOptions {
        reach: req.reach.unwrap_or(1),
        axis: req.axis.unwrap_or(2),
    };
    match find_route_temporal(
        &req.volume,
        req.dims,
        &req.algorithm,
        req.start,
        req.end,
        options,
    ) {
        Ok(Some((path, cost))) => HttpResponse::Ok().json(PathResponse { path, cost }),
        Ok(None) => HttpResponse::Ok().json(Option::<()>::None),
        Err(err) => error_response(err),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(path2d).service(route3d);
}
