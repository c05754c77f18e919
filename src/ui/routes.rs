//! # Web Server Routes for the Styling Service
//!
//! This module defines the Actix web server routes and handlers for the
//! text-styling endpoint. The wrapper is deliberately thin: it decodes the
//! JSON request body, runs the core pipeline once, and returns the three
//! renderings of the same result. Core behavior lives in the library
//! modules; nothing here holds state between requests.

use actix_web::http::Method;
use actix_web::{web, App, HttpResponse, HttpResponseBuilder, HttpServer};
use serde::{Deserialize, Serialize};

use crate::config::StylerConfig;
use crate::pipeline::StylerPipeline;
use crate::render::{markup_to_html, to_unicode_bold};

/// Request body of `POST /`. A malformed or missing body is treated as the
/// empty object, and an absent `text` field as the empty string — the
/// wrapper never fails on bad input.
#[derive(Debug, Default, Deserialize)]
pub struct StyleRequest {
    #[serde(default)]
    pub text: String,
}

/// The three renderings of one processed result.
#[derive(Debug, Serialize)]
pub struct StyleResponse {
    pub html: String,
    pub unicode: String,
    pub markdown: String,
}

fn cors_headers(builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    builder
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .insert_header(("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type"))
}

/// Handles `POST /`: styles the request text and answers with the HTML,
/// Unicode-bold and markdown renderings of the same result.
pub async fn style_text(config: web::Data<StylerConfig>, body: web::Bytes) -> HttpResponse {
    let request: StyleRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("treating malformed request body as empty: {}", e);
            StyleRequest::default()
        }
    };

    let pipeline = StylerPipeline::new(config.get_ref().clone());
    let markdown = pipeline.process(&request.text);
    let response = StyleResponse {
        html: markup_to_html(&markdown),
        unicode: to_unicode_bold(&markdown),
        markdown,
    };

    let mut builder = HttpResponse::Ok();
    cors_headers(&mut builder);
    builder.json(response)
}

/// Answers CORS pre-flight requests with an empty success status.
pub async fn preflight() -> HttpResponse {
    let mut builder = HttpResponse::NoContent();
    cors_headers(&mut builder);
    builder.finish()
}

/// Rejects everything that is not a `POST` (or pre-flight) with a
/// descriptive client error.
pub async fn method_not_allowed() -> HttpResponse {
    let mut builder = HttpResponse::MethodNotAllowed();
    cors_headers(&mut builder);
    builder.body("Only POST requests are accepted")
}

/// Registers the service routes. Shared between `run_server` and the
/// integration tests so both exercise the same routing table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::post().to(style_text))
        .route("/", web::method(Method::OPTIONS).to(preflight))
        .default_service(web::route().to(method_not_allowed));
}

/// Initializes and runs the Actix web server.
///
/// # Returns
/// A `std::io::Result<()>` which is `Ok(())` if the server shuts down
/// cleanly, or an `Err` if binding or startup fails.
pub async fn run_server(host: String, port: u16, config: StylerConfig) -> std::io::Result<()> {
    let config = web::Data::new(config);
    log::info!("Starting styling server at http://{}:{}/", host, port);
    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
