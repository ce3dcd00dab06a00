mod config;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

use crate::config::ServerConfig;

static SITE_DIST: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded site bundle. Unknown paths fall back to
/// `index.html` so every page survives a browser refresh.
async fn serve_site(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let asset_path = if path.is_empty() { "index.html" } else { path };

    match SITE_DIST.get_file(asset_path) {
        Some(file) => {
            let mime = from_path(asset_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match SITE_DIST.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();
    let url = config.url();

    if config.open_browser {
        let launch_url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&launch_url);
        });
    }

    info!("Serving study-abroad site at {}", url);
    info!(
        "lead dispatch number: {}",
        common::leads::whatsapp::WHATSAPP_NUMBER
    );

    HttpServer::new(|| App::new().default_service(web::route().to(serve_site)))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
