//! Single binary web server: HTML shell plus REST API over in-memory wizard sessions.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    get, post,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use kpl_team_generator::{generate_roster, validate_entry, Wizard, WizardId};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-session entry: wizard data + last activity time (for auto-cleanup).
struct WizardEntry {
    wizard: Wizard,
    last_activity: Instant,
}

/// In-memory state: many wizard sessions by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<WizardId, WizardEntry>>>;

/// Inactivity threshold: sessions not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddTeamBody {
    name: String,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    player: String,
    /// Defaults to the wizard's active category when omitted.
    category_index: Option<usize>,
}

/// Path segment: wizard id (e.g. /api/wizards/{id})
#[derive(Deserialize)]
struct WizardPath {
    id: WizardId,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "kpl-team-generator",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new wizard session (returns it with id; client stores id for subsequent requests).
#[post("/api/wizards")]
async fn api_create_wizard(state: AppState) -> HttpResponse {
    let wizard = Wizard::new();
    let id = wizard.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        WizardEntry {
            wizard,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(&g.get(&id).unwrap().wizard)
}

/// Get a wizard by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/wizards/{id}")]
async fn api_get_wizard(state: AppState, path: Path<WizardPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.wizard)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No wizard" })),
    }
}

/// Add a team name (wizard must be in CollectingTeams).
#[post("/api/wizards/{id}/teams")]
async fn api_add_team(state: AppState, path: Path<WizardPath>, body: Json<AddTeamBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No wizard" })),
    };
    entry.last_activity = Instant::now();
    let w = &mut entry.wizard;
    let name = match validate_entry(&body.name) {
        Ok(n) => n,
        Err(e) => return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    };
    match w.add_team_name(name) {
        Ok(()) => HttpResponse::Ok().json(w),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Add a player to the active category (wizard must be in CollectingPlayers).
#[post("/api/wizards/{id}/players")]
async fn api_add_player(state: AppState, path: Path<WizardPath>, body: Json<AddPlayerBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No wizard" })),
    };
    entry.last_activity = Instant::now();
    let w = &mut entry.wizard;
    let player = match validate_entry(&body.player) {
        Ok(p) => p,
        Err(e) => return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    };
    let category_index = body.category_index.unwrap_or(w.active_category_index);
    match w.add_player_to_category(category_index, player) {
        Ok(()) => HttpResponse::Ok().json(w),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Generate the final roster (wizard must be Ready).
#[post("/api/wizards/{id}/roster")]
async fn api_generate_roster(state: AppState, path: Path<WizardPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No wizard" })),
    };
    entry.last_activity = Instant::now();
    let w = &mut entry.wizard;
    match generate_roster(w) {
        Ok(()) => HttpResponse::Ok().json(w),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<WizardId, WizardEntry>::new()));

    // Background task: every 30 minutes, remove wizards inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive wizard(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_wizard)
            .service(api_get_wizard)
            .service(api_add_team)
            .service(api_add_player)
            .service(api_generate_roster)
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
