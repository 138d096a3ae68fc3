use crate::core::{amenity, scoring, ListingFilter};
use crate::models::{
    ChatRequest, ChatResponse, ErrorResponse, HealthResponse, Listing, LivabilityQuery,
    LivabilityResponse, SearchCriteria, SearchResponse,
};
use crate::services::{ListingStore, OverpassClient, TranslatorClient};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<TranslatorClient>,
    pub overpass: Arc<OverpassClient>,
    pub listings: Arc<ListingStore>,
    pub filter: ListingFilter,
    pub default_radius_m: u32,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/chat", web::post().to(chat))
        .route("/search", web::post().to(search))
        .route("/livability", web::get().to(livability));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.listings.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Natural-language search endpoint
///
/// POST /api/v1/chat
///
/// Request body:
/// ```json
/// {
///   "message": "a two-bedroom near Taipei Main Station under 24 million"
/// }
/// ```
///
/// Translation failures never abort the flow: the handler replies with an
/// apology instead of an error, because partial or failed translation is a
/// legitimate upstream outcome.
async fn chat(state: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!("User requirement: {}", req.message);

    let criteria = match state.translator.parse_requirement(&req.message).await {
        Ok(criteria) => criteria,
        Err(e) => {
            tracing::warn!("Translation failed, replying without results: {}", e);
            return HttpResponse::Ok().json(not_understood_response(state.listings.len()));
        }
    };

    // A translation that succeeds but carries no constraint at all means
    // the model understood nothing useful; reply like a failed
    // translation instead of returning the first listings unfiltered.
    if criteria.is_unconstrained() {
        tracing::warn!("Translation produced empty criteria for: {}", req.message);
        return HttpResponse::Ok().json(not_understood_response(state.listings.len()));
    }

    tracing::debug!("Derived criteria: {:?}", criteria);

    let outcome = state.filter.filter(state.listings.all(), &criteria);

    tracing::info!(
        "Returning {} matches (from {} listings)",
        outcome.matches.len(),
        outcome.total_listings
    );

    HttpResponse::Ok().json(ChatResponse {
        reply: render_reply(&outcome.matches),
        matches: outcome.matches,
        criteria: Some(criteria),
        total_listings: outcome.total_listings,
    })
}

/// Structured search endpoint
///
/// POST /api/v1/search
///
/// Takes a `SearchCriteria` body directly, bypassing translation. Any
/// subset of fields may be present; absent fields impose no constraint.
async fn search(state: web::Data<AppState>, req: web::Json<SearchCriteria>) -> impl Responder {
    let outcome = state.filter.filter(state.listings.all(), &req);

    tracing::debug!(
        "Structured search matched {} of {} listings",
        outcome.matches.len(),
        outcome.total_listings
    );

    HttpResponse::Ok().json(SearchResponse {
        matches: outcome.matches,
        total_listings: outcome.total_listings,
    })
}

/// Livability scoring endpoint
///
/// GET /api/v1/livability?lat=25.0479&lon=121.5173&radius_m=1000
///
/// A failed POI fetch degrades to an empty element list (score 0) rather
/// than an error response; upstream outages must not break the caller's
/// flow.
async fn livability(
    state: web::Data<AppState>,
    query: web::Query<LivabilityQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let radius_m = query.radius_m.unwrap_or(state.default_radius_m);

    let elements = match state
        .overpass
        .nearby_poi_tags(query.lat, query.lon, radius_m)
        .await
    {
        Ok(elements) => elements,
        Err(e) => {
            tracing::warn!(
                "Overpass query failed for ({}, {}), scoring an empty element list: {}",
                query.lat,
                query.lon,
                e
            );
            vec![]
        }
    };

    let counts = amenity::count_categories(&elements);
    let report = scoring::livability_score(&counts);

    tracing::info!(
        "Livability at ({}, {}): score {} over {} categories",
        query.lat,
        query.lon,
        report.score,
        counts.len()
    );

    HttpResponse::Ok().json(LivabilityResponse {
        score: report.score,
        reasons: report.reasons,
        counts,
    })
}

/// Reply returned when no usable criteria came out of translation
fn not_understood_response(total_listings: usize) -> ChatResponse {
    ChatResponse {
        reply: "Sorry, I could not understand that requirement. Could you rephrase it?"
            .to_string(),
        matches: vec![],
        criteria: None,
        total_listings,
    }
}

/// Render the user-facing reply text for a match list
fn render_reply(matches: &[Listing]) -> String {
    if matches.is_empty() {
        return "Sorry, no listings matched all of your conditions. \
                You could try relaxing the budget or the commute distance."
            .to_string();
    }

    let mut reply = format!("Found {} listings that may fit your needs:\n\n", matches.len());
    for listing in matches {
        reply.push_str(&format!(
            "🏠 **{}**\n\
             - Address: {}\n\
             - Price: {:.0} 萬\n\
             - Size: {} ping\n\
             - Layout: {} bed / {} living / {} bath\n\
             - Link: [view listing]({})\n---\n",
            listing.name,
            listing.address,
            listing.price as f64 / 10_000.0,
            listing.size,
            listing.bedroom,
            listing.living_room,
            listing.bathroom,
            listing.link,
        ));
    }
    reply
}
