//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{assistant, attractions, auth, bookings, health, reviews, routes, stats, taxonomy};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tourvia API",
        version = "0.1.0",
        description = "Tourism Content REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::me,
        // Attractions
        attractions::list_attractions,
        attractions::get_attraction,
        attractions::create_attraction,
        attractions::update_attraction,
        attractions::delete_attraction,
        attractions::toggle_favorite,
        // Taxonomy
        taxonomy::list_regions,
        taxonomy::create_region,
        taxonomy::delete_region,
        taxonomy::list_categories,
        taxonomy::create_category,
        taxonomy::delete_category,
        // Reviews
        reviews::list_reviews,
        reviews::submit_review,
        reviews::moderate_review,
        // Routes
        routes::list_routes,
        routes::get_route,
        routes::create_route,
        routes::update_route,
        routes::delete_route,
        routes::create_route_stop,
        routes::delete_route_stop,
        // Bookings
        bookings::list_bookings,
        bookings::create_booking,
        bookings::pay_booking,
        // Chat
        assistant::ask,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::MeResponse,
            crate::models::user::UserInfo,
            crate::models::user::RegisterUser,
            // Attractions
            crate::models::attraction::Attraction,
            crate::models::attraction::AttractionStatus,
            crate::models::attraction::CreateAttraction,
            crate::models::attraction::UpdateAttraction,
            attractions::FavoriteResponse,
            // Taxonomy
            crate::models::taxonomy::Region,
            crate::models::taxonomy::Category,
            crate::models::taxonomy::CreateNamedEntry,
            // Reviews
            crate::models::review::Review,
            crate::models::review::ReviewStatus,
            crate::models::review::SubmitReview,
            crate::models::review::ModerateReview,
            reviews::ModerateResponse,
            // Routes
            crate::models::route::Route,
            crate::models::route::RouteStop,
            crate::models::route::RouteDetails,
            crate::models::route::CreateRoute,
            crate::models::route::UpdateRoute,
            crate::models::route::CreateRouteStop,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::BookingStatus,
            crate::models::booking::CreateBooking,
            bookings::PayResponse,
            // Chat
            assistant::AskRequest,
            crate::services::assistant::AskResponse,
            crate::services::assistant::Recommendation,
            // Stats
            crate::services::stats::StatsResponse,
            crate::services::stats::PopularDestination,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication and profile"),
        (name = "attractions", description = "Attraction catalogue"),
        (name = "taxonomy", description = "Regions and categories"),
        (name = "reviews", description = "Reviews and moderation"),
        (name = "routes", description = "Route catalogue"),
        (name = "bookings", description = "Bookings and payment"),
        (name = "chat", description = "AI travel assistant"),
        (name = "stats", description = "Admin dashboard")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
