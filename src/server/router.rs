use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::server::{
    controller::{
        auth, health, notification, publication_request, reservation, terrace, user, verification,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::get_health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route(
            "/api/user/profile",
            get(user::get_profile)
                .post(user::update_profile)
                .delete(user::delete_profile),
        )
        .route("/api/reservations", post(reservation::create_reservation))
        .route("/api/reservations/mine", get(reservation::get_my_reservations))
        .route("/api/reservations/host", get(reservation::get_host_reservations))
        .route(
            "/api/reservations/bulksync",
            post(reservation::bulk_sync_reservations),
        )
        .route(
            "/api/reservations/{id}/cancel",
            put(reservation::cancel_reservation),
        )
        .route(
            "/api/reservations/{id}/approve",
            put(reservation::approve_reservation),
        )
        .route(
            "/api/reservations/{id}/reject",
            put(reservation::reject_reservation),
        )
        .route(
            "/api/publication-requests",
            post(publication_request::submit_publication_request)
                .get(publication_request::get_publication_requests),
        )
        .route(
            "/api/publication-requests/mine",
            get(publication_request::get_my_publication_requests),
        )
        .route(
            "/api/publication-requests/{id}",
            get(publication_request::get_publication_request),
        )
        .route(
            "/api/publication-requests/{id}/approve",
            put(publication_request::approve_publication_request),
        )
        .route(
            "/api/publication-requests/{id}/reject",
            put(publication_request::reject_publication_request),
        )
        .route("/api/terraces", get(terrace::get_terraces))
        .route("/api/terraces/{id}", get(terrace::get_terrace))
        .route("/api/notifications", get(notification::get_notifications))
        .route(
            "/api/notifications/unread-count",
            get(notification::get_unread_count),
        )
        .route(
            "/api/notifications/{id}/read",
            patch(notification::mark_notification_read),
        )
        .route(
            "/api/notifications/mark-all-read",
            patch(notification::mark_all_notifications_read),
        )
        .route(
            "/api/notifications/{id}",
            delete(notification::delete_notification),
        )
        .route(
            "/api/notifications/read/clear",
            delete(notification::clear_read_notifications),
        )
        .route(
            "/api/document-verification",
            post(verification::register_document),
        )
        .route(
            "/api/document-verification/mine",
            get(verification::get_my_documents),
        )
        .route(
            "/api/document-verification/user/{user_id}",
            get(verification::get_user_documents),
        )
        .route(
            "/api/document-verification/{id}/status",
            put(verification::update_document_status),
        )
        .fallback(health::not_found)
}
