//! The page shown when the server cannot complete a request.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

const DEFAULT_DESCRIPTION: &str = "Sorry, something went wrong.";
const DEFAULT_FIX: &str = "Try again later or check the server logs.";

/// A 500 response with a full error page.
fn internal_server_error_response(description: &str, fix: &str) -> Response {
    let page = error_view("Internal Server Error", "500", description, fix);

    (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
}

/// The 500 page for a timezone name the server could not resolve.
pub(crate) fn invalid_timezone_response(timezone: &str) -> Response {
    internal_server_error_response(
        "Invalid Timezone Settings",
        &format!(
            "Could not get local timezone \"{timezone}\". Restart the server with \
            --timezone set to a canonical timezone name, e.g. \"Africa/Algiers\"."
        ),
    )
}

/// The 500 page for errors the user cannot fix.
pub(crate) fn generic_internal_server_error_response() -> Response {
    internal_server_error_response(DEFAULT_DESCRIPTION, DEFAULT_FIX)
}

/// The route handler for the generic error page.
pub async fn get_internal_server_error_page() -> Response {
    generic_internal_server_error_response()
}
