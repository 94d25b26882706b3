//! Alert messages shown in the page's alert container after an HTMX request.
//!
//! Error alerts are swapped into `#alert-container` by the requesting element's
//! `hx-target-error`. Success alerts replace the container out-of-band, since
//! the requesting element usually targets something else (e.g. a table row).

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::html::{ALERT_CONTAINER_POSITION, ALERT_CONTAINER_STYLE};

/// An alert message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// A one-line confirmation, swapped in out-of-band.
    SuccessSimple { message: String },
    /// A failure with a hint on how to fix it.
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        match self {
            Alert::SuccessSimple { message } => out_of_band(&alert_view(&message, "", true)),
            Alert::Error { message, details } => alert_view(&message, &details, false),
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}

fn out_of_band(alert: &Markup) -> Markup {
    html! {
        div
            id="alert-container"
            hx-swap-oob="true"
            class=(ALERT_CONTAINER_STYLE)
            style=(ALERT_CONTAINER_POSITION)
        {
            (alert)
        }
    }
}

fn alert_view(message: &str, details: &str, is_success: bool) -> Markup {
    let style = if is_success {
        "flex items-start gap-3 p-4 mb-4 rounded-lg border shadow-lg \
        text-green-800 bg-green-50 border-green-300 \
        dark:bg-gray-800 dark:text-green-400 dark:border-green-800"
    } else {
        "flex items-start gap-3 p-4 mb-4 rounded-lg border shadow-lg \
        text-red-800 bg-red-50 border-red-300 \
        dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
    };

    html! {
        div role="alert" class=(style) data-alert=(if is_success { "success" } else { "error" })
        {
            div class="flex-1"
            {
                p class="font-semibold" { (message) }

                @if !details.is_empty() {
                    p class="mt-1 text-sm" { (details) }
                }
            }

            button
                type="button"
                aria-label="Dismiss"
                data-dismiss-alert
                class="ms-auto -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex \
                    items-center justify-center h-8 w-8 hover:bg-black/5"
            {
                "×"
            }
        }
    }
}
