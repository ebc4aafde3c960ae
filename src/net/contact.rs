//! Contact form submission.
//!
//! Client-side (hydrate): the form is sent with `gloo-net` to the URL and
//! method declared by its own `action`/`method` attributes.
//! Everywhere: response classification is plain Rust so the success, rejection
//! and connectivity paths can be exercised without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a [`ContactError`]. Nothing is retried; the caller
//! turns the error into a user-facing message and the page stays usable.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Deserialize;

use crate::state::contact::{CONNECTIVITY_ERROR_MESSAGE, GENERIC_ERROR_MESSAGE};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// The request could not be assembled from the form.
    #[error("request build failed: {0}")]
    Request(String),

    /// The request never completed.
    #[error("network request failed: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status.
    #[error("submission rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

impl ContactError {
    /// Text shown in `#formMessage` for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(_) | Self::Network(_) => CONNECTIVITY_ERROR_MESSAGE.to_owned(),
            Self::Rejected { message, .. } => message.clone(),
        }
    }

    /// Failures worth a diagnostic log entry.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Network(_))
    }
}

/// HTTP method declared by the form markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMethod {
    Get,
    Post,
}

impl FormMethod {
    /// Parse `HTMLFormElement.method`. An empty value is the HTML default, GET.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Request`] for methods `fetch` cannot send a form
    /// with (for example `dialog`).
    pub fn parse(raw: &str) -> Result<Self, ContactError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            other => Err(ContactError::Request(format!("unsupported form method: {other}"))),
        }
    }
}

/// Status and body of a settled request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    errors: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
struct FieldError {
    #[serde(default)]
    message: Option<String>,
}

#[must_use]
pub fn is_ok_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Summarize a failure body.
///
/// Field errors are joined with `", "`. Bodies that are not JSON, have no
/// `errors` list, or list no messages fall back to the generic message.
#[must_use]
pub fn rejection_message(body: &str) -> String {
    let messages = serde_json::from_str::<ErrorPayload>(body)
        .map(|payload| {
            payload
                .errors
                .unwrap_or_default()
                .into_iter()
                .filter_map(|e| e.message)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    if messages.is_empty() {
        GENERIC_ERROR_MESSAGE.to_owned()
    } else {
        messages.join(", ")
    }
}

/// Turn a settled response into the submission result.
///
/// # Errors
///
/// Returns [`ContactError::Rejected`] for any non-2xx status.
pub fn classify(response: RawResponse) -> Result<(), ContactError> {
    if is_ok_status(response.status) {
        return Ok(());
    }
    Err(ContactError::Rejected { status: response.status, message: rejection_message(&response.body) })
}

/// Await a request and classify its outcome.
///
/// # Errors
///
/// Propagates transport errors from `request` and rejections from
/// [`classify`].
pub async fn settle<F>(request: F) -> Result<(), ContactError>
where
    F: std::future::Future<Output = Result<RawResponse, ContactError>>,
{
    classify(request.await?)
}

/// Append an encoded query to a form action.
#[must_use]
pub fn with_query(action: &str, query: &str) -> String {
    if query.is_empty() {
        return action.to_owned();
    }
    let sep = if action.contains('?') { '&' } else { '?' };
    format!("{action}{sep}{query}")
}

/// Send the form's fields to its declared endpoint.
///
/// # Errors
///
/// Returns [`ContactError::Request`] if the request cannot be built and
/// [`ContactError::Network`] if it never completes.
#[cfg(feature = "hydrate")]
pub async fn send_form(form: &web_sys::HtmlFormElement) -> Result<RawResponse, ContactError> {
    use gloo_net::http::{Method, RequestBuilder};

    let method = FormMethod::parse(&form.method())?;
    let fields = web_sys::FormData::new_with_form(form).map_err(|e| ContactError::Request(format!("{e:?}")))?;
    let action = form.action();

    let request = match method {
        FormMethod::Post => RequestBuilder::new(&action)
            .method(Method::POST)
            .header("Accept", "application/json")
            .body(fields),
        FormMethod::Get => {
            let query = web_sys::UrlSearchParams::new_with_str_sequence_sequence(&fields)
                .map_err(|e| ContactError::Request(format!("{e:?}")))?;
            RequestBuilder::new(&with_query(&action, &String::from(query.to_string())))
                .method(Method::GET)
                .header("Accept", "application/json")
                .build()
        }
    }
    .map_err(|e| ContactError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;
    let status = response.status();
    // A body that cannot be read is classified like an empty one.
    let body = response.text().await.unwrap_or_default();
    Ok(RawResponse { status, body })
}
