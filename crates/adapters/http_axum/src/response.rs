//! Uniform JSON envelopes returned by every endpoint.

use serde::Serialize;

use hotelhub_domain::page::{Page, PageRequest};

/// Body of every successful non-paged response.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(data: T, message: &'static str) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message),
        }
    }
}

impl Envelope<()> {
    /// A success body carrying only a human-readable message.
    pub fn message(message: &'static str) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message),
        }
    }
}

/// Pagination metadata, always computed from the clamped request.
#[derive(Debug, Serialize)]
pub struct PageInfo {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u64,
}

/// Body of every paged response.
#[derive(Debug, Serialize)]
pub struct PagedEnvelope<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub page: PageInfo,
}

impl<T> PagedEnvelope<T> {
    pub fn new(page: Page<T>, request: PageRequest) -> Self {
        let info = PageInfo {
            page: request.page(),
            page_size: request.page_size(),
            total: page.total,
            total_pages: page.total_pages(request.page_size()),
        };
        Self {
            success: true,
            data: page.items,
            page: info,
        }
    }
}

/// Body of every failed response.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(code: &'static str, message: String) -> Self {
        Self {
            success: false,
            error: ErrorBody { code, message },
        }
    }
}
