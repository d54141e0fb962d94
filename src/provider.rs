//! Data provider: translates list/detail lookups into REST calls.
//!
//! `GET {api_url}/{resource}?sort=...&order=...` for lists,
//! `GET {api_url}/{resource}/{id}` for a single record.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),
}

/// Field the backend is asked to sort the list by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Id,
    State,
    Result,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Id => "id",
            SortField::State => "state",
            SortField::Result => "result",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortField::Date => SortField::Id,
            SortField::Id => SortField::State,
            SortField::State => SortField::Result,
            SortField::Result => SortField::Date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for Sort {
    // Backend default: newest first.
    fn default() -> Self {
        Self {
            field: SortField::Date,
            order: SortOrder::Desc,
        }
    }
}

impl Sort {
    pub fn query(&self) -> String {
        format!("sort={}&order={}", self.field.as_str(), self.order.as_str())
    }
}

/// A page of records. The backend returns the entire result set, so
/// `total` is simply the returned array's length.
#[derive(Debug)]
pub struct ListResult<T> {
    pub data: Vec<T>,
    pub total: usize,
}

/// Thin adapter over a blocking HTTP client. Performs no caching, retry,
/// or request coalescing; each call is one request.
pub struct DataProvider {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl DataProvider {
    pub fn new(api_url: &str) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all records of `resource`, sorted server-side.
    pub fn get_list<T: DeserializeOwned>(
        &self,
        resource: &str,
        sort: Sort,
    ) -> Result<ListResult<T>, ProviderError> {
        let url = format!("{}/{}?{}", self.base_url, resource, sort.query());
        let data: Vec<T> = self.fetch_json(&url)?;
        let total = data.len();
        Ok(ListResult { data, total })
    }

    /// Fetch a single record of `resource` by id.
    pub fn get_one<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: &str,
    ) -> Result<T, ProviderError> {
        let url = format!("{}/{}/{}", self.base_url, resource, id);
        self.fetch_json(&url)
    }

    fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ProviderError> {
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            return Err(ProviderError::Server {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}
