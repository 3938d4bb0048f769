//! Book records and their resource client.
//!
//! Books reference their author and category by id; the references are
//! opaque to this layer and never validated here.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

const COLLECTION: &str = "/books";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author_id: i64,
    pub category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
}

/// Payload for creating a book. The backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author_id: i64,
    pub category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
}

/// Resource handle for `/books`, borrowed from an [`ApiClient`].
#[derive(Debug, Clone, Copy)]
pub struct Books<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn books(&self) -> Books<'_> {
        Books { client: self }
    }
}

impl Books<'_> {
    pub fn build_index(&self) -> HttpRequest {
        self.client.build_get(COLLECTION)
    }

    pub fn parse_index(&self, response: HttpResponse) -> Result<Vec<Book>, ApiError> {
        self.client.parse_list(response)
    }

    pub fn build_store(&self, input: &NewBook) -> Result<HttpRequest, ApiError> {
        self.client.build_post(COLLECTION, input)
    }

    pub fn parse_store(&self, response: HttpResponse) -> Result<Book, ApiError> {
        self.client.parse_created(response)
    }

    pub fn build_update(&self, book: &Book) -> Result<HttpRequest, ApiError> {
        self.client.build_put(&format!("{COLLECTION}/{}", book.id), book)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Book, ApiError> {
        self.client.parse_updated(response)
    }

    pub fn build_destroy(&self, id: i64) -> HttpRequest {
        self.client.build_delete(&format!("{COLLECTION}/{id}"))
    }

    pub fn parse_destroy(&self, response: HttpResponse) -> Result<(), ApiError> {
        self.client.parse_destroyed(response)
    }
}
