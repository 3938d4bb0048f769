//! Author records and their resource client.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

const COLLECTION: &str = "/authors";

/// An author as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Payload for creating an author. The backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Resource handle for `/authors`, borrowed from an [`ApiClient`].
#[derive(Debug, Clone, Copy)]
pub struct Authors<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn authors(&self) -> Authors<'_> {
        Authors { client: self }
    }
}

impl Authors<'_> {
    pub fn build_index(&self) -> HttpRequest {
        self.client.build_get(COLLECTION)
    }

    pub fn parse_index(&self, response: HttpResponse) -> Result<Vec<Author>, ApiError> {
        self.client.parse_list(response)
    }

    pub fn build_store(&self, input: &NewAuthor) -> Result<HttpRequest, ApiError> {
        self.client.build_post(COLLECTION, input)
    }

    pub fn parse_store(&self, response: HttpResponse) -> Result<Author, ApiError> {
        self.client.parse_created(response)
    }

    /// PUT the full record at `/authors/{record.id}`.
    pub fn build_update(&self, author: &Author) -> Result<HttpRequest, ApiError> {
        self.client.build_put(&format!("{COLLECTION}/{}", author.id), author)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Author, ApiError> {
        self.client.parse_updated(response)
    }

    pub fn build_destroy(&self, id: i64) -> HttpRequest {
        self.client.build_delete(&format!("{COLLECTION}/{id}"))
    }

    pub fn parse_destroy(&self, response: HttpResponse) -> Result<(), ApiError> {
        self.client.parse_destroyed(response)
    }
}
