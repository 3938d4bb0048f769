//! Category records and their resource client. Singular `/category` path
//! on the wire.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

const COLLECTION: &str = "/category";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for creating a category. The backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Resource handle for `/category`, borrowed from an [`ApiClient`].
#[derive(Debug, Clone, Copy)]
pub struct Categories<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn category(&self) -> Categories<'_> {
        Categories { client: self }
    }
}

impl Categories<'_> {
    pub fn build_index(&self) -> HttpRequest {
        self.client.build_get(COLLECTION)
    }

    pub fn parse_index(&self, response: HttpResponse) -> Result<Vec<Category>, ApiError> {
        self.client.parse_list(response)
    }

    pub fn build_store(&self, input: &NewCategory) -> Result<HttpRequest, ApiError> {
        self.client.build_post(COLLECTION, input)
    }

    pub fn parse_store(&self, response: HttpResponse) -> Result<Category, ApiError> {
        self.client.parse_created(response)
    }

    pub fn build_update(&self, category: &Category) -> Result<HttpRequest, ApiError> {
        self.client
            .build_put(&format!("{COLLECTION}/{}", category.id), category)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Category, ApiError> {
        self.client.parse_updated(response)
    }

    pub fn build_destroy(&self, id: i64) -> HttpRequest {
        self.client.build_delete(&format!("{COLLECTION}/{id}"))
    }

    pub fn parse_destroy(&self, response: HttpResponse) -> Result<(), ApiError> {
        self.client.parse_destroyed(response)
    }
}
