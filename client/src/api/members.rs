//! Member records and their resource client.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

const COLLECTION: &str = "/members";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Payload for creating a member. The backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Resource handle for `/members`, borrowed from an [`ApiClient`].
#[derive(Debug, Clone, Copy)]
pub struct Members<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn members(&self) -> Members<'_> {
        Members { client: self }
    }
}

impl Members<'_> {
    pub fn build_index(&self) -> HttpRequest {
        self.client.build_get(COLLECTION)
    }

    pub fn parse_index(&self, response: HttpResponse) -> Result<Vec<Member>, ApiError> {
        self.client.parse_list(response)
    }

    pub fn build_store(&self, input: &NewMember) -> Result<HttpRequest, ApiError> {
        self.client.build_post(COLLECTION, input)
    }

    pub fn parse_store(&self, response: HttpResponse) -> Result<Member, ApiError> {
        self.client.parse_created(response)
    }

    pub fn build_update(&self, member: &Member) -> Result<HttpRequest, ApiError> {
        self.client
            .build_put(&format!("{COLLECTION}/{}", member.id), member)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Member, ApiError> {
        self.client.parse_updated(response)
    }

    pub fn build_destroy(&self, id: i64) -> HttpRequest {
        self.client.build_delete(&format!("{COLLECTION}/{id}"))
    }

    pub fn parse_destroy(&self, response: HttpResponse) -> Result<(), ApiError> {
        self.client.parse_destroyed(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn store_body_matches_draft() {
        let c = ApiClient::new(ClientConfig::new("http://localhost:3000"));
        let input = NewMember {
            name: "Ada".to_string(),
            email: "ada@example.test".to_string(),
            phone: Some("555-0100".to_string()),
        };
        let req = c.members().build_store(&input).unwrap();
        assert_eq!(req.url, "http://localhost:3000/members");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["email"], "ada@example.test");
        assert_eq!(body["phone"], "555-0100");
    }
}
