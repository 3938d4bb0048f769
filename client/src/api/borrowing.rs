//! Borrowing records and their resource client.
//!
//! The collection path is singular (`/borrowing`) on the wire. A borrowing
//! links a book to a member; `return_date` stays empty until the book comes
//! back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

const COLLECTION: &str = "/borrowing";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Borrowing {
    pub id: i64,
    pub book_id: i64,
    pub member_id: i64,
    pub borrow_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
}

/// Payload for creating a borrowing. The backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBorrowing {
    pub book_id: i64,
    pub member_id: i64,
    pub borrow_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
}

/// Resource handle for `/borrowing`, borrowed from an [`ApiClient`].
#[derive(Debug, Clone, Copy)]
pub struct Borrowings<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn borrowing(&self) -> Borrowings<'_> {
        Borrowings { client: self }
    }
}

impl Borrowings<'_> {
    pub fn build_index(&self) -> HttpRequest {
        self.client.build_get(COLLECTION)
    }

    pub fn parse_index(&self, response: HttpResponse) -> Result<Vec<Borrowing>, ApiError> {
        self.client.parse_list(response)
    }

    pub fn build_store(&self, input: &NewBorrowing) -> Result<HttpRequest, ApiError> {
        self.client.build_post(COLLECTION, input)
    }

    pub fn parse_store(&self, response: HttpResponse) -> Result<Borrowing, ApiError> {
        self.client.parse_created(response)
    }

    pub fn build_update(&self, borrowing: &Borrowing) -> Result<HttpRequest, ApiError> {
        self.client
            .build_put(&format!("{COLLECTION}/{}", borrowing.id), borrowing)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Borrowing, ApiError> {
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
    fn dates_serialize_as_iso_strings() {
        let input = NewBorrowing {
            book_id: 3,
            member_id: 9,
            borrow_date: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            return_date: None,
        };
        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(body["borrow_date"], "2024-05-17");
        assert!(body.get("return_date").is_none());
    }

    #[test]
    fn collection_path_is_singular() {
        let c = ApiClient::new(ClientConfig::new("http://localhost:3000"));
        let req = c.borrowing().build_index();
        assert_eq!(req.url, "http://localhost:3000/borrowing");
    }

    #[test]
    fn parse_index_reads_return_date() {
        let c = ApiClient::new(ClientConfig::new("http://localhost:3000"));
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"[{"id":1,"book_id":3,"member_id":9,"borrow_date":"2024-05-17","return_date":"2024-06-01"}]"#
                .to_string(),
        };
        let borrowings = c.borrowing().parse_index(response).unwrap();
        assert_eq!(
            borrowings[0].return_date,
            Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        );
    }
}
