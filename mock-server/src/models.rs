//! Record and payload types served by the mock backend.
//!
//! Defined independently from the client crate so the two can drift — the
//! client's integration tests are what catch a mismatch. Payload types carry
//! no id: the server assigns ids on POST and takes the path id on PUT,
//! ignoring any id a full-record body may contain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
}

#[derive(Deserialize)]
pub struct AuthorPayload {
    pub name: String,
    pub bio: Option<String>,
}

impl Author {
    pub fn from_payload(id: i64, p: AuthorPayload) -> Self {
        Self {
            id,
            name: p.name,
            bio: p.bio,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author_id: i64,
    pub category_id: i64,
    pub isbn: Option<String>,
}

#[derive(Deserialize)]
pub struct BookPayload {
    pub title: String,
    pub author_id: i64,
    pub category_id: i64,
    pub isbn: Option<String>,
}

impl Book {
    pub fn from_payload(id: i64, p: BookPayload) -> Self {
        Self {
            id,
            title: p.title,
            author_id: p.author_id,
            category_id: p.category_id,
            isbn: p.isbn,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Borrowing {
    pub id: i64,
    pub book_id: i64,
    pub member_id: i64,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct BorrowingPayload {
    pub book_id: i64,
    pub member_id: i64,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl Borrowing {
    pub fn from_payload(id: i64, p: BorrowingPayload) -> Self {
        Self {
            id,
            book_id: p.book_id,
            member_id: p.member_id,
            borrow_date: p.borrow_date,
            return_date: p.return_date,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: Option<String>,
}

impl Category {
    pub fn from_payload(id: i64, p: CategoryPayload) -> Self {
        Self {
            id,
            name: p.name,
            description: p.description,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct MemberPayload {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl Member {
    pub fn from_payload(id: i64, p: MemberPayload) -> Self {
        Self {
            id,
            name: p.name,
            email: p.email,
            phone: p.phone,
        }
    }
}
