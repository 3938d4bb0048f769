//! In-memory backend implementing the HTTP surface the library client
//! consumes: `GET`/`POST` on each collection, `PUT`/`DELETE` on each member.
//! Ids are sequential integers from one counter shared across collections.
//! No cross-resource validation — a book may reference an author that was
//! never stored.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

pub mod models;

pub use models::{
    Author, AuthorPayload, Book, BookPayload, Borrowing, BorrowingPayload, Category,
    CategoryPayload, Member, MemberPayload,
};

/// All five collections plus the id counter.
#[derive(Default)]
pub struct Store {
    next_id: i64,
    pub authors: HashMap<i64, Author>,
    pub books: HashMap<i64, Book>,
    pub borrowings: HashMap<i64, Borrowing>,
    pub categories: HashMap<i64, Category>,
    pub members: HashMap<i64, Member>,
}

impl Store {
    fn alloc_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/authors", get(list_authors).post(create_author))
        .route("/authors/{id}", put(update_author).delete(delete_author))
        .route("/books", get(list_books).post(create_book))
        .route("/books/{id}", put(update_book).delete(delete_book))
        .route("/borrowing", get(list_borrowings).post(create_borrowing))
        .route("/borrowing/{id}", put(update_borrowing).delete(delete_borrowing))
        .route("/category", get(list_categories).post(create_category))
        .route("/category/{id}", put(update_category).delete(delete_category))
        .route("/members", get(list_members).post(create_member))
        .route("/members/{id}", put(update_member).delete(delete_member))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// --- authors ---

async fn list_authors(State(db): State<Db>) -> Json<Vec<Author>> {
    Json(db.read().await.authors.values().cloned().collect())
}

async fn create_author(
    State(db): State<Db>,
    Json(input): Json<AuthorPayload>,
) -> (StatusCode, Json<Author>) {
    let mut store = db.write().await;
    let author = Author::from_payload(store.alloc_id(), input);
    debug!(id = author.id, "author created");
    store.authors.insert(author.id, author.clone());
    (StatusCode::CREATED, Json(author))
}

async fn update_author(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<AuthorPayload>,
) -> Result<Json<Author>, StatusCode> {
    let mut store = db.write().await;
    if !store.authors.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    // The path id is authoritative; any id in the body is ignored.
    let author = Author::from_payload(id, input);
    store.authors.insert(id, author.clone());
    debug!(id, "author replaced");
    Ok(Json(author))
}

async fn delete_author(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, StatusCode> {
    db.write()
        .await
        .authors
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- books ---

async fn list_books(State(db): State<Db>) -> Json<Vec<Book>> {
    Json(db.read().await.books.values().cloned().collect())
}

async fn create_book(
    State(db): State<Db>,
    Json(input): Json<BookPayload>,
) -> (StatusCode, Json<Book>) {
    let mut store = db.write().await;
    let book = Book::from_payload(store.alloc_id(), input);
    debug!(id = book.id, "book created");
    store.books.insert(book.id, book.clone());
    (StatusCode::CREATED, Json(book))
}

async fn update_book(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<BookPayload>,
) -> Result<Json<Book>, StatusCode> {
    let mut store = db.write().await;
    if !store.books.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let book = Book::from_payload(id, input);
    store.books.insert(id, book.clone());
    debug!(id, "book replaced");
    Ok(Json(book))
}

async fn delete_book(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, StatusCode> {
    db.write()
        .await
        .books
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- borrowing ---

async fn list_borrowings(State(db): State<Db>) -> Json<Vec<Borrowing>> {
    Json(db.read().await.borrowings.values().cloned().collect())
}

async fn create_borrowing(
    State(db): State<Db>,
    Json(input): Json<BorrowingPayload>,
) -> (StatusCode, Json<Borrowing>) {
    let mut store = db.write().await;
    let borrowing = Borrowing::from_payload(store.alloc_id(), input);
    debug!(id = borrowing.id, "borrowing created");
    store.borrowings.insert(borrowing.id, borrowing.clone());
    (StatusCode::CREATED, Json(borrowing))
}

async fn update_borrowing(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<BorrowingPayload>,
) -> Result<Json<Borrowing>, StatusCode> {
    let mut store = db.write().await;
    if !store.borrowings.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let borrowing = Borrowing::from_payload(id, input);
    store.borrowings.insert(id, borrowing.clone());
    debug!(id, "borrowing replaced");
    Ok(Json(borrowing))
}

async fn delete_borrowing(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    db.write()
        .await
        .borrowings
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- category ---

async fn list_categories(State(db): State<Db>) -> Json<Vec<Category>> {
    Json(db.read().await.categories.values().cloned().collect())
}

async fn create_category(
    State(db): State<Db>,
    Json(input): Json<CategoryPayload>,
) -> (StatusCode, Json<Category>) {
    let mut store = db.write().await;
    let category = Category::from_payload(store.alloc_id(), input);
    debug!(id = category.id, "category created");
    store.categories.insert(category.id, category.clone());
    (StatusCode::CREATED, Json(category))
}

async fn update_category(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<CategoryPayload>,
) -> Result<Json<Category>, StatusCode> {
    let mut store = db.write().await;
    if !store.categories.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let category = Category::from_payload(id, input);
    store.categories.insert(id, category.clone());
    debug!(id, "category replaced");
    Ok(Json(category))
}

async fn delete_category(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    db.write()
        .await
        .categories
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- members ---

async fn list_members(State(db): State<Db>) -> Json<Vec<Member>> {
    Json(db.read().await.members.values().cloned().collect())
}

async fn create_member(
    State(db): State<Db>,
    Json(input): Json<MemberPayload>,
) -> (StatusCode, Json<Member>) {
    let mut store = db.write().await;
    let member = Member::from_payload(store.alloc_id(), input);
    debug!(id = member.id, "member created");
    store.members.insert(member.id, member.clone());
    (StatusCode::CREATED, Json(member))
}

async fn update_member(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<MemberPayload>,
) -> Result<Json<Member>, StatusCode> {
    let mut store = db.write().await;
    if !store.members.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let member = Member::from_payload(id, input);
    store.members.insert(id, member.clone());
    debug!(id, "member replaced");
    Ok(Json(member))
}

async fn delete_member(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, StatusCode> {
    db.write()
        .await
        .members
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_across_collections() {
        let mut store = Store::default();
        assert_eq!(store.alloc_id(), 1);
        assert_eq!(store.alloc_id(), 2);
        assert_eq!(store.alloc_id(), 3);
    }
}
