use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Author, Book};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_authors_empty() {
    let app = app();
    let resp = app.oneshot(get_request("/authors")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let authors: Vec<Author> = body_json(resp).await;
    assert!(authors.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_author_returns_201() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/authors", r#"{"name":"Borges"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let author: Author = body_json(resp).await;
    assert_eq!(author.name, "Borges");
    assert!(author.bio.is_none());
    assert!(author.id > 0);
}

#[tokio::test]
async fn create_member_malformed_json_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/members", r#"{"name":"No email"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- update ---

#[tokio::test]
async fn update_book_not_found() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "PUT",
            "/books/42",
            r#"{"title":"Nope","author_id":1,"category_id":1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_bad_id_returns_400() {
    let app = app();
    let resp = app
        .oneshot(json_request("PUT", "/category/not-a-number", r#"{"name":"x"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_category_not_found() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/category/42")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/books",
            r#"{"title":"Invisible Cities","author_id":1,"category_id":2}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Book = body_json(resp).await;
    assert_eq!(created.title, "Invisible Cities");
    assert!(created.isbn.is_none());
    let id = created.id;

    // list — should contain the one book
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/books"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let books: Vec<Book> = body_json(resp).await;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, id);

    // update — full replace; a stale id in the body loses to the path id
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/books/{id}"),
            r#"{"id":999,"title":"Invisible Cities","author_id":1,"category_id":2,"isbn":"978-0156453806"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Book = body_json(resp).await;
    assert_eq!(updated.id, id);
    assert_eq!(updated.isbn.as_deref(), Some("978-0156453806"));

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/books/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());

    // delete again — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/books/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete — empty
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/books"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let books: Vec<Book> = body_json(resp).await;
    assert!(books.is_empty());
}
