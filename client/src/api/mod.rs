//! Resource client modules, one per managed collection.
//!
//! Each module owns its record types and a borrowed handle exposing the four
//! operations every collection supports: `index` (GET the collection),
//! `store` (POST a draft), `update` (PUT the full record at its id) and
//! `destroy` (DELETE by id). Handles are obtained from
//! [`ApiClient`](crate::ApiClient) accessors and delegate to the shared
//! verb builders; no module shapes responses or validates beyond serde.

pub mod authors;
pub mod books;
pub mod borrowing;
pub mod category;
pub mod members;
