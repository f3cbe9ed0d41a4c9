//! Product catalog service - CRUD over product records. Independent of the
//! order and stock services.

mod http;
mod record;
mod repository;
mod service;

pub use http::router;
pub use record::{ProductRecord, ProductRequest};
pub use repository::ProductRepository;
pub use service::{ProductError, ProductService};
