//! Infrastructure services

mod vectorizer_service;

pub use vectorizer_service::VectorizerService;
