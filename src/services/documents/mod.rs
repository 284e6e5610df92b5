//! 업스트림 문서 조회

pub mod document_client;

pub use document_client::{DocumentSource, HttpDocumentClient};
