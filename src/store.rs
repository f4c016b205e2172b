//! Shared storage for open documents.

use std::collections::HashMap;
use std::sync::Arc;

use hcl_edit::structure::Body;
use thiserror::Error;
use tokio::sync::Mutex;
use tower_lsp::lsp_types::{Diagnostic, Url};

use crate::diagnostics;

/// Snapshot of one open document: the raw text plus its parsed tree.
///
/// Documents are immutable once stored; every change replaces the entry
/// wholesale. An in-flight request holds its own `Arc` and is unaffected
/// by concurrent replacement — it just goes stale, which is fine, as the
/// client will re-request against the new state.
#[derive(Debug)]
pub struct Document {
    pub text: String,
    pub version: i32,
    /// Parsed tree; `None` while the document has a syntax error.
    pub body: Option<Body>,
    /// The parse failure, ready for publishing.
    pub parse_error: Option<Diagnostic>,
}

impl Document {
    fn new(text: String, version: i32) -> Self {
        match hcl_edit::parser::parse_body(&text) {
            Ok(body) => Self {
                text,
                version,
                body: Some(body),
                parse_error: None,
            },
            Err(error) => {
                let diagnostic = diagnostics::parse_error_to_diagnostic(&error);
                Self {
                    text,
                    version,
                    body: None,
                    parse_error: Some(diagnostic),
                }
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// Feature requests against unopened documents are caller bugs and are
    /// reported as hard errors, unlike every other lookup miss in the
    /// server.
    #[error("document is not open: {0}")]
    NotOpen(Url),
}

/// The set of currently open documents, keyed by URI.
///
/// One mutex serializes every map operation; it is held only for the
/// insert/remove/lookup itself, never across a traversal.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: Mutex<HashMap<Url, Arc<Document>>>,
}

impl DocumentStore {
    /// Parse `text` and insert or replace the entry for `uri`, returning
    /// the freshly stored snapshot.
    pub async fn insert(&self, uri: Url, text: String, version: i32) -> Arc<Document> {
        let document = Arc::new(Document::new(text, version));
        self.documents
            .lock()
            .await
            .insert(uri, Arc::clone(&document));
        document
    }

    pub async fn remove(&self, uri: &Url) {
        self.documents.lock().await.remove(uri);
    }

    pub async fn get(&self, uri: &Url) -> Result<Arc<Document>, StoreError> {
        self.documents
            .lock()
            .await
            .get(uri)
            .cloned()
            .ok_or_else(|| StoreError::NotOpen(uri.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri() -> Url {
        Url::parse("file:///jobs/web.nomad.hcl").unwrap()
    }

    #[tokio::test]
    async fn insert_replaces_wholesale_and_old_snapshots_stay_valid() {
        let store = DocumentStore::default();
        let first = store
            .insert(uri(), "job \"a\" {\n}\n".to_string(), 1)
            .await;
        let second = store
            .insert(uri(), "job \"b\" {\n}\n".to_string(), 2)
            .await;

        // The old snapshot is untouched by the replacement.
        assert_eq!(first.version, 1);
        assert!(first.text.contains("\"a\""));

        let current = store.get(&uri()).await.unwrap();
        assert_eq!(current.version, second.version);
        assert!(current.text.contains("\"b\""));
    }

    #[tokio::test]
    async fn get_on_unopened_document_is_a_hard_error() {
        let store = DocumentStore::default();
        let result = store.get(&uri()).await;
        assert!(matches!(result, Err(StoreError::NotOpen(_))));

        store.insert(uri(), String::new(), 1).await;
        store.remove(&uri()).await;
        assert!(store.get(&uri()).await.is_err());
    }

    #[tokio::test]
    async fn syntax_errors_keep_the_text_but_not_the_tree() {
        let store = DocumentStore::default();
        let document = store
            .insert(uri(), "job \"web\" {\n".to_string(), 1)
            .await;
        assert!(document.body.is_none());
        assert!(document.parse_error.is_some());
        assert_eq!(document.text, "job \"web\" {\n");
    }
}
