//! Server capability declarations.
//!
//! This module returns the `ServerCapabilities` struct that tells the
//! client which LSP features this server supports.

use tower_lsp::lsp_types::*;

/// Returns the server capabilities to be sent during initialization.
///
/// Declares:
/// - Full text document sync (open/change/close)
/// - Completion
/// - Hover
/// - Whole document formatting
pub fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        // Full document sync - receive the entire document on each change
        text_document_sync: Some(TextDocumentSyncCapability::Options(
            TextDocumentSyncOptions {
                open_close: Some(true),
                change: Some(TextDocumentSyncKind::FULL),
                save: Some(SaveOptions::default().into()),
                ..Default::default()
            },
        )),
        completion_provider: Some(CompletionOptions::default()),
        hover_provider: Some(HoverProviderCapability::Simple(true)),
        document_formatting_provider: Some(OneOf::Left(true)),
        ..Default::default()
    }
}
