//! Backend struct for the Nomad Language Server.
//!
//! The Backend holds server state and implements the `LanguageServer` trait
//! from tower-lsp. It keeps open documents in the document store and drives
//! the schema-driven resolver for every feature request.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::completion;
use crate::diagnostics;
use crate::formatting;
use crate::hover;
use crate::position;
use crate::schema::SchemaMap;
use crate::store::{Document, DocumentStore, StoreError};

/// Server-side configuration, synced from the client via
/// `workspace/didChangeConfiguration` under the `nomadLs` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NomadLsConfig {
    /// Formatting configuration
    #[serde(default)]
    pub formatting: FormattingConfig,
}

/// Formatting-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingConfig {
    /// Number of spaces per indent level (default: 2)
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    /// Use tabs instead of spaces (default: false)
    #[serde(default)]
    pub use_tabs: bool,
}

fn default_indent_width() -> usize {
    2
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            use_tabs: false,
        }
    }
}

/// The Backend struct holds server state.
///
/// # State
/// - `client`: the LSP client handle for sending notifications
/// - `store`: the open documents, keyed by URI
/// - `schemas`: the schema registry, built once and shared read-only
/// - `config`: server configuration synced from the client
pub struct Backend {
    client: Client,
    store: DocumentStore,
    schemas: SchemaMap,
    config: RwLock<NomadLsConfig>,
}

impl Backend {
    /// Create a new Backend instance with the given client handle.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            store: DocumentStore::default(),
            schemas: SchemaMap::new(),
            config: RwLock::new(NomadLsConfig::default()),
        }
    }

    /// Validate a document snapshot and publish its diagnostics: the parse
    /// failure if there is one, plus the schema findings for every level of
    /// the tree.
    async fn publish_diagnostics(&self, uri: Url, document: &Document) {
        let mut diagnostics = Vec::new();
        if let Some(parse_error) = &document.parse_error {
            diagnostics.push(parse_error.clone());
        }
        if let Some(body) = &document.body {
            diagnostics.extend(
                diagnostics::collect(body, &self.schemas)
                    .iter()
                    .map(|finding| diagnostics::to_lsp_diagnostic(finding, &document.text)),
            );
        }

        log::debug!("publishing {} diagnostic(s) for {}", diagnostics.len(), uri);
        self.client
            .publish_diagnostics(uri, diagnostics, Some(document.version))
            .await;
    }
}

fn store_error(error: StoreError) -> tower_lsp::jsonrpc::Error {
    tower_lsp::jsonrpc::Error::invalid_params(error.to_string())
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            server_info: Some(ServerInfo {
                name: "nomad-ls".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
            capabilities: crate::capabilities::server_capabilities(),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        log::info!("nomad-ls initialized");
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;

        log::info!("document opened: {}", uri);

        let document = self
            .store
            .insert(
                uri.clone(),
                params.text_document.text,
                params.text_document.version,
            )
            .await;
        self.publish_diagnostics(uri, &document).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // Full document sync: the last change carries the whole content.
        if let Some(change) = params.content_changes.into_iter().last() {
            log::debug!("document changed: {}", uri);

            let document = self.store.insert(uri.clone(), change.text, version).await;
            self.publish_diagnostics(uri, &document).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        log::info!("document closed: {}", uri);

        self.store.remove(&uri).await;

        // Clear diagnostics for the closed document.
        self.client.publish_diagnostics(uri, vec![], None).await;
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        let uri = params.text_document.uri;

        log::info!("document saved: {}", uri);

        match self.store.get(&uri).await {
            Ok(document) => self.publish_diagnostics(uri, &document).await,
            Err(_) => log::warn!("saved document was not open: {}", uri),
        }
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        log::info!("configuration changed");

        if let Some(settings) = params.settings.as_object() {
            if let Some(section) = settings.get("nomadLs") {
                match serde_json::from_value::<NomadLsConfig>(section.clone()) {
                    Ok(new_config) => {
                        log::debug!("updated configuration: {:?}", new_config);
                        let mut config = self.config.write().await;
                        *config = new_config;
                    }
                    Err(e) => {
                        log::warn!("failed to parse configuration: {}", e);
                    }
                }
            }
        }
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let document = self.store.get(&uri).await.map_err(store_error)?;
        let Some(body) = &document.body else {
            // Mid-edit syntax error: nothing to offer, but not a failure.
            return Ok(None);
        };

        let offset = position::byte_offset(&document.text, position);
        let items = completion::completions(body, offset, &self.schemas);
        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let document = self.store.get(&uri).await.map_err(store_error)?;
        let Some(body) = &document.body else {
            return Ok(None);
        };

        let offset = position::byte_offset(&document.text, position);
        let Some(description) = hover::hover(body, offset, &self.schemas) else {
            return Ok(None);
        };

        Ok(Some(Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: description,
            }),
            range: None,
        }))
    }

    async fn formatting(&self, params: DocumentFormattingParams) -> Result<Option<Vec<TextEdit>>> {
        let uri = params.text_document.uri;

        log::info!("format document: {}", uri);

        let document = self.store.get(&uri).await.map_err(store_error)?;

        // The editor always provides tab_size and insert_spaces in the
        // request, so those win over the synced server configuration.
        let config = formatting::extract_format_options(&params.options);
        let _server_config = self.config.read().await.formatting.clone();

        let edits = formatting::format_document(&document.text, Some(config));

        if edits.is_empty() {
            log::debug!("no formatting changes needed for: {}", uri);
        } else {
            log::debug!("returning {} format edit(s) for: {}", edits.len(), uri);
        }
        Ok(Some(edits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_lsp::LspService;

    const JOB: &str = r#"
job "web" {
  group "api" {
    service {
      name = "api"

    }
  }
}
"#;

    fn open_params(uri: &Url, text: &str) -> DidOpenTextDocumentParams {
        DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: uri.clone(),
                language_id: "hcl".to_string(),
                version: 1,
                text: text.to_string(),
            },
        }
    }

    #[tokio::test]
    async fn completion_after_open_offers_service_content() {
        let (service, _socket) = LspService::new(Backend::new);
        let backend = service.inner();

        let uri = Url::parse("file:///jobs/web.nomad.hcl").unwrap();
        backend.did_open(open_params(&uri, JOB)).await;

        // The blank line inside the service block.
        let line = JOB[..JOB.find("name = \"api\"").unwrap()].matches('\n').count() as u32 + 1;
        let response = backend
            .completion(CompletionParams {
                text_document_position: TextDocumentPositionParams {
                    text_document: TextDocumentIdentifier { uri },
                    position: Position { line, character: 0 },
                },
                work_done_progress_params: Default::default(),
                partial_result_params: Default::default(),
                context: None,
            })
            .await
            .unwrap();

        let Some(CompletionResponse::Array(items)) = response else {
            panic!("expected completion items");
        };
        assert!(items.iter().any(|i| i.label == "check"));
        assert!(!items.iter().any(|i| i.label == "name"));
    }

    #[tokio::test]
    async fn requests_against_unopened_documents_fail() {
        let (service, _socket) = LspService::new(Backend::new);
        let backend = service.inner();

        let uri = Url::parse("file:///jobs/missing.nomad.hcl").unwrap();
        let result = backend
            .hover(HoverParams {
                text_document_position_params: TextDocumentPositionParams {
                    text_document: TextDocumentIdentifier { uri },
                    position: Position { line: 0, character: 0 },
                },
                work_done_progress_params: Default::default(),
            })
            .await;
        assert!(result.is_err());
    }
}
