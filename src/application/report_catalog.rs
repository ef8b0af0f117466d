// Catalog trait for report document access
use async_trait::async_trait;

#[async_trait]
pub trait ReportCatalog: Send + Sync {
    /// Whether a panel source currently resolves to a readable document.
    /// Consulted only by the inventory endpoints, never by viewer
    /// construction or rendering.
    async fn probe(&self, source: &str) -> bool;

    /// List report documents available under the catalog root
    async fn list_documents(&self) -> anyhow::Result<Vec<String>>;
}
