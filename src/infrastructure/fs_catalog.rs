// Filesystem-backed report catalog
use crate::application::report_catalog::ReportCatalog;
use anyhow::Context;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FsReportCatalog {
    root: PathBuf,
    reports_dir: String,
}

impl FsReportCatalog {
    pub fn new(root: impl Into<PathBuf>, reports_dir: &str) -> Self {
        Self {
            root: root.into(),
            reports_dir: reports_dir.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ReportCatalog for FsReportCatalog {
    async fn probe(&self, source: &str) -> bool {
        match tokio::fs::metadata(self.root.join(source)).await {
            Ok(meta) => meta.is_file(),
            Err(_) => false,
        }
    }

    async fn list_documents(&self) -> anyhow::Result<Vec<String>> {
        let dir = self.root.join(&self.reports_dir);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            // No reports directory simply means an empty inventory
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).context(format!("Failed to read reports directory {}", dir.display()))
            }
        };

        let mut documents = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .context("Failed to read reports directory entry")?
        {
            if entry.file_type().await.map(|t| t.is_file()).unwrap_or(false) {
                let name = entry.file_name();
                documents.push(
                    Path::new(&self.reports_dir)
                        .join(&name)
                        .to_string_lossy()
                        .into_owned(),
                );
            }
        }
        documents.sort();
        tracing::debug!("Found {} report documents under {}", documents.len(), dir.display());
        Ok(documents)
    }
}
