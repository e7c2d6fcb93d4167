// ==========================================
// VMQ 生产看板 - 工作簿数据源实现
// ==========================================
// FsWorkbookSource:     从数据目录读取（tokio::fs）
// MemoryWorkbookSource: 内存字节（测试与上传）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::WorkbookSource;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

// ==========================================
// FsWorkbookSource
// ==========================================
#[derive(Debug, Clone)]
pub struct FsWorkbookSource {
    base_dir: PathBuf,
}

impl FsWorkbookSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

#[async_trait]
impl WorkbookSource for FsWorkbookSource {
    async fn fetch(&self, name: &str) -> ImportResult<Vec<u8>> {
        let path = self.base_dir.join(name);
        debug!(path = %path.display(), "读取工作簿");
        tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ImportError::FileNotFound(path.display().to_string()),
            _ => ImportError::SourceUnavailable {
                name: name.to_string(),
                message: e.to_string(),
            },
        })
    }
}

// ==========================================
// MemoryWorkbookSource
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbookSource {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryWorkbookSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.files.insert(name.into(), bytes);
        self
    }
}

#[async_trait]
impl WorkbookSource for MemoryWorkbookSource {
    async fn fetch(&self, name: &str) -> ImportResult<Vec<u8>> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| ImportError::SourceUnavailable {
                name: name.to_string(),
                message: "未注册的工作簿".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_source() {
        let source = MemoryWorkbookSource::new().with_file("a.xlsx", vec![1, 2, 3]);
        assert_eq!(source.fetch("a.xlsx").await.unwrap(), vec![1, 2, 3]);
        assert!(matches!(
            source.fetch("b.xlsx").await,
            Err(ImportError::SourceUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_fs_source_reads_from_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("stock.xls"), b"bytes").unwrap();

        let source = FsWorkbookSource::new(dir.path());
        assert_eq!(source.fetch("stock.xls").await.unwrap(), b"bytes".to_vec());
        assert!(matches!(
            source.fetch("missing.xls").await,
            Err(ImportError::FileNotFound(_))
        ));
    }
}
