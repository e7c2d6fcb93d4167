// ==========================================
// VMQ 生产看板 - 导入导出 API
// ==========================================
// 职责: 固定数据文件导入 / 手工上传导入 / 工作簿导出
// 约定: 任何导入失败只写 error，不动已有集合
// ==========================================

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::clock::SharedClock;
use crate::domain::DataSnapshot;
use crate::engine::import_orchestrator::{write_store, ImportOrchestrator, ImportSummary};
use crate::exporter::{ExportedWorkbook, WorkbookExporter};
use crate::i18n;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::check_extension;
use crate::importer::importer_trait::WorkbookParser;
use crate::importer::workbook_normalizer::{
    NormalizeReport, NormalizerProfile, WorkbookNormalizer,
};
use crate::repository::domain_store::SharedStore;

/// 默认导出文件名前缀
pub const DEFAULT_EXPORT_BASE: &str = "VMQ_export";

// ==========================================
// ImportApi - 导入导出 API
// ==========================================
pub struct ImportApi {
    store: SharedStore,
    orchestrator: Arc<ImportOrchestrator>,
    parser: Arc<dyn WorkbookParser>,
    normalizer: Arc<WorkbookNormalizer>,
    exporter: WorkbookExporter,
    clock: SharedClock,
}

impl ImportApi {
    pub fn new(
        store: SharedStore,
        orchestrator: Arc<ImportOrchestrator>,
        parser: Arc<dyn WorkbookParser>,
        normalizer: Arc<WorkbookNormalizer>,
        clock: SharedClock,
    ) -> Self {
        Self {
            store,
            orchestrator,
            parser,
            normalizer,
            exporter: WorkbookExporter::new(),
            clock,
        }
    }

    // ==========================================
    // 导入
    // ==========================================

    /// 导入固定数据文件（损耗工作簿 + 库存工作簿）
    pub async fn load_real_data(&self) -> ApiResult<ImportSummary> {
        Ok(self.orchestrator.load_real_data(&self.store).await?)
    }

    /// 导入用户上传的工作簿（读取全部九张工作表）
    ///
    /// # 参数
    /// - file_name: 原始文件名（用于扩展名校验与提示）
    /// - bytes: 文件内容
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub fn import_uploaded_file(&self, file_name: &str, bytes: &[u8]) -> ApiResult<ImportSummary> {
        let started = Instant::now();

        match self.parse_upload(file_name, bytes) {
            Ok((snapshot, report)) => {
                let counts = snapshot.counts();
                write_store(&self.store)?.set_all_data(snapshot);
                let summary =
                    ImportSummary::new(Uuid::new_v4().to_string(), counts, &report, started);
                info!(
                    file_name = file_name,
                    elapsed_ms = summary.elapsed_ms,
                    "上传文件导入完成"
                );
                Ok(summary)
            }
            Err(err) => {
                warn!(file_name = file_name, error = %err, "上传文件导入失败");
                let message = i18n::t_with_args(
                    "import.upload_failed",
                    &[("file", file_name), ("reason", &err.to_string())],
                );
                write_store(&self.store)?.set_error(Some(message));
                Err(ApiError::from(err))
            }
        }
    }

    /// 从磁盘路径导入（命令行与测试使用）
    pub async fn import_file(&self, path: &Path) -> ApiResult<ImportSummary> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            ApiError::ImportFailed(format!("{}: {}", path.display(), e))
        })?;
        self.import_uploaded_file(&file_name, &bytes)
    }

    fn parse_upload(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> ImportResult<(DataSnapshot, NormalizeReport)> {
        check_extension(file_name)?;
        let grid = self.parser.parse_bytes(bytes)?;
        Ok(self.normalizer.normalize(&grid, NormalizerProfile::Upload))
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 导出当前全部数据
    ///
    /// # 返回
    /// - ExportedWorkbook: 文件名为 <base>_<YYYY-MM-DD>.xlsx
    pub fn export_workbook(&self, base_name: Option<&str>) -> ApiResult<ExportedWorkbook> {
        let snapshot = self.current_snapshot()?;
        let today = self.clock.now().date();
        let exported = self.exporter.export(
            &snapshot,
            base_name.unwrap_or(DEFAULT_EXPORT_BASE),
            today,
        )?;
        info!(
            file_name = %exported.file_name,
            sheets = exported.sheets.len(),
            "工作簿导出完成"
        );
        Ok(exported)
    }

    /// 导出到指定路径
    pub fn export_to_path(&self, path: &Path) -> ApiResult<()> {
        let snapshot = self.current_snapshot()?;
        self.exporter.export_to_path(&snapshot, path)?;
        Ok(())
    }

    fn current_snapshot(&self) -> ApiResult<DataSnapshot> {
        let store = self
            .store
            .read()
            .map_err(|e| ApiError::StoreError(e.to_string()))?;
        Ok(store.snapshot())
    }
}
