// ==========================================
// VMQ 生产看板 - 导入编排器
// ==========================================
// 职责: 固定数据文件的整批导入
// 流程:
//   1. 并发读取损耗工作簿与库存工作簿（带超时）
//   2. 解析 + 合并为一个 WorkbookGrid
//   3. 按 RealData 配置归一化
//   4. 全部成功后一次性覆盖仓储；任何失败只写入错误信息
// 并发: 同一时刻只允许一次导入，重复调用直接拒绝
// ==========================================

use crate::domain::{CollectionCounts, DataSnapshot};
use crate::i18n;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{WorkbookParser, WorkbookSource};
use crate::importer::workbook_normalizer::{
    NormalizeReport, NormalizerProfile, WorkbookNormalizer,
};
use crate::importer::WorkbookGrid;
use crate::repository::domain_store::{DomainStore, SharedStore};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLockWriteGuard};
use std::time::{Duration, Instant};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// ImportSummary - 导入结果摘要
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub batch_id: String,
    pub counts: CollectionCounts,
    pub missing_sheets: Vec<String>,
    pub skipped_rows: usize,
    pub coercion_issues: usize,
    pub overdrawn_inventory: usize,
    pub elapsed_ms: u64,
}

impl ImportSummary {
    pub fn new(
        batch_id: String,
        counts: CollectionCounts,
        report: &NormalizeReport,
        started: Instant,
    ) -> Self {
        Self {
            batch_id,
            counts,
            missing_sheets: report.missing_sheets.clone(),
            skipped_rows: report.skipped_rows,
            coercion_issues: report.issues.len(),
            overdrawn_inventory: report.overdrawn_inventory.len(),
            elapsed_ms: started.elapsed().as_millis() as u64,
        }
    }
}

/// 导入失败时写入仓储的本地化提示
pub fn failure_message(err: &ImportError) -> String {
    match err {
        ImportError::ImportInProgress => i18n::t("import.in_progress"),
        other => i18n::t_with_args("import.failed", &[("reason", &other.to_string())]),
    }
}

/// 获取仓储写锁（锁中毒视为仓储不可用）
pub fn write_store(store: &SharedStore) -> ImportResult<RwLockWriteGuard<'_, DomainStore>> {
    store
        .write()
        .map_err(|e| ImportError::StoreUnavailable(e.to_string()))
}

// 进行中标记，离开作用域时复位
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

// ==========================================
// ImportOrchestrator
// ==========================================
pub struct ImportOrchestrator {
    source: Arc<dyn WorkbookSource>,
    parser: Arc<dyn WorkbookParser>,
    normalizer: Arc<WorkbookNormalizer>,
    losses_workbook: String,
    stock_workbook: String,
    fetch_timeout: Duration,
    in_flight: AtomicBool,
}

impl ImportOrchestrator {
    pub fn new(
        source: Arc<dyn WorkbookSource>,
        parser: Arc<dyn WorkbookParser>,
        normalizer: Arc<WorkbookNormalizer>,
        losses_workbook: impl Into<String>,
        stock_workbook: impl Into<String>,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            source,
            parser,
            normalizer,
            losses_workbook: losses_workbook.into(),
            stock_workbook: stock_workbook.into(),
            fetch_timeout,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// 导入固定数据文件并覆盖仓储
    ///
    /// # 返回
    /// - Ok(ImportSummary): 仓储已整体替换
    /// - Err: 仓储集合保持不变，error 字段为本地化提示
    #[instrument(skip(self, store), fields(batch_id))]
    pub async fn load_real_data(&self, store: &SharedStore) -> ImportResult<ImportSummary> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            let err = ImportError::ImportInProgress;
            warn!("已有导入正在进行，拒绝本次请求");
            write_store(store)?.set_error(Some(failure_message(&err)));
            return Err(err);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());
        let started = Instant::now();
        info!(
            losses = %self.losses_workbook,
            stock = %self.stock_workbook,
            "开始导入固定数据文件"
        );

        write_store(store)?.begin_loading();

        match self.read_and_normalize().await {
            Ok((snapshot, report)) => {
                let counts = snapshot.counts();
                write_store(store)?.finish_loading(snapshot);
                let summary = ImportSummary::new(batch_id, counts, &report, started);
                info!(
                    elapsed_ms = summary.elapsed_ms,
                    production = counts.production,
                    inventory = counts.inventory,
                    "导入完成"
                );
                Ok(summary)
            }
            Err(err) => {
                error!(error = %err, "导入失败，保留原有数据");
                write_store(store)?.fail_loading(failure_message(&err));
                Err(err)
            }
        }
    }

    async fn read_and_normalize(
        &self,
    ) -> ImportResult<(DataSnapshot, NormalizeReport)> {
        let (losses_bytes, stock_bytes) = self.fetch_both().await?;

        let mut grid: WorkbookGrid = self.parser.parse_bytes(&losses_bytes)?;
        grid.merge(self.parser.parse_bytes(&stock_bytes)?);

        Ok(self.normalizer.normalize(&grid, NormalizerProfile::RealData))
    }

    /// 并发读取两个工作簿，整体受超时约束
    async fn fetch_both(&self) -> ImportResult<(Vec<u8>, Vec<u8>)> {
        let fetches = futures::future::try_join(
            self.source.fetch(&self.losses_workbook),
            self.source.fetch(&self.stock_workbook),
        );

        tokio::time::timeout(self.fetch_timeout, fetches)
            .await
            .map_err(|_| ImportError::Timeout {
                seconds: self.fetch_timeout.as_secs(),
            })?
    }
}
