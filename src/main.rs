// ==========================================
// VMQ 生产看板 - 命令行入口
// ==========================================
// 用法:
//   vmq-dashboard [--config <file>] [--export <file>] [--upload <file>] [--json-log]
// 流程: 初始化日志 → 加载配置 → 装配 AppState → 导入 → 输出看板指标
// ==========================================

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use vmq_dashboard::config::{ConfigManager, ImportConfigReader};
use vmq_dashboard::logging::{self, LogFormat};
use vmq_dashboard::{i18n, AppState, APP_NAME, VERSION};

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    export: Option<PathBuf>,
    upload: Option<PathBuf>,
    json_log: bool,
}

fn parse_args() -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                parsed.config = Some(args.next().context("--config 需要文件路径")?.into())
            }
            "--export" => {
                parsed.export = Some(args.next().context("--export 需要文件路径")?.into())
            }
            "--upload" => {
                parsed.upload = Some(args.next().context("--upload 需要文件路径")?.into())
            }
            "--json-log" => parsed.json_log = true,
            other => bail!("未知参数: {}", other),
        }
    }
    Ok(parsed)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = parse_args()?;

    logging::init(if args.json_log {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    });

    tracing::info!("==================================================");
    tracing::info!("{} {}", APP_NAME, VERSION);
    tracing::info!("==================================================");

    let config = ConfigManager::load(args.config.as_deref()).context("配置加载失败")?;
    i18n::set_locale(&config.get_locale().await?);

    let state = AppState::new(&config).await.context("AppState 初始化失败")?;

    // 上传文件优先；否则导入固定数据文件
    let summary = match &args.upload {
        Some(path) => state.import_api.import_file(path).await,
        None => state.import_api.load_real_data().await,
    };
    match summary {
        Ok(summary) => {
            tracing::info!(batch_id = %summary.batch_id, "导入成功");
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Err(e) => {
            // 导入失败不退出: 仍按空数据输出兜底指标
            tracing::error!(error = %e, "导入失败");
        }
    }

    let kpis = state.dashboard_api.get_kpis()?;
    println!("{}", serde_json::to_string_pretty(&kpis)?);

    if let Some(path) = &args.export {
        state
            .import_api
            .export_to_path(path)
            .with_context(|| format!("导出失败: {}", path.display()))?;
        tracing::info!(path = %path.display(), "已导出工作簿");
    }

    Ok(())
}
