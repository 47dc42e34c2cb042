// ==========================================
// 装箱排产系统 - 命令行入口
// ==========================================
// 用法:
//   pack-planner <scenario.json> [items.csv]
//
// 流程: 加载场景 → 合并配置 → 执行一轮贪心装箱 → 输出报表 JSON (stdout)
// ==========================================

use anyhow::{bail, Context};
use pack_planner::importer::{CsvItemParser, ScenarioParser};
use pack_planner::{logging, PackError};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", pack_planner::APP_NAME);
    tracing::info!("系统版本: {}", pack_planner::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let scenario_path = match args.next() {
        Some(p) => PathBuf::from(p),
        None => bail!("用法: pack-planner <scenario.json> [items.csv]"),
    };
    let items_path = args.next().map(PathBuf::from);

    // 1. 读取场景
    let mut scenario = ScenarioParser
        .parse_file(&scenario_path)
        .with_context(|| format!("无法读取场景文件: {}", scenario_path.display()))?;

    if let Some(path) = items_path {
        let extra = CsvItemParser
            .parse_file(&path)
            .with_context(|| format!("无法读取物品清单: {}", path.display()))?;
        tracing::info!(count = extra.len(), "追加 CSV 物品");
        scenario.items.extend(extra);
    }

    // 2. 合并配置: 场景配置 → 环境变量覆写
    let mut config = scenario.effective_config();
    config.apply_env_overrides().context("环境变量配置无效")?;
    tracing::info!(
        duplicate_policy = %config.duplicate_policy,
        oversize_check = %config.oversize_check,
        "规划器配置"
    );

    // 3. 构建规划器
    let outcome = scenario.load(config);
    for rejection in &outcome.rejections {
        tracing::warn!(
            subject = ?rejection.subject,
            label = %rejection.label,
            reason = %rejection.reason,
            "拒收"
        );
    }
    let mut planner = outcome.planner;

    // 4. 执行装箱（部分失败不视为进程错误）
    match planner.run_greedy_pass() {
        Ok(summary) => {
            tracing::info!(pass_id = %summary.pass_id, placed = summary.placed_count(), "全部装箱完成");
        }
        Err(PackError::PartialPackingFailure { unplaced, placements }) => {
            let names: Vec<String> = unplaced.iter().map(|i| i.to_string()).collect();
            tracing::warn!(
                placed = placements.len(),
                unplaced = ?names,
                "部分物品未能装箱，已退回队列"
            );
        }
        Err(PackError::NoContainersAvailable) => {
            tracing::warn!("场景中没有可用的箱子");
        }
        Err(other) => return Err(other.into()),
    }

    // 5. 输出报表
    let report = planner.report();
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
