// ==========================================
// 地铁列车夜间入役排班系统 - CLI 主入口
// ==========================================
// 依据: Induction_Rules_v1.0.md - 系统定位
// 职责: 调用方角色(解析参数 → 导入 → 分配 → 展示)
// 红线: 展示逻辑止步于此, 引擎不渲染任何输出
// ==========================================

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use train_induction_aps::config::PlannerConfig;
use train_induction_aps::engine::{InductionAssigner, PlanSummaryEngine};
use train_induction_aps::importer::TrainDataImporter;
use train_induction_aps::logging;

/// CLI 参数
struct CliArgs {
    csv_path: PathBuf,
    forced_service_id: Option<String>,
    max_service: Option<usize>,
    config_path: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("用法: train-induction-aps <夜间数据集.csv> [选项]");
    eprintln!();
    eprintln!("选项:");
    eprintln!("  --force <train_id>    强制指定列车入役(应急覆盖)");
    eprintln!("  --max-service <n>     入役配额(覆盖配置, 默认 15)");
    eprintln!("  --config <path>       JSON 配置文件路径");
}

fn parse_args() -> Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut csv_path = None;
    let mut forced_service_id = None;
    let mut max_service = None;
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--force" => {
                forced_service_id =
                    Some(args.next().context("--force 需要一个列车号参数")?);
            }
            "--max-service" => {
                let value = args.next().context("--max-service 需要一个数值参数")?;
                max_service = Some(
                    value
                        .parse::<usize>()
                        .with_context(|| format!("--max-service 参数无效: {}", value))?,
                );
            }
            "--config" => {
                config_path =
                    Some(PathBuf::from(args.next().context("--config 需要一个路径参数")?));
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if csv_path.is_none() && !other.starts_with('-') => {
                csv_path = Some(PathBuf::from(other));
            }
            other => bail!("无法识别的参数: {}", other),
        }
    }

    let Some(csv_path) = csv_path else {
        print_usage();
        bail!("缺少夜间数据集路径");
    };

    Ok(CliArgs {
        csv_path,
        forced_service_id,
        max_service,
        config_path,
    })
}

fn main() -> Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("地铁列车夜间入役排班系统 - 决策支持系统");
    tracing::info!("系统版本: {}", train_induction_aps::VERSION);
    tracing::info!("==================================================");

    let args = parse_args()?;

    // 配置: 文件 → 默认值, CLI 参数最终覆写
    let mut config = match &args.config_path {
        Some(path) => PlannerConfig::from_json_file(path)
            .with_context(|| format!("加载配置失败: {}", path.display()))?,
        None => PlannerConfig::default(),
    };
    if let Some(max_service) = args.max_service {
        config.max_service = max_service;
    }

    // 导入夜间数据集
    let import = TrainDataImporter::import_from_csv(&args.csv_path)
        .with_context(|| format!("导入失败: {}", args.csv_path.display()))?;

    // 覆盖列车号不命中: 不是错误, 运行照常, 仅提示
    if let Some(forced_id) = args.forced_service_id.as_deref() {
        if !PlanSummaryEngine::contains_train(&import.records, forced_id) {
            tracing::warn!(forced_id = forced_id, "覆盖列车号未命中任何记录, 本次运行不生效");
        }
    }

    // 执行分配
    let plan = InductionAssigner::assign_plan(
        &import.records,
        args.forced_service_id.as_deref(),
        config.max_service,
    );
    let summary = PlanSummaryEngine::summarize(&import.records, &plan);

    if summary.forced_overrode_safety {
        tracing::warn!(
            forced_id = plan.forced_service_id.as_deref().unwrap_or("-"),
            "应急覆盖压过了安全扣分项(适航失效/未关工单), 请人工复核"
        );
    }

    // ==========================================
    // 方案表格
    // ==========================================
    println!();
    println!("{:<12} {:<12} {:>10}  {:<8}  {}", "train_id", "assignment", "mileage", "branding", "reason");
    println!("{}", "-".repeat(72));
    for decision in &plan.decisions {
        println!(
            "{:<12} {:<12} {:>10.1}  {:<8}  {}",
            decision.train_id,
            decision.assignment.to_string(),
            decision.mileage,
            decision.branding_need.to_string(),
            decision.reason_text()
        );
    }

    // 车队级提示
    if !import.advisories.is_empty() {
        println!();
        for advisory in &import.advisories {
            println!("[!] {} ({})", advisory.message, advisory.train_ids.join(", "));
        }
    }

    // 汇总口径
    println!();
    println!(
        "共 {} 列 | Service {} | Standby {} | Maintenance {} | 配额 {}",
        summary.total,
        summary.service_count,
        summary.standby_count,
        summary.maintenance_count,
        plan.max_service
    );

    Ok(())
}
