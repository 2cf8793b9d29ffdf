// ==========================================
// 地铁列车夜间入役排班系统 - 方案摘要引擎
// ==========================================
// 依据: Induction_Rules_v1.0.md - 4. 方案摘要口径
// ==========================================
// 职责: 从决策序列汇总分布与里程口径, 供上游表格/图表展示
// 红线: 无状态引擎, 所有方法都是纯函数, 不改写方案
// ==========================================

use crate::domain::train::{InductionPlan, TrainRecord};
use crate::domain::types::Assignment;
use crate::engine::assigner::REASON_FORCED;
use serde::Serialize;

// ==========================================
// PlanSummary - 方案摘要
// ==========================================
/// 单次运行的汇总口径
///
/// # 口径
/// - *_count: 三态分布(饼图口径)
/// - *_mileage_total: 按分配状态累计里程(柱图口径)
/// - forced_id_matched: 覆盖列车号是否命中记录(未命中时调用方应提示)
/// - forced_overrode_safety: 覆盖是否压过了安全扣分项(适航失效/未关工单)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub total: usize,
    pub service_count: usize,
    pub standby_count: usize,
    pub maintenance_count: usize,
    pub service_mileage_total: f64,
    pub standby_mileage_total: f64,
    pub maintenance_mileage_total: f64,
    pub forced_id_matched: bool,
    pub forced_overrode_safety: bool,
}

// ==========================================
// PlanSummaryEngine - 方案摘要引擎
// ==========================================
pub struct PlanSummaryEngine;

impl PlanSummaryEngine {
    /// 生成方案摘要
    ///
    /// # 参数
    /// - records: 本次运行的标准化输入记录(用于回查覆盖车的安全扣分项)
    /// - plan: 分配引擎输出的方案
    pub fn summarize(records: &[TrainRecord], plan: &InductionPlan) -> PlanSummary {
        let mut summary = PlanSummary {
            total: plan.decisions.len(),
            service_count: 0,
            standby_count: 0,
            maintenance_count: 0,
            service_mileage_total: 0.0,
            standby_mileage_total: 0.0,
            maintenance_mileage_total: 0.0,
            forced_id_matched: false,
            forced_overrode_safety: false,
        };

        for decision in &plan.decisions {
            match decision.assignment {
                Assignment::Service => {
                    summary.service_count += 1;
                    summary.service_mileage_total += decision.mileage;
                }
                Assignment::Standby => {
                    summary.standby_count += 1;
                    summary.standby_mileage_total += decision.mileage;
                }
                Assignment::Maintenance => {
                    summary.maintenance_count += 1;
                    summary.maintenance_mileage_total += decision.mileage;
                }
            }

            if decision.reasons.iter().any(|r| r == REASON_FORCED) {
                summary.forced_id_matched = true;
            }
        }

        if summary.forced_id_matched {
            if let Some(forced_id) = plan.forced_service_id.as_deref() {
                summary.forced_overrode_safety = records
                    .iter()
                    .filter(|r| r.train_id == forced_id)
                    .any(|r| !r.fitness_ok || r.job_card_open);
            }
        }

        summary
    }

    /// 覆盖列车号是否存在于记录集中
    ///
    /// 未命中不是错误(运行照常), 但调用方展示时应独立提示
    pub fn contains_train(records: &[TrainRecord], train_id: &str) -> bool {
        records.iter().any(|r| r.train_id == train_id)
    }
}
