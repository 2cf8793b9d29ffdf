// ==========================================
// 地铁列车夜间入役排班系统 - 入役分配引擎
// ==========================================
// 依据: Induction_Rules_v1.0.md - 2. 规则序与配额
// 职责: 按固定优先级规则逐车分配 Service/Standby/Maintenance
// 红线: 无状态、无副作用、确定性; 每条决策必须输出 reason
// 红线: 不是优化器, 不做全局搜索, 首个命中规则即生效
// ==========================================

use crate::domain::train::{AssignmentDecision, InductionPlan, TrainRecord};
use crate::domain::types::Assignment;
use chrono::Utc;
use tracing::instrument;

/// 默认夜间入役配额(单次运行最多入役列车数)
pub const DEFAULT_MAX_SERVICE: usize = 15;

// ==========================================
// 决策理由文本(对外展示契约, 不可随意改动)
// ==========================================
pub const REASON_FORCED: &str = "Forced into Service";
pub const REASON_FITNESS_INVALID: &str = "Fitness Certificate invalid";
pub const REASON_OPEN_JOB_CARD: &str = "Open Job Card";
pub const REASON_PENDING_CLEANING: &str = "Pending Cleaning";
pub const REASON_MEETS_CONDITIONS: &str = "Meets all conditions";
pub const REASON_QUOTA_FILLED: &str = "Service quota filled";

// ==========================================
// InductionAssigner - 入役分配引擎
// ==========================================
// 红线: 纯函数工具类, 唯一的跨记录状态是折叠中显式
//       传递的已入役计数累加器
pub struct InductionAssigner;

impl InductionAssigner {
    /// 对一批列车记录执行入役分配(主入口)
    ///
    /// # 规则 (Induction_Rules 2.1, 逐车按输入顺序评估, 首个命中生效)
    /// 1. train_id 命中 forced_service_id → Service("Forced into Service")
    ///    人工覆盖具有绝对优先级: 不占配额、不受安全规则拦截
    /// 2. fitness_ok 为否 → Maintenance("Fitness Certificate invalid")
    /// 3. job_card_open 为是 → Maintenance("Open Job Card")
    /// 4. needs_cleaning 为是 → Standby("Pending Cleaning")
    /// 5. 已入役数 < max_service → Service("Meets all conditions"), 计数 +1
    /// 6. 否则 → Standby("Service quota filled")
    ///
    /// # 参数
    /// - records: 标准化列车记录(保序)
    /// - forced_service_id: 人工强制入役列车号(可为空; 不命中任何记录时无效果)
    /// - max_service: 入役配额(0 表示配额通道不放行任何列车)
    ///
    /// # 返回
    /// 与输入等长、同序的决策序列; mileage/branding_need 原样透传
    ///
    /// # 保证
    /// - 确定性: 相同输入必得相同输出
    /// - 配额上界: Service 数 ≤ max_service + (覆盖命中 ? 1 : 0)
    /// - 末位配额名额按输入顺序先到先得, 无二级排序
    #[instrument(skip(records), fields(
        records_count = records.len(),
        forced = forced_service_id.unwrap_or("-"),
        max_service = max_service
    ))]
    pub fn assign(
        records: &[TrainRecord],
        forced_service_id: Option<&str>,
        max_service: usize,
    ) -> Vec<AssignmentDecision> {
        let (decisions, service_count) = records.iter().fold(
            (Vec::with_capacity(records.len()), 0usize),
            |(mut decisions, service_count), record| {
                let (assignment, reason, next_count) =
                    Self::classify(record, forced_service_id, max_service, service_count);

                decisions.push(AssignmentDecision {
                    train_id: record.train_id.clone(),
                    assignment,
                    reasons: vec![reason.to_string()],
                    mileage: record.mileage,
                    branding_need: record.branding_need,
                });

                (decisions, next_count)
            },
        );

        tracing::info!(
            service_count = service_count,
            decisions = decisions.len(),
            "入役分配完成"
        );

        decisions
    }

    /// 执行分配并封装为完整方案(决策序列 + 运行口径)
    pub fn assign_plan(
        records: &[TrainRecord],
        forced_service_id: Option<&str>,
        max_service: usize,
    ) -> InductionPlan {
        InductionPlan {
            decisions: Self::assign(records, forced_service_id, max_service),
            forced_service_id: forced_service_id.map(str::to_string),
            max_service,
            generated_at: Utc::now(),
        }
    }

    /// 单列车规则判定(纯函数)
    ///
    /// # 返回
    /// (分配状态, 命中理由, 判定后的已入役计数)
    ///
    /// 人工覆盖不递增计数: 覆盖列车不挤占其余列车的配额名额
    fn classify(
        record: &TrainRecord,
        forced_service_id: Option<&str>,
        max_service: usize,
        service_count: usize,
    ) -> (Assignment, &'static str, usize) {
        if forced_service_id == Some(record.train_id.as_str()) {
            (Assignment::Service, REASON_FORCED, service_count)
        } else if !record.fitness_ok {
            (Assignment::Maintenance, REASON_FITNESS_INVALID, service_count)
        } else if record.job_card_open {
            (Assignment::Maintenance, REASON_OPEN_JOB_CARD, service_count)
        } else if record.needs_cleaning {
            (Assignment::Standby, REASON_PENDING_CLEANING, service_count)
        } else if service_count < max_service {
            (Assignment::Service, REASON_MEETS_CONDITIONS, service_count + 1)
        } else {
            (Assignment::Standby, REASON_QUOTA_FILLED, service_count)
        }
    }
}
