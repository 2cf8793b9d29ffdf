// ==========================================
// 地铁列车夜间入役排班系统 - 引擎层
// ==========================================
// 依据: Induction_Rules_v1.0.md - 2. 规则序与配额
// ==========================================
// 职责: 实现业务规则引擎
// 红线: 所有规则必须输出 reason
// ==========================================

pub mod assigner;
pub mod plan_summary;

// 重导出核心引擎
pub use assigner::{InductionAssigner, DEFAULT_MAX_SERVICE};
pub use plan_summary::{PlanSummary, PlanSummaryEngine};
