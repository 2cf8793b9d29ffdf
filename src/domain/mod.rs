// ==========================================
// 地铁列车夜间入役排班系统 - 领域模型层
// ==========================================
// 依据: Induction_Rules_v1.0.md - 1. 输入输出契约
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含引擎逻辑,不含 I/O
// ==========================================

pub mod train;
pub mod types;

// 重导出核心类型
pub use train::{AssignmentDecision, InductionPlan, RawTrainRecord, TrainRecord};
pub use types::{Assignment, BrandingNeed};
