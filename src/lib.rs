// ==========================================
// 地铁列车夜间入役排班系统 - 核心库
// ==========================================
// 依据: Induction_Rules_v1.0.md - 系统定位
// 系统定位: 决策支持系统 (人工最终控制权)
// 红线: 规则引擎, 非优化器; 每条决策必须输出 reason
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 运行参数
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Assignment, BrandingNeed};

// 领域实体
pub use domain::{AssignmentDecision, InductionPlan, RawTrainRecord, TrainRecord};

// 引擎
pub use engine::{InductionAssigner, PlanSummary, PlanSummaryEngine, DEFAULT_MAX_SERVICE};

// 导入
pub use importer::{ImportError, ImportResult, TrainDataImporter};

// 配置
pub use config::PlannerConfig;

// ==========================================
// 系统常量
// ==========================================

/// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
