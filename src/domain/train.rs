// ==========================================
// 地铁列车夜间入役排班系统 - 列车领域实体
// ==========================================
// 依据: Field_Mapping_v1.0.md - 夜间数据集字段
// 依据: Induction_Rules_v1.0.md - 1. 输入输出契约
// ==========================================
// 职责: 定义原始记录、标准化记录、分配决策
// 红线: 布尔口径在边界解析一次, 引擎只接受标准化记录
// ==========================================

use crate::domain::types::{Assignment, BrandingNeed};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// RawTrainRecord - 原始列车记录
// ==========================================
/// CSV 解析直出的原始记录,字段保持文本形态
///
/// # 口径
/// - row_number: 数据区行号(首个数据行为 1, 用于报错定位)
/// - 空白单元格映射为 None
#[derive(Debug, Clone, Default)]
pub struct RawTrainRecord {
    pub row_number: usize,
    pub train_id: Option<String>,
    pub fitness_ok: Option<String>,
    pub job_card_open: Option<String>,
    pub mileage: Option<String>,
    pub needs_cleaning: Option<String>,
    pub branding_need: Option<String>,
}

// ==========================================
// TrainRecord - 标准化列车记录
// ==========================================
/// 边界解析后的标准化记录,引擎唯一接受的输入形态
///
/// # 不变式
/// - 三个布尔字段已由 {"yes","no"} 文本口径解析完成
/// - mileage 有限且非负
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainRecord {
    pub train_id: String,
    pub fitness_ok: bool,      // 适航(安全适用性)证书是否有效
    pub job_card_open: bool,   // 是否存在未关闭工单
    pub needs_cleaning: bool,  // 是否待清洁
    pub mileage: f64,          // 累计运行里程(透传)
    pub branding_need: BrandingNeed, // 品牌曝光需求(透传)
}

// ==========================================
// AssignmentDecision - 分配决策
// ==========================================
/// 单列车的分配决策,与输入记录一一对应、保序
///
/// # 红线
/// - 每条决策必须携带 reason(可解释性要求)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentDecision {
    pub train_id: String,
    pub assignment: Assignment,
    pub reasons: Vec<String>,
    pub mileage: f64,
    pub branding_need: BrandingNeed,
}

impl AssignmentDecision {
    /// 拼接展示用 reason 文本
    ///
    /// 当前规则序下每列车恰好命中一条 reason,
    /// 模型层面保留多条的能力(逗号拼接)
    pub fn reason_text(&self) -> String {
        self.reasons.join(", ")
    }
}

// ==========================================
// InductionPlan - 入役排班方案
// ==========================================
/// 单次分配运行的完整输出(决策序列 + 运行口径)
///
/// # 生命周期
/// - 仅存在于单次调用, 不跨运行持久化
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InductionPlan {
    pub decisions: Vec<AssignmentDecision>,
    pub forced_service_id: Option<String>,
    pub max_service: usize,
    pub generated_at: DateTime<Utc>,
}
