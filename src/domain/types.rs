// ==========================================
// 地铁列车夜间入役排班系统 - 领域类型定义
// ==========================================
// 依据: Induction_Rules_v1.0.md - 0.1 三态分配体系
// 依据: Field_Mapping_v1.0.md - branding_need 口径
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 分配状态 (Assignment)
// ==========================================
// 红线: 三态互斥,每列车当晚有且只有一个状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Assignment {
    Service,     // 入役运营
    Standby,     // 备用待命
    Maintenance, // 检修停运
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assignment::Service => write!(f, "Service"),
            Assignment::Standby => write!(f, "Standby"),
            Assignment::Maintenance => write!(f, "Maintenance"),
        }
    }
}

// ==========================================
// 品牌曝光需求 (Branding Need)
// ==========================================
// 依据: Field_Mapping_v1.0.md - 广告合同字段
// 红线: 仅透传用于下游报表,不参与分配规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrandingNeed {
    High, // 高曝光合同
    Low,  // 普通合同
    None, // 无合同
}

impl BrandingNeed {
    /// 从文本值解析（大小写不敏感）
    ///
    /// # 规则
    /// - "high"/"low"/"none" → 对应枚举值
    /// - 其他 → None（无法识别,由调用方决定是否报错）
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "high" => Some(BrandingNeed::High),
            "low" => Some(BrandingNeed::Low),
            "none" => Some(BrandingNeed::None),
            _ => Option::None,
        }
    }
}

impl fmt::Display for BrandingNeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrandingNeed::High => write!(f, "High"),
            BrandingNeed::Low => write!(f, "Low"),
            BrandingNeed::None => write!(f, "None"),
        }
    }
}
