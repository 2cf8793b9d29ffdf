// ==========================================
// 地铁列车夜间入役排班系统 - 配置层
// ==========================================
// 依据: Induction_Rules_v1.0.md - 3. 配置项
// ==========================================
// 职责: 运行参数配置(JSON 文件覆写默认值)
// ==========================================

use crate::engine::assigner::DEFAULT_MAX_SERVICE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}")]
    FileReadError(String),

    #[error("配置文件解析失败: {0}")]
    ParseError(String),
}

// ==========================================
// PlannerConfig - 排班运行配置
// ==========================================
/// 排班运行配置
///
/// # 字段
/// - max_service: 夜间入役配额(默认 15; 0 表示配额通道不放行)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub max_service: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_service: DEFAULT_MAX_SERVICE,
        }
    }
}

impl PlannerConfig {
    /// 从 JSON 文件加载配置(缺省字段回落默认值)
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
