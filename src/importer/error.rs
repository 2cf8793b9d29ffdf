// ==========================================
// 地铁列车夜间入役排班系统 - 导入模块错误类型
// ==========================================
// 依据: Rust 错误处理最佳实践
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
///
/// 红线: 记录级错误必须带行号与字段定位, 整批次全有或全无
/// (后序列车的配额判定依赖前序状态, 不允许半成品结果)
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 表头/列错误 =====
    #[error("必需列缺失: {0}")]
    MissingColumn(String),

    // ===== 记录级错误 =====
    #[error("主键缺失 (行 {0}): train_id 为空")]
    PrimaryKeyMissing(usize),

    #[error("必填字段缺失 (行 {row}, 列车 {train_id}): {field} 为空")]
    MissingField {
        row: usize,
        train_id: String,
        field: String,
    },

    #[error("布尔口径错误 (行 {row}, 列车 {train_id}, 字段 {field}): 期望 yes/no，实际 \"{value}\"")]
    InvalidFlagValue {
        row: usize,
        train_id: String,
        field: String,
        value: String,
    },

    #[error("里程值错误 (行 {row}, 列车 {train_id}): 期望非负数值，实际 \"{value}\"")]
    InvalidMileage {
        row: usize,
        train_id: String,
        value: String,
    },

    #[error("品牌需求口径错误 (行 {row}, 列车 {train_id}): 期望 High/Low/None，实际 \"{value}\"")]
    InvalidBrandingNeed {
        row: usize,
        train_id: String,
        value: String,
    },
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> Self {
        ImportError::FileReadError(e.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::CsvParseError(e.to_string())
    }
}
