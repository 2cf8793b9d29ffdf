// ==========================================
// 地铁列车夜间入役排班系统 - 导入层
// ==========================================
// 依据: Field_Mapping_v1.0.md - 字段映射与口径
// ==========================================
// 职责: 外部表格数据 → 标准化列车记录
// 红线: 解析在边界完成一次, 引擎不再接触文本口径
// ==========================================

pub mod dq_validator;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod train_importer;

// 重导出核心类型
pub use dq_validator::{AdvisoryKind, DqValidator, FleetAdvisory};
pub use error::ImportError;
pub use field_mapper::FieldMapper;
pub use file_parser::CsvParser;
pub use train_importer::{ImportResult, TrainDataImporter};
