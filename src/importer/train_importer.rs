// ==========================================
// 地铁列车夜间入役排班系统 - 夜间数据导入引擎
// ==========================================
// 依据: Field_Mapping_v1.0.md - 导入流程
// 职责: CSV 解析 + 字段标准化 + 车队级提示 + 批次信息
// 红线: 不含 UI 逻辑; 标准化失败即整批失败(全有或全无)
// ==========================================

use crate::domain::train::TrainRecord;
use crate::importer::dq_validator::{DqValidator, FleetAdvisory};
use crate::importer::error::ImportError;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::CsvParser;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use tracing::instrument;
use uuid::Uuid;

// ==========================================
// ImportResult - 导入结果
// ==========================================
/// 单批次导入结果(记录 + 提示 + 批次口径)
#[derive(Debug, Clone, Serialize)]
pub struct ImportResult {
    pub batch_id: String,
    pub imported_at: DateTime<Utc>,
    pub total_rows: usize,
    pub records: Vec<TrainRecord>,
    pub advisories: Vec<FleetAdvisory>,
}

// ==========================================
// TrainDataImporter - 夜间数据导入引擎
// ==========================================
pub struct TrainDataImporter;

impl TrainDataImporter {
    /// 从 CSV 文件导入夜间数据集(主入口)
    ///
    /// # 流程
    /// 1. 解析 CSV → 原始行映射
    /// 2. 字段映射 → RawTrainRecord
    /// 3. 标准化 → TrainRecord(快速失败)
    /// 4. 车队级提示生成(非阻断)
    ///
    /// # 返回
    /// - ImportResult: 标准化记录 + 提示 + 批次信息
    #[instrument(fields(file = %file_path.display()))]
    pub fn import_from_csv(file_path: &Path) -> Result<ImportResult, ImportError> {
        let batch_id = Uuid::new_v4().to_string();

        let rows = CsvParser::parse_to_raw_rows(file_path)?;
        let total_rows = rows.len();

        let raws = FieldMapper::map_raw(rows);
        let records = FieldMapper::normalize_all(&raws)?;

        let advisories = DqValidator::fleet_advisories(&records);
        for advisory in &advisories {
            tracing::warn!(
                kind = ?advisory.kind,
                affected = advisory.train_ids.len(),
                "{}",
                advisory.message
            );
        }

        tracing::info!(
            batch_id = %batch_id,
            total_rows = total_rows,
            records = records.len(),
            advisories = advisories.len(),
            "夜间数据导入完成"
        );

        Ok(ImportResult {
            batch_id,
            imported_at: Utc::now(),
            total_rows,
            records,
            advisories,
        })
    }
}
