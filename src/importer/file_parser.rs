// ==========================================
// 地铁列车夜间入役排班系统 - 文件解析器
// ==========================================
// 依据: Field_Mapping_v1.0.md - 夜间数据集(.csv)
// ==========================================

use crate::importer::error::ImportError;
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 夜间数据集的必需列
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "train_id",
    "fitness_ok",
    "job_card_open",
    "mileage",
    "needs_cleaning",
    "branding_need",
];

// ==========================================
// CsvParser - CSV 解析器
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 解析 CSV 为原始行映射(表头 → 单元格文本)
    ///
    /// # 规则
    /// - 表头与单元格均去除首尾空白
    /// - 完全空白的行跳过(不计入数据行号)
    /// - 必需列缺一即报错, 不进入记录级解析
    pub fn parse_to_raw_rows(
        file_path: &Path,
    ) -> Result<Vec<HashMap<String, String>>, ImportError> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        if let Some(ext) = file_path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        for required in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == required) {
                return Err(ImportError::MissingColumn(required.to_string()));
            }
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(rows)
    }
}
