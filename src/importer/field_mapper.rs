// ==========================================
// 地铁列车夜间入役排班系统 - 字段映射与标准化
// ==========================================
// 依据: Field_Mapping_v1.0.md - 字段口径
// 职责: 原始行 → RawTrainRecord → TrainRecord
// 红线: 布尔口径只认 {"yes","no"}(大小写不敏感),
//       口径外取值快速失败, 不做静默兜底
// ==========================================

use crate::domain::train::{RawTrainRecord, TrainRecord};
use crate::domain::types::BrandingNeed;
use crate::importer::error::ImportError;
use std::collections::HashMap;

// ==========================================
// FieldMapper - 字段映射器
// ==========================================
pub struct FieldMapper;

impl FieldMapper {
    /// 原始行映射 → RawTrainRecord 序列
    ///
    /// # 口径
    /// - row_number 从 1 起(首个数据行)
    /// - 空白单元格映射为 None
    pub fn map_raw(rows: Vec<HashMap<String, String>>) -> Vec<RawTrainRecord> {
        rows.into_iter()
            .enumerate()
            .map(|(idx, mut row)| {
                let mut take = |key: &str| row.remove(key).filter(|v| !v.is_empty());
                RawTrainRecord {
                    row_number: idx + 1,
                    train_id: take("train_id"),
                    fitness_ok: take("fitness_ok"),
                    job_card_open: take("job_card_open"),
                    mileage: take("mileage"),
                    needs_cleaning: take("needs_cleaning"),
                    branding_need: take("branding_need"),
                }
            })
            .collect()
    }

    /// RawTrainRecord → TrainRecord 标准化(逐条, 快速失败)
    ///
    /// # 错误
    /// - 主键为空 → PrimaryKeyMissing
    /// - 必填字段为空 → MissingField
    /// - 布尔字段口径外 → InvalidFlagValue
    /// - 里程非数值/为负/非有限 → InvalidMileage
    /// - 品牌需求口径外 → InvalidBrandingNeed
    pub fn normalize(raw: &RawTrainRecord) -> Result<TrainRecord, ImportError> {
        let train_id = raw
            .train_id
            .clone()
            .ok_or(ImportError::PrimaryKeyMissing(raw.row_number))?;

        let fitness_ok = Self::parse_flag(raw, &train_id, "fitness_ok", &raw.fitness_ok)?;
        let job_card_open = Self::parse_flag(raw, &train_id, "job_card_open", &raw.job_card_open)?;
        let needs_cleaning = Self::parse_flag(raw, &train_id, "needs_cleaning", &raw.needs_cleaning)?;
        let mileage = Self::parse_mileage(raw, &train_id)?;
        let branding_need = Self::parse_branding(raw, &train_id)?;

        Ok(TrainRecord {
            train_id,
            fitness_ok,
            job_card_open,
            needs_cleaning,
            mileage,
            branding_need,
        })
    }

    /// 批量标准化(首个错误即中止整批)
    pub fn normalize_all(raws: &[RawTrainRecord]) -> Result<Vec<TrainRecord>, ImportError> {
        raws.iter().map(Self::normalize).collect()
    }

    /// 布尔口径解析: {"yes","no"} 大小写不敏感
    fn parse_flag(
        raw: &RawTrainRecord,
        train_id: &str,
        field: &str,
        value: &Option<String>,
    ) -> Result<bool, ImportError> {
        let value = value.as_deref().ok_or_else(|| ImportError::MissingField {
            row: raw.row_number,
            train_id: train_id.to_string(),
            field: field.to_string(),
        })?;

        match value.to_ascii_lowercase().as_str() {
            "yes" => Ok(true),
            "no" => Ok(false),
            _ => Err(ImportError::InvalidFlagValue {
                row: raw.row_number,
                train_id: train_id.to_string(),
                field: field.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// 里程解析: 非负有限数值
    fn parse_mileage(raw: &RawTrainRecord, train_id: &str) -> Result<f64, ImportError> {
        let value = raw.mileage.as_deref().ok_or_else(|| ImportError::MissingField {
            row: raw.row_number,
            train_id: train_id.to_string(),
            field: "mileage".to_string(),
        })?;

        match value.parse::<f64>() {
            Ok(mileage) if mileage.is_finite() && mileage >= 0.0 => Ok(mileage),
            _ => Err(ImportError::InvalidMileage {
                row: raw.row_number,
                train_id: train_id.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// 品牌需求解析: {High, Low, None} 大小写不敏感
    fn parse_branding(raw: &RawTrainRecord, train_id: &str) -> Result<BrandingNeed, ImportError> {
        let value = raw
            .branding_need
            .as_deref()
            .ok_or_else(|| ImportError::MissingField {
                row: raw.row_number,
                train_id: train_id.to_string(),
                field: "branding_need".to_string(),
            })?;

        BrandingNeed::parse(value).ok_or_else(|| ImportError::InvalidBrandingNeed {
            row: raw.row_number,
            train_id: train_id.to_string(),
            value: value.to_string(),
        })
    }
}
