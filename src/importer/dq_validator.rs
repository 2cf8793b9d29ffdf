// ==========================================
// 地铁列车夜间入役排班系统 - 数据质量校验器
// ==========================================
// 依据: Field_Mapping_v1.0.md - 车队级提示口径
// 职责: 批次内重复主键检测 + 车队级提示生成
// 红线: 提示仅供展示, 不阻断分配运行
// (口径外取值属于 FieldMapper 的快速失败范畴, 不在此处)
// ==========================================

use crate::domain::train::TrainRecord;
use serde::Serialize;
use std::collections::HashSet;

// ==========================================
// 车队级提示 (Fleet Advisory)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AdvisoryKind {
    FitnessInvalid,  // 存在适航证失效列车
    OpenJobCards,    // 存在未关闭工单列车
    PendingCleaning, // 存在待清洁列车
    DuplicateTrainId, // 批次内列车号重复
}

/// 车队级提示(非阻断)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetAdvisory {
    pub kind: AdvisoryKind,
    pub message: String,
    pub train_ids: Vec<String>,
}

// ==========================================
// DqValidator - 数据质量校验器
// ==========================================
pub struct DqValidator;

impl DqValidator {
    /// 生成车队级提示
    ///
    /// # 口径
    /// - 逐项提示命中列车号, 保持输入顺序
    /// - 重复列车号: 同批次内第二次及以后出现的列车号
    pub fn fleet_advisories(records: &[TrainRecord]) -> Vec<FleetAdvisory> {
        let mut advisories = Vec::new();

        let fitness_invalid: Vec<String> = records
            .iter()
            .filter(|r| !r.fitness_ok)
            .map(|r| r.train_id.clone())
            .collect();
        if !fitness_invalid.is_empty() {
            advisories.push(FleetAdvisory {
                kind: AdvisoryKind::FitnessInvalid,
                message: "Some trains have invalid fitness certificates.".to_string(),
                train_ids: fitness_invalid,
            });
        }

        let open_job_cards: Vec<String> = records
            .iter()
            .filter(|r| r.job_card_open)
            .map(|r| r.train_id.clone())
            .collect();
        if !open_job_cards.is_empty() {
            advisories.push(FleetAdvisory {
                kind: AdvisoryKind::OpenJobCards,
                message: "Some trains still have open job-cards.".to_string(),
                train_ids: open_job_cards,
            });
        }

        let pending_cleaning: Vec<String> = records
            .iter()
            .filter(|r| r.needs_cleaning)
            .map(|r| r.train_id.clone())
            .collect();
        if !pending_cleaning.is_empty() {
            advisories.push(FleetAdvisory {
                kind: AdvisoryKind::PendingCleaning,
                message: "Some trains require cleaning.".to_string(),
                train_ids: pending_cleaning,
            });
        }

        let mut seen = HashSet::new();
        let duplicates: Vec<String> = records
            .iter()
            .filter(|r| !seen.insert(r.train_id.as_str()))
            .map(|r| r.train_id.clone())
            .collect();
        if !duplicates.is_empty() {
            advisories.push(FleetAdvisory {
                kind: AdvisoryKind::DuplicateTrainId,
                message: "Duplicate train ids in this batch.".to_string(),
                train_ids: duplicates,
            });
        }

        advisories
    }
}
