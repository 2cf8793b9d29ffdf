// ==========================================
// 地铁列车夜间入役排班系统 - 分配引擎集成测试
// ==========================================
// 依据: Induction_Rules_v1.0.md - 2. 规则序与配额
// 覆盖: 保序等长 / 配额上界 / 规则优先级 / 覆盖至上 / 确定性 / 末位名额
// ==========================================

use train_induction_aps::domain::types::{Assignment, BrandingNeed};
use train_induction_aps::domain::TrainRecord;
use train_induction_aps::engine::{InductionAssigner, PlanSummaryEngine, DEFAULT_MAX_SERVICE};

// ==========================================
// 辅助函数: 构造测试记录
// ==========================================

fn record(
    train_id: &str,
    fitness_ok: bool,
    job_card_open: bool,
    needs_cleaning: bool,
    mileage: f64,
    branding_need: BrandingNeed,
) -> TrainRecord {
    TrainRecord {
        train_id: train_id.to_string(),
        fitness_ok,
        job_card_open,
        needs_cleaning,
        mileage,
        branding_need,
    }
}

fn eligible(train_id: &str, mileage: f64) -> TrainRecord {
    record(train_id, true, false, false, mileage, BrandingNeed::None)
}

/// 混合车队: 可入役 / 适航失效 / 未关工单 / 待清洁
fn mixed_fleet() -> Vec<TrainRecord> {
    vec![
        record("T1", true, false, false, 100.0, BrandingNeed::High),
        record("T2", false, false, false, 50.0, BrandingNeed::Low),
        record("T3", true, true, false, 50.0, BrandingNeed::None),
        record("T4", true, false, true, 50.0, BrandingNeed::None),
        record("T5", true, false, false, 75.0, BrandingNeed::Low),
    ]
}

// ==========================================
// 测试 1: 保序与等长
// ==========================================

#[test]
fn test_output_matches_input_order_and_length() {
    let records = mixed_fleet();
    let decisions = InductionAssigner::assign(&records, None, DEFAULT_MAX_SERVICE);

    assert_eq!(decisions.len(), records.len());
    for (i, decision) in decisions.iter().enumerate() {
        assert_eq!(decision.train_id, records[i].train_id);
        assert_eq!(decision.mileage, records[i].mileage);
        assert_eq!(decision.branding_need, records[i].branding_need);
    }
}

// ==========================================
// 测试 2: 配额上界
// ==========================================

#[test]
fn test_service_count_never_exceeds_quota() {
    let records: Vec<TrainRecord> = (0..30).map(|i| eligible(&format!("T{i}"), 10.0)).collect();

    for quota in [0usize, 1, 5, 15, 40] {
        let decisions = InductionAssigner::assign(&records, None, quota);
        let service_count = decisions
            .iter()
            .filter(|d| d.assignment == Assignment::Service)
            .count();
        assert!(service_count <= quota, "quota={} 被突破: {}", quota, service_count);
        assert_eq!(service_count, quota.min(records.len()));
    }
}

#[test]
fn test_forced_override_may_exceed_quota_by_one() {
    // 16 列可入役 + 覆盖 1 列待清洁车: Service 总数 = 配额 15 + 覆盖 1
    let mut records: Vec<TrainRecord> =
        (0..16).map(|i| eligible(&format!("T{i}"), 10.0)).collect();
    records.push(record("X", true, false, true, 10.0, BrandingNeed::None));

    let decisions = InductionAssigner::assign(&records, Some("X"), DEFAULT_MAX_SERVICE);
    let service_count = decisions
        .iter()
        .filter(|d| d.assignment == Assignment::Service)
        .count();

    assert_eq!(service_count, DEFAULT_MAX_SERVICE + 1);
}

// ==========================================
// 测试 3: 规则优先级
// ==========================================

#[test]
fn test_fitness_rule_wins_even_with_open_quota() {
    let records = vec![record("T2", false, false, false, 50.0, BrandingNeed::Low)];
    let decisions = InductionAssigner::assign(&records, None, DEFAULT_MAX_SERVICE);

    assert_eq!(decisions[0].assignment, Assignment::Maintenance);
    assert_eq!(decisions[0].reason_text(), "Fitness Certificate invalid");
}

#[test]
fn test_rule_order_on_mixed_fleet() {
    let decisions = InductionAssigner::assign(&mixed_fleet(), None, DEFAULT_MAX_SERVICE);

    let expectations = [
        ("T1", Assignment::Service, "Meets all conditions"),
        ("T2", Assignment::Maintenance, "Fitness Certificate invalid"),
        ("T3", Assignment::Maintenance, "Open Job Card"),
        ("T4", Assignment::Standby, "Pending Cleaning"),
        ("T5", Assignment::Service, "Meets all conditions"),
    ];
    for (decision, (train_id, assignment, reason)) in decisions.iter().zip(expectations) {
        assert_eq!(decision.train_id, train_id);
        assert_eq!(decision.assignment, assignment, "列车 {}", train_id);
        assert_eq!(decision.reason_text(), reason, "列车 {}", train_id);
    }
}

// ==========================================
// 测试 4: 覆盖至上
// ==========================================

#[test]
fn test_forced_override_wins_regardless_of_other_fields() {
    // 任意扣分组合均不拦截覆盖
    let fleets = [
        record("F", false, false, false, 10.0, BrandingNeed::None),
        record("F", true, true, false, 10.0, BrandingNeed::None),
        record("F", true, false, true, 10.0, BrandingNeed::None),
        record("F", false, true, true, 10.0, BrandingNeed::High),
    ];
    for train in fleets {
        let decisions = InductionAssigner::assign(std::slice::from_ref(&train), Some("F"), 0);
        assert_eq!(decisions[0].assignment, Assignment::Service);
        assert_eq!(decisions[0].reason_text(), "Forced into Service");
    }
}

#[test]
fn test_forced_override_with_zero_quota_scenario() {
    // T5 适航失效被覆盖入役, T6 可入役但配额为 0
    let records = vec![
        record("T5", false, false, false, 10.0, BrandingNeed::None),
        eligible("T6", 10.0),
    ];
    let decisions = InductionAssigner::assign(&records, Some("T5"), 0);

    assert_eq!(decisions[0].assignment, Assignment::Service);
    assert_eq!(decisions[0].reason_text(), "Forced into Service");
    assert_eq!(decisions[1].assignment, Assignment::Standby);
    assert_eq!(decisions[1].reason_text(), "Service quota filled");
}

// ==========================================
// 测试 5: 确定性/幂等
// ==========================================

#[test]
fn test_identical_inputs_yield_identical_outputs() {
    let records = mixed_fleet();
    let first = InductionAssigner::assign(&records, Some("T4"), 2);
    let second = InductionAssigner::assign(&records, Some("T4"), 2);
    assert_eq!(first, second);
}

// ==========================================
// 测试 6: 末位名额先到先得
// ==========================================

#[test]
fn test_last_slot_tie_break_by_input_order() {
    // B 里程更低、品牌需求更高, 但名额纯按输入顺序
    let records = vec![
        record("A", true, false, false, 900.0, BrandingNeed::None),
        record("B", true, false, false, 1.0, BrandingNeed::High),
    ];
    let decisions = InductionAssigner::assign(&records, None, 1);

    assert_eq!(decisions[0].assignment, Assignment::Service);
    assert_eq!(decisions[1].assignment, Assignment::Standby);
    assert_eq!(decisions[1].reason_text(), "Service quota filled");
}

// ==========================================
// 测试 7: 方案摘要联动
// ==========================================

#[test]
fn test_summary_over_mixed_fleet() {
    let records = mixed_fleet();
    let plan = InductionAssigner::assign_plan(&records, None, DEFAULT_MAX_SERVICE);
    let summary = PlanSummaryEngine::summarize(&records, &plan);

    assert_eq!(summary.total, 5);
    assert_eq!(summary.service_count, 2);
    assert_eq!(summary.standby_count, 1);
    assert_eq!(summary.maintenance_count, 2);
    assert_eq!(summary.service_mileage_total, 175.0);
    assert_eq!(summary.maintenance_mileage_total, 100.0);
}
