// ABOUTME: Built-in mock dataset backing the record store
// ABOUTME: Deterministic fixtures; no persistence exists behind them

use chrono::{DateTime, TimeZone, Utc};
use cotdesk_core::{
    AgeBand, CotRecord, CotStatus, Gender, Product, ProductCategory, ProductType, QuestionType,
    Questioner,
};

fn ts(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()
}

#[allow(clippy::too_many_arguments)]
fn questioner(
    id: &str,
    gender: Gender,
    age_band: AgeBand,
    product_category: ProductCategory,
    risk_profile: &str,
    cross_subscription: &str,
    product_list: &[&str],
    day: u32,
) -> Questioner {
    Questioner {
        id: id.to_string(),
        gender,
        age_band,
        product_category,
        customer_risk_profile: risk_profile.to_string(),
        cross_subscription: cross_subscription.to_string(),
        product_list: product_list.iter().map(|s| s.to_string()).collect(),
        product_count: product_list.len() as u32,
        created_at: ts(day, 9),
        updated_at: ts(day, 9),
    }
}

pub fn questioners() -> Vec<Questioner> {
    vec![
        questioner(
            "q1",
            Gender::Male,
            AgeBand::Age30,
            ProductCategory::Securities,
            "공격투자형",
            "Y",
            &["p1", "p2"],
            1,
        ),
        questioner(
            "q2",
            Gender::Female,
            AgeBand::Age40,
            ProductCategory::Insurance,
            "안정형",
            "N",
            &["p8"],
            1,
        ),
        questioner(
            "q3",
            Gender::Male,
            AgeBand::Age20,
            ProductCategory::Securities,
            "적극투자형",
            "N",
            &["p4"],
            2,
        ),
        questioner(
            "q4",
            Gender::Female,
            AgeBand::Age60,
            ProductCategory::Insurance,
            "안정추구형",
            "Y",
            &["p7", "p12"],
            2,
        ),
        questioner(
            "q5",
            Gender::Male,
            AgeBand::Age50,
            ProductCategory::Securities,
            "위험중립형",
            "Y",
            &["p2", "p6"],
            3,
        ),
        questioner(
            "q6",
            Gender::Female,
            AgeBand::Age70,
            ProductCategory::Insurance,
            "안정형",
            "N",
            &["p11"],
            3,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    product_type: ProductType,
    maturity: &str,
    yield_desc: &str,
    risk_grade: &str,
    payment_type: &str,
    keywords: &str,
    day: u32,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        product_category: product_type.category(),
        product_type,
        maturity: maturity.to_string(),
        yield_desc: yield_desc.to_string(),
        risk_grade: risk_grade.to_string(),
        tax_benefit: if product_type.category() == ProductCategory::Insurance {
            "보험료 세액공제".to_string()
        } else {
            "해당 없음".to_string()
        },
        payment_type: payment_type.to_string(),
        loss_rate: match product_type.category() {
            ProductCategory::Securities => "원금 손실 가능".to_string(),
            ProductCategory::Insurance => "중도해지 시 환급금 손실 가능".to_string(),
        },
        liquidity: match product_type {
            ProductType::ShortTerm => "높음".to_string(),
            ProductType::WholeLife | ProductType::Annuity => "낮음".to_string(),
            _ => "보통".to_string(),
        },
        search_keywords: keywords.to_string(),
        note: String::new(),
        created_at: ts(day, 10),
        updated_at: ts(day, 10),
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product(
            "p1",
            "코어 성장 주식형 펀드",
            ProductType::Equity,
            "만기 없음",
            "연 8% 내외 (변동)",
            "2등급 (높은 위험)",
            "자유적립식",
            "주식형, 성장주, 국내",
            1,
        ),
        product(
            "p2",
            "우량 채권형 펀드",
            ProductType::Bond,
            "만기 없음",
            "연 4% 내외",
            "4등급 (보통 위험)",
            "자유적립식",
            "채권형, 국공채, 안정",
            1,
        ),
        product(
            "p3",
            "글로벌 리츠 재간접 펀드",
            ProductType::Reit,
            "만기 없음",
            "연 6% 내외 (변동)",
            "3등급 (다소 높은 위험)",
            "거치식",
            "리츠, 부동산, 글로벌",
            1,
        ),
        product(
            "p4",
            "단기금융 MMF",
            ProductType::ShortTerm,
            "수시",
            "연 3% 내외",
            "5등급 (낮은 위험)",
            "수시입출금",
            "MMF, 단기, 파킹",
            2,
        ),
        product(
            "p5",
            "커버드콜 파생형 펀드",
            ProductType::Derivative,
            "만기 없음",
            "연 7% 내외 (변동)",
            "2등급 (높은 위험)",
            "거치식",
            "파생, 커버드콜, 월배당",
            2,
        ),
        product(
            "p6",
            "퇴직연금 안정 신탁",
            ProductType::TrustPension,
            "퇴직 시",
            "연 3.5% 내외",
            "5등급 (낮은 위험)",
            "정기적립식",
            "퇴직연금, 신탁, IRP",
            2,
        ),
        product(
            "p7",
            "개인연금보험",
            ProductType::Annuity,
            "55세 이후 연금개시",
            "공시이율 연동",
            "낮음",
            "월납",
            "연금, 노후, 세액공제",
            3,
        ),
        product(
            "p8",
            "종신보험 플러스",
            ProductType::WholeLife,
            "종신",
            "해당 없음",
            "낮음",
            "월납",
            "종신, 사망보장, 상속",
            3,
        ),
        product(
            "p9",
            "정기보험 라이트",
            ProductType::Term,
            "20년 만기",
            "해당 없음",
            "낮음",
            "월납",
            "정기, 사망보장, 저렴",
            3,
        ),
        product(
            "p10",
            "질병보장보험",
            ProductType::Disease,
            "80세 만기",
            "해당 없음",
            "낮음",
            "월납",
            "질병, 진단비, 수술비",
            4,
        ),
        product(
            "p11",
            "건강보험 케어",
            ProductType::Health,
            "100세 만기",
            "해당 없음",
            "낮음",
            "월납",
            "건강, 입원, 통원",
            4,
        ),
        product(
            "p12",
            "암보험 든든",
            ProductType::Cancer,
            "90세 만기",
            "해당 없음",
            "낮음",
            "월납",
            "암, 진단비, 치료비",
            4,
        ),
        product(
            "p13",
            "변액유니버셜보험",
            ProductType::Variable,
            "종신",
            "펀드 실적 연동",
            "보통",
            "자유납",
            "변액, 투자, 유니버셜",
            4,
        ),
    ]
}

pub fn cot_records() -> Vec<CotRecord> {
    let questioners = questioners();

    let mut cots = vec![
        CotRecord {
            id: "cot1".to_string(),
            questioner_id: "q1".to_string(),
            product_ids: vec!["p1".to_string(), "p2".to_string()],
            product_category: ProductCategory::Securities,
            question_type: QuestionType::CustomerCharacteristics,
            question_text: "30대 공격투자형 고객에게 맞는 주식형 펀드를 추천해주세요.".to_string(),
            cot_steps: vec![
                "고객의 연령대와 투자성향을 확인한다.".to_string(),
                "공격투자형에 적합한 고위험 상품군을 선별한다.".to_string(),
                "주식형 펀드 중 성장주 비중이 높은 상품을 고른다.".to_string(),
            ],
            answer_text: "코어 성장 주식형 펀드를 중심으로, 변동성 완화를 위해 우량 채권형 펀드를 일부 편입하는 구성을 추천합니다.".to_string(),
            cot_status: CotStatus::ReviewRequested,
            created_at: ts(5, 9),
            updated_at: ts(20, 14),
        },
        CotRecord {
            id: "cot2".to_string(),
            questioner_id: "q2".to_string(),
            product_ids: vec!["p8".to_string()],
            product_category: ProductCategory::Insurance,
            question_type: QuestionType::HealthProtection,
            question_text: "40대 여성이 준비하면 좋은 보장성 보험이 궁금합니다.".to_string(),
            cot_steps: vec![
                "기가입 상품과 보장 공백을 확인한다.".to_string(),
                "연령대별 주요 질병 위험을 검토한다.".to_string(),
            ],
            answer_text: "종신보험 플러스로 사망보장을 확보하고, 질병보장 특약을 보완하는 구성을 제안합니다.".to_string(),
            cot_status: CotStatus::Draft,
            created_at: ts(6, 10),
            updated_at: ts(19, 11),
        },
        CotRecord {
            id: "cot3".to_string(),
            questioner_id: "q3".to_string(),
            product_ids: vec!["p4".to_string()],
            product_category: ProductCategory::Securities,
            question_type: QuestionType::InvestmentPreference,
            question_text: "단기 자금을 잠시 굴릴 수 있는 상품이 있을까요?".to_string(),
            cot_steps: vec![
                "자금의 예상 거치 기간을 확인한다.".to_string(),
                "유동성이 높은 단기금융 상품을 선별한다.".to_string(),
            ],
            answer_text: "수시 입출금이 가능한 단기금융 MMF를 추천합니다.".to_string(),
            cot_status: CotStatus::Approved,
            created_at: ts(7, 9),
            updated_at: ts(18, 16),
        },
        CotRecord {
            id: "cot4".to_string(),
            questioner_id: "q4".to_string(),
            product_ids: vec!["p7".to_string()],
            product_category: ProductCategory::Insurance,
            question_type: QuestionType::AgeLifecycle,
            question_text: "은퇴를 앞두고 연금 수령을 준비하려면 어떤 상품이 좋을까요?".to_string(),
            cot_steps: vec![
                "은퇴 시점과 필요 연금액을 추정한다.".to_string(),
                "연금 개시 조건이 맞는 상품을 비교한다.".to_string(),
            ],
            answer_text: "개인연금보험으로 연금 수령 기반을 마련하는 것을 추천합니다.".to_string(),
            cot_status: CotStatus::Rejected,
            created_at: ts(8, 9),
            updated_at: ts(17, 10),
        },
    ];

    // Generated tail: covers both categories, all question types and statuses,
    // with strictly distinct update timestamps so the default sort is observable.
    for i in 5..=24usize {
        let questioner = &questioners[(i - 1) % questioners.len()];
        let category = questioner.product_category;
        let question_type = QuestionType::ALL[i % QuestionType::ALL.len()];
        let status = CotStatus::ALL[i % CotStatus::ALL.len()];
        let product_id = match category {
            ProductCategory::Securities => format!("p{}", (i % 6) + 1),
            ProductCategory::Insurance => format!("p{}", (i % 7) + 7),
        };

        cots.push(CotRecord {
            id: format!("cot{}", i),
            questioner_id: questioner.id.clone(),
            product_ids: vec![product_id],
            product_category: category,
            question_type,
            question_text: format!(
                "{} {} 고객을 위한 {} 상담 질문입니다.",
                questioner.age_band.label(),
                questioner.gender.label(),
                category.label()
            ),
            cot_steps: vec![
                "고객 프로필과 보유 상품을 확인한다.".to_string(),
                "질문 조건에 맞는 상품군을 선별한다.".to_string(),
            ],
            answer_text: format!("{} 상품 중심의 구성을 제안합니다.", category.label()),
            cot_status: status,
            created_at: ts((i % 20 + 1) as u32, 9),
            updated_at: ts((i % 24 + 1) as u32, (i % 12) as u32),
        });
    }

    cots
}
