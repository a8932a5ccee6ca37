//! # Import-Restriction Reference Data
//!
//! The restriction table behind the import rule set: one entry per
//! regulated goods class, carrying its keywords, prohibition/restriction
//! flags, required paperwork, tariff information, and issuing authority.
//! Also the origin-country lists: sanctioned origins that force a
//! prohibited verdict, and preferential-tariff origins that only add a
//! recommendation.

use serde::{Deserialize, Serialize};

/// One import regulation entry.
///
/// `prohibited` and `restricted` are not mutually exclusive in the data
/// model, but the shipped table never sets both: prohibition already
/// dominates, so a prohibited entry's paperwork fields are moot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRestriction {
    /// Stable entry identifier (e.g., "pharmaceuticals").
    pub id: String,
    /// Human-readable name of the goods class.
    pub name: String,
    /// Keywords whose match selects this entry.
    pub keywords: Vec<String>,
    /// Import of this class is banned outright.
    pub prohibited: bool,
    /// Import requires the listed documents/licenses.
    pub restricted: bool,
    /// Documents that must accompany the import.
    #[serde(default)]
    pub required_documents: Vec<String>,
    /// Licenses the importer must hold.
    #[serde(default)]
    pub required_licenses: Vec<String>,
    /// HS heading used for the tariff estimate, if duty applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tariff_code: Option<String>,
    /// Ad valorem duty rate in percent, if duty applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tariff_rate: Option<f64>,
    /// What the regulation covers, shown to the seller.
    pub description: String,
    /// The authority that administers the regulation.
    pub authority: String,
}

/// The shipped import-restriction table.
///
/// An item can match several entries at once (a leather camera bag hits
/// both "textiles_leather" and, if described as such, "electronics");
/// the rule set merges their paperwork and keeps the worst verdict.
pub fn builtin_import_restrictions() -> Vec<ImportRestriction> {
    vec![
        ImportRestriction {
            id: "narcotics".into(),
            name: "Narcotics and stimulants".into(),
            keywords: strings(&[
                "麻薬", "覚醒剤", "覚せい剤", "大麻", "コカイン", "ヘロイン", "narcotic",
                "cocaine", "heroin", "cannabis", "methamphetamine",
            ]),
            prohibited: true,
            restricted: false,
            required_documents: vec![],
            required_licenses: vec![],
            tariff_code: None,
            tariff_rate: None,
            description: "Narcotics, stimulants, and psychotropics may not be imported".into(),
            authority: "厚生労働省 (Ministry of Health, Labour and Welfare)".into(),
        },
        ImportRestriction {
            id: "weapons".into(),
            name: "Weapons and ammunition".into(),
            keywords: strings(&[
                "武器", "拳銃", "銃砲", "弾薬", "爆発物", "weapon", "firearm", "handgun",
                "ammunition", "explosive",
            ]),
            prohibited: true,
            restricted: false,
            required_documents: vec![],
            required_licenses: vec![],
            tariff_code: None,
            tariff_rate: None,
            description: "Firearms, ammunition, and explosives may not be imported".into(),
            authority: "税関 (Customs)".into(),
        },
        ImportRestriction {
            id: "counterfeit_goods".into(),
            name: "Counterfeit and infringing goods".into(),
            keywords: strings(&[
                "偽物", "偽ブランド", "コピー品", "模造品", "counterfeit", "knockoff",
                "replica brand", "fake brand",
            ]),
            prohibited: true,
            restricted: false,
            required_documents: vec![],
            required_licenses: vec![],
            tariff_code: None,
            tariff_rate: None,
            description: "Goods infringing trademarks or copyrights may not be imported".into(),
            authority: "税関 (Customs)".into(),
        },
        ImportRestriction {
            id: "endangered_species".into(),
            name: "Endangered species products (CITES)".into(),
            keywords: strings(&[
                "象牙", "ワシントン条約", "べっ甲", "毛皮", "サンゴ", "ivory", "cites",
                "tortoiseshell", "exotic fur", "coral",
            ]),
            prohibited: true,
            restricted: false,
            required_documents: vec![],
            required_licenses: vec![],
            tariff_code: None,
            tariff_rate: None,
            description: "Products of species listed under the Washington Convention may not be imported".into(),
            authority: "経済産業省 (Ministry of Economy, Trade and Industry)".into(),
        },
        ImportRestriction {
            id: "pharmaceuticals".into(),
            name: "Pharmaceuticals and medical devices".into(),
            keywords: strings(&[
                "医薬品", "サプリメント", "医療機器", "コンタクトレンズ", "pharmaceutical",
                "medicine", "supplement", "medical device",
            ]),
            prohibited: false,
            restricted: true,
            required_documents: strings(&["薬監証明 (import confirmation)", "成分表 (ingredient list)"]),
            required_licenses: strings(&["医薬品販売業許可 (pharmaceutical sales license)"]),
            tariff_code: None,
            tariff_rate: None,
            description: "Pharmaceuticals require import confirmation and a sales license".into(),
            authority: "厚生労働省 (Ministry of Health, Labour and Welfare)".into(),
        },
        ImportRestriction {
            id: "electronics".into(),
            name: "Electrical and radio equipment".into(),
            keywords: strings(&[
                "電化製品", "電子機器", "充電器", "バッテリー", "無線", "wireless", "charger",
                "battery", "electronics", "radio equipment",
            ]),
            prohibited: false,
            restricted: true,
            required_documents: strings(&[
                "PSE適合証明 (PSE conformity certificate)",
                "技適証明 (radio type approval)",
            ]),
            required_licenses: vec![],
            tariff_code: None,
            tariff_rate: None,
            description: "Electrical appliances need PSE conformity; radio devices need type approval".into(),
            authority: "経済産業省 / 総務省 (METI / MIC)".into(),
        },
        ImportRestriction {
            id: "alcohol".into(),
            name: "Alcoholic beverages".into(),
            keywords: strings(&[
                "ウイスキー", "ワイン", "日本酒", "焼酎", "リキュール", "alcohol", "whisky",
                "whiskey", "wine", "sake", "liquor",
            ]),
            prohibited: false,
            restricted: true,
            required_documents: strings(&["食品等輸入届出書 (food import notification)"]),
            required_licenses: strings(&["酒類販売業免許 (liquor sales license)"]),
            tariff_code: Some("2208".into()),
            tariff_rate: Some(15.0),
            description: "Alcoholic beverages carry duty and require a liquor sales license".into(),
            authority: "国税庁 (National Tax Agency)".into(),
        },
        ImportRestriction {
            id: "tobacco".into(),
            name: "Tobacco products".into(),
            keywords: strings(&[
                "たばこ", "タバコ", "葉巻", "電子タバコ", "tobacco", "cigarette", "cigar",
                "vape",
            ]),
            prohibited: false,
            restricted: true,
            required_documents: strings(&["製造たばこ輸入届出 (tobacco import notification)"]),
            required_licenses: strings(&["たばこ小売販売業許可 (tobacco retail license)"]),
            tariff_code: Some("2402".into()),
            tariff_rate: Some(29.8),
            description: "Tobacco products carry duty and require a retail license".into(),
            authority: "財務省 (Ministry of Finance)".into(),
        },
        ImportRestriction {
            id: "food".into(),
            name: "Food products".into(),
            keywords: strings(&[
                "食品", "菓子", "調味料", "茶葉", "food", "snack", "seasoning", "tea leaves",
                "coffee bean",
            ]),
            prohibited: false,
            restricted: true,
            required_documents: strings(&[
                "食品等輸入届出書 (food import notification)",
                "検疫証明書 (quarantine certificate)",
            ]),
            required_licenses: vec![],
            tariff_code: None,
            tariff_rate: None,
            description: "Food products require import notification and quarantine clearance".into(),
            authority: "厚生労働省 / 検疫所 (MHLW / Quarantine Station)".into(),
        },
        ImportRestriction {
            id: "cosmetics".into(),
            name: "Cosmetics".into(),
            keywords: strings(&[
                "化粧品", "スキンケア", "香水", "口紅", "cosmetics", "skincare", "perfume",
                "makeup",
            ]),
            prohibited: false,
            restricted: true,
            required_documents: strings(&["化粧品製造販売届 (cosmetics marketing notification)"]),
            required_licenses: strings(&["化粧品製造販売業許可 (cosmetics marketing license)"]),
            tariff_code: None,
            tariff_rate: None,
            description: "Cosmetics for resale require a marketing license and notification".into(),
            authority: "厚生労働省 (Ministry of Health, Labour and Welfare)".into(),
        },
        ImportRestriction {
            id: "textiles_leather".into(),
            name: "Textiles and leather goods".into(),
            keywords: strings(&[
                "革製品", "レザーバッグ", "毛皮コート", "leather", "fur coat", "handbag",
                "textile",
            ]),
            prohibited: false,
            restricted: false,
            required_documents: vec![],
            required_licenses: vec![],
            tariff_code: Some("4202".into()),
            tariff_rate: Some(8.0),
            description: "Leather goods and textiles carry ad valorem duty".into(),
            authority: "税関 (Customs)".into(),
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ─── Origin-Country Lists ────────────────────────────────────────────

/// One country on an origin list, with the spellings sellers use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginRule {
    /// Canonical English name, reported back in reasons.
    pub canonical: String,
    /// Accepted spellings: ISO codes, English and Japanese names.
    pub aliases: Vec<String>,
}

impl OriginRule {
    fn new(canonical: &str, aliases: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// A list of origin countries matched by normalized equality.
///
/// Unlike product text, the origin is a single short field, so matching
/// is exact (trimmed, case-folded) rather than substring: "Korea" must
/// not match "North Korea".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginList {
    rules: Vec<OriginRule>,
}

impl OriginList {
    /// Build a list from rules.
    pub fn new(rules: Vec<OriginRule>) -> Self {
        Self { rules }
    }

    /// Returns the canonical name if `origin` names a listed country.
    pub fn matches(&self, origin: &str) -> Option<&str> {
        let normalized = origin.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        self.rules
            .iter()
            .find(|rule| {
                rule.canonical.to_lowercase() == normalized
                    || rule.aliases.iter().any(|a| a.to_lowercase() == normalized)
            })
            .map(|rule| rule.canonical.as_str())
    }

    /// Number of listed countries.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Origins under a comprehensive import ban.
///
/// A sanctioned origin forces a prohibited verdict regardless of what the
/// product text matched.
pub fn sanctioned_origins() -> OriginList {
    OriginList::new(vec![OriginRule::new(
        "North Korea",
        &["north korea", "dprk", "北朝鮮", "朝鮮民主主義人民共和国", "kp", "prk"],
    )])
}

/// Origins eligible for preferential (GSP) tariff treatment.
///
/// Matching only appends a recommendation; it never changes the verdict.
pub fn preferential_origins() -> OriginList {
    OriginList::new(vec![
        OriginRule::new("Bangladesh", &["bangladesh", "バングラデシュ", "bd"]),
        OriginRule::new("Cambodia", &["cambodia", "カンボジア", "kh"]),
        OriginRule::new("Myanmar", &["myanmar", "ミャンマー", "mm"]),
        OriginRule::new("Laos", &["laos", "ラオス", "la"]),
        OriginRule::new("Nepal", &["nepal", "ネパール", "np"]),
        OriginRule::new("Ethiopia", &["ethiopia", "エチオピア", "et"]),
    ])
}
