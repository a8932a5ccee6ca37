//! # Antique-Dealer Reference Data
//!
//! The keyword tables behind the antique rule set: terms that mark an
//! item as secondhand, per-category classification keywords for all 13
//! dealer categories, and the prohibited-items table.
//!
//! Keywords are bilingual. Marketplace listings mix Japanese and English
//! freely ("ヴィンテージ Rolex 中古"), so each table carries both the
//! Japanese terms and the English equivalents sellers actually type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sedori_core::DealerCategory;

/// Terms that classify an item as antique/used/secondhand.
///
/// Any match makes the dealer-licensing regulation applicable; no match
/// means the rule set returns its trivially compliant passthrough result.
pub fn antique_terms() -> Vec<String> {
    [
        "中古",
        "古物",
        "骨董",
        "アンティーク",
        "ヴィンテージ",
        "ビンテージ",
        "レトロ",
        "セコハン",
        "used",
        "secondhand",
        "second-hand",
        "pre-owned",
        "preowned",
        "antique",
        "vintage",
        "refurbished",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Classification keywords for each of the 13 dealer categories.
///
/// The match on `DealerCategory` is exhaustive: adding a 14th category is
/// a compile error here until its keyword list exists.
pub fn category_keywords() -> BTreeMap<DealerCategory, Vec<String>> {
    DealerCategory::all()
        .iter()
        .map(|&category| {
            let keywords: &[&str] = match category {
                DealerCategory::Art => &[
                    "絵画", "彫刻", "美術", "骨董品", "工芸", "掛け軸", "陶器", "painting",
                    "sculpture", "artwork", "fine art", "pottery",
                ],
                DealerCategory::Clothing => &[
                    "衣類", "洋服", "着物", "古着", "ジャケット", "ドレス", "clothing", "apparel",
                    "kimono", "jacket", "dress", "garment",
                ],
                DealerCategory::WatchesJewelry => &[
                    "時計", "腕時計", "宝石", "宝飾", "指輪", "ネックレス", "ジュエリー", "watch",
                    "jewelry", "jewellery", "ring", "necklace", "gemstone",
                ],
                DealerCategory::Automobiles => &[
                    "自動車", "カーナビ", "カーパーツ", "タイヤ", "car", "automobile", "vehicle",
                    "auto part",
                ],
                DealerCategory::Motorcycles => &[
                    "オートバイ", "バイク", "原付", "スクーター", "motorcycle", "motorbike",
                    "scooter", "moped",
                ],
                DealerCategory::Bicycles => &[
                    "自転車", "ロードバイク", "マウンテンバイク", "bicycle", "road bike",
                    "mountain bike",
                ],
                DealerCategory::Cameras => &[
                    "カメラ", "レンズ", "一眼レフ", "ミラーレス", "双眼鏡", "camera", "lens",
                    "dslr", "binoculars",
                ],
                DealerCategory::OfficeEquipment => &[
                    "事務機", "コピー機", "レジスター", "シュレッダー", "office equipment",
                    "copier", "cash register", "typewriter",
                ],
                DealerCategory::MachineTools => &[
                    "工作機械", "旋盤", "電動工具", "発電機", "machine tool", "lathe",
                    "power tool", "generator",
                ],
                DealerCategory::Tools => &[
                    "家具", "ゲーム", "おもちゃ", "楽器", "フィギュア", "furniture", "game",
                    "toy", "instrument", "figure",
                ],
                DealerCategory::LeatherRubber => &[
                    "バッグ", "鞄", "財布", "靴", "レザー", "革製", "bag", "wallet", "shoes",
                    "leather", "handbag",
                ],
                DealerCategory::Books => &[
                    "書籍", "古書", "漫画", "マンガ", "雑誌", "文庫", "book", "manga",
                    "magazine", "comic",
                ],
                DealerCategory::Tickets => &[
                    "金券", "商品券", "切手", "チケット", "ギフト券", "gift card", "voucher",
                    "ticket", "stamp",
                ],
            };
            (category, keywords.iter().map(|k| k.to_string()).collect())
        })
        .collect()
}

/// One class of goods a dealer may not handle at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProhibitedItem {
    /// Short machine-readable label (e.g., "firearms").
    pub label: String,
    /// The statute that prohibits the class.
    pub legal_basis: String,
    /// Keywords whose match flags the product.
    pub keywords: Vec<String>,
}

impl ProhibitedItem {
    fn new(label: &str, legal_basis: &str, keywords: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            legal_basis: legal_basis.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// The prohibited-items table for the antique rule set.
///
/// Any keyword match makes the evaluation non-compliant at `Prohibited`
/// severity and short-circuits the license check.
pub fn prohibited_items() -> Vec<ProhibitedItem> {
    vec![
        ProhibitedItem::new(
            "firearms_swords",
            "銃砲刀剣類所持等取締法 (Firearms and Swords Control Law)",
            &[
                "拳銃", "銃砲", "ピストル", "ライフル", "実銃", "日本刀", "刀剣", "firearm",
                "handgun", "pistol", "rifle", "sword blade",
            ],
        ),
        ProhibitedItem::new(
            "narcotics",
            "麻薬及び向精神薬取締法 (Narcotics and Psychotropics Control Law)",
            &[
                "麻薬", "覚醒剤", "覚せい剤", "大麻", "コカイン", "ヘロイン", "narcotic",
                "cocaine", "heroin", "cannabis", "methamphetamine",
            ],
        ),
        ProhibitedItem::new(
            "counterfeits",
            "商標法 (Trademark Law)",
            &[
                "偽物", "コピー品", "模造品", "スーパーコピー", "counterfeit", "knockoff",
                "replica brand", "fake brand",
            ],
        ),
        ProhibitedItem::new(
            "endangered_species",
            "種の保存法 (Law for the Conservation of Endangered Species)",
            &[
                "象牙", "べっ甲", "剥製", "サンゴ", "ivory", "tortoiseshell", "rhino horn",
                "taxidermy",
            ],
        ),
        ProhibitedItem::new(
            "regulated_medical",
            "医薬品医療機器等法 (Pharmaceuticals and Medical Devices Law)",
            &[
                "医薬品", "処方薬", "医療機器", "コンタクトレンズ", "prescription drug",
                "pharmaceutical", "medical device",
            ],
        ),
        ProhibitedItem::new(
            "regulated_food_cosmetics",
            "食品衛生法 (Food Sanitation Law)",
            &[
                "手作り食品", "開封済み化粧品", "サプリメント", "homemade food",
                "opened cosmetics", "supplement",
            ],
        ),
    ]
}
