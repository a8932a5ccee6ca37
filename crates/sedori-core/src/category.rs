//! # Dealer Category — Single Source of Truth
//!
//! Defines the `DealerCategory` enum with the 13 statutory classes of
//! secondhand goods. This is the ONE definition used across the engine:
//! keyword tables, license scopes, and category classification all refer
//! to it, and every `match` on `DealerCategory` must be exhaustive.
//!
//! The wildcard "all categories" that a dealer license may carry is a
//! license scope ([`crate::license::LicenseScope::All`]), not a 14th
//! category, so classification can never produce it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SedoriError;

/// The statutory classes under which used goods require a dealer license.
///
/// # Categories
///
/// | # | Category | Typical goods |
/// |---|----------|---------------|
/// |  1 | Art | paintings, sculpture, antiques proper |
/// |  2 | Clothing | garments, secondhand apparel |
/// |  3 | WatchesJewelry | watches, gemstones, precious metals |
/// |  4 | Automobiles | cars and their parts |
/// |  5 | Motorcycles | motorcycles, mopeds, their parts |
/// |  6 | Bicycles | bicycles and their parts |
/// |  7 | Cameras | cameras, lenses, optical equipment |
/// |  8 | OfficeEquipment | copiers, registers, typewriters |
/// |  9 | MachineTools | machine tools, factory and telecom equipment |
/// | 10 | Tools | furniture, games, CDs/DVDs, general goods |
/// | 11 | LeatherRubber | bags, shoes, leather and rubber goods |
/// | 12 | Books | books and printed matter |
/// | 13 | Tickets | gift vouchers, transit tickets, stamps |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealerCategory {
    /// Works of art and antiques proper.
    Art,
    /// Clothing and secondhand apparel.
    Clothing,
    /// Watches, jewelry, and precious metals.
    WatchesJewelry,
    /// Automobiles and automobile parts.
    Automobiles,
    /// Motorcycles, mopeds, and their parts.
    Motorcycles,
    /// Bicycles and bicycle parts.
    Bicycles,
    /// Cameras and optical equipment.
    Cameras,
    /// Office machines (copiers, registers).
    OfficeEquipment,
    /// Machine tools and industrial equipment.
    MachineTools,
    /// General goods: furniture, games, media. The statutory catch-all.
    Tools,
    /// Leather and rubber goods (bags, shoes).
    LeatherRubber,
    /// Books and printed matter.
    Books,
    /// Gift vouchers, tickets, and stamps.
    Tickets,
}

/// Total number of dealer categories. Used for compile-time assertions.
pub const DEALER_CATEGORY_COUNT: usize = 13;

impl DealerCategory {
    /// Returns all 13 dealer categories in canonical order.
    pub fn all() -> &'static [DealerCategory] {
        &[
            Self::Art,
            Self::Clothing,
            Self::WatchesJewelry,
            Self::Automobiles,
            Self::Motorcycles,
            Self::Bicycles,
            Self::Cameras,
            Self::OfficeEquipment,
            Self::MachineTools,
            Self::Tools,
            Self::LeatherRubber,
            Self::Books,
            Self::Tickets,
        ]
    }

    /// Returns the snake_case string identifier for this category.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Art => "art",
            Self::Clothing => "clothing",
            Self::WatchesJewelry => "watches_jewelry",
            Self::Automobiles => "automobiles",
            Self::Motorcycles => "motorcycles",
            Self::Bicycles => "bicycles",
            Self::Cameras => "cameras",
            Self::OfficeEquipment => "office_equipment",
            Self::MachineTools => "machine_tools",
            Self::Tools => "tools",
            Self::LeatherRubber => "leather_rubber",
            Self::Books => "books",
            Self::Tickets => "tickets",
        }
    }
}

impl std::fmt::Display for DealerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DealerCategory {
    type Err = SedoriError;

    /// Parse a dealer category from its snake_case string identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "art" => Ok(Self::Art),
            "clothing" => Ok(Self::Clothing),
            "watches_jewelry" => Ok(Self::WatchesJewelry),
            "automobiles" => Ok(Self::Automobiles),
            "motorcycles" => Ok(Self::Motorcycles),
            "bicycles" => Ok(Self::Bicycles),
            "cameras" => Ok(Self::Cameras),
            "office_equipment" => Ok(Self::OfficeEquipment),
            "machine_tools" => Ok(Self::MachineTools),
            "tools" => Ok(Self::Tools),
            "leather_rubber" => Ok(Self::LeatherRubber),
            "books" => Ok(Self::Books),
            "tickets" => Ok(Self::Tickets),
            other => Err(SedoriError::UnknownValue(format!(
                "unknown dealer category: {other:?}"
            ))),
        }
    }
}
