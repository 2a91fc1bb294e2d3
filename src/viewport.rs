//! Breakpoint tables mapping a viewport width to a count.
//!
//! The same table type drives both the carousel's items-in-view and the
//! pager's batch size; each site page picks its own tiers.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Widths strictly below this value use `items`.
    pub below: u32,
    pub items: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    tiers: Vec<Tier>,
    fallback: usize,
}

impl Breakpoints {
    pub fn new(tiers: Vec<Tier>, fallback: usize) -> Result<Self> {
        let table = Self { tiers, fallback };
        table.validate()?;
        Ok(table)
    }

    /// Tables read from config files skip `new`, so they are checked here.
    pub fn validate(&self) -> Result<()> {
        if self.fallback == 0 {
            return Err(Error::breakpoints("fallback item count must be positive"));
        }
        for (i, tier) in self.tiers.iter().enumerate() {
            if tier.items == 0 {
                return Err(Error::breakpoints(format!(
                    "tier below {} has zero items",
                    tier.below
                )));
            }
            if i > 0 && self.tiers[i - 1].below >= tier.below {
                return Err(Error::breakpoints(format!(
                    "tier widths must increase ({} then {})",
                    self.tiers[i - 1].below,
                    tier.below
                )));
            }
        }
        Ok(())
    }

    pub fn fixed(items: usize) -> Self {
        Self {
            tiers: Vec::new(),
            fallback: items.max(1),
        }
    }

    pub fn two_tier(threshold: u32, below: usize, above: usize) -> Self {
        Self {
            tiers: vec![Tier {
                below: threshold,
                items: below.max(1),
            }],
            fallback: above.max(1),
        }
    }

    fn three_tier(small: u32, medium: u32) -> Self {
        Self {
            tiers: vec![
                Tier { below: small, items: 1 },
                Tier { below: medium, items: 2 },
            ],
            fallback: 3,
        }
    }

    pub fn items_for(&self, width: u32) -> usize {
        self.tiers
            .iter()
            .find(|tier| width < tier.below)
            .map_or(self.fallback, |tier| tier.items)
    }

    /// Named tables used by the site pages.
    pub fn preset(name: &str) -> Result<Self> {
        let table = match name {
            "positions" => Self::three_tier(600, 901),
            "videos" => Self::three_tier(768, 1024),
            "compact" => Self::two_tier(768, 1, 2),
            "strip" => Self::two_tier(768, 2, 6),
            "hero" => Self::fixed(1),
            "photos" => Self::two_tier(901, 4, 8),
            "faculty" => Self::two_tier(769, 8, 16),
            other => return Err(Error::UnknownPreset(other.to_string())),
        };
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_tiers() {
        let table = Breakpoints::preset("positions").unwrap();
        assert_eq!(table.items_for(320), 1);
        assert_eq!(table.items_for(599), 1);
        assert_eq!(table.items_for(600), 2);
        assert_eq!(table.items_for(900), 2);
        assert_eq!(table.items_for(901), 3);
        assert_eq!(table.items_for(1920), 3);
    }

    #[test]
    fn test_batch_presets_are_inclusive_of_mobile_edge() {
        // photos treat 900px as mobile, faculty treat 768px as mobile
        assert_eq!(Breakpoints::preset("photos").unwrap().items_for(900), 4);
        assert_eq!(Breakpoints::preset("photos").unwrap().items_for(901), 8);
        assert_eq!(Breakpoints::preset("faculty").unwrap().items_for(768), 8);
        assert_eq!(Breakpoints::preset("faculty").unwrap().items_for(769), 16);
    }

    #[test]
    fn test_fixed_ignores_width() {
        let table = Breakpoints::fixed(1);
        assert_eq!(table.items_for(0), 1);
        assert_eq!(table.items_for(4000), 1);
    }

    #[test]
    fn test_rejects_unordered_tiers() {
        let tiers = vec![
            Tier { below: 900, items: 2 },
            Tier { below: 600, items: 1 },
        ];
        assert!(matches!(
            Breakpoints::new(tiers, 3),
            Err(Error::Breakpoints(_))
        ));
    }

    #[test]
    fn test_rejects_zero_items() {
        assert!(Breakpoints::new(Vec::new(), 0).is_err());
        assert!(Breakpoints::new(vec![Tier { below: 500, items: 0 }], 2).is_err());
    }

    #[test]
    fn test_unknown_preset() {
        assert!(matches!(
            Breakpoints::preset("sidebar"),
            Err(Error::UnknownPreset(name)) if name == "sidebar"
        ));
    }

    #[test]
    fn test_deserialize_table() {
        let json = r#"{ "tiers": [{ "below": 700, "items": 1 }], "fallback": 4 }"#;
        let table: Breakpoints = serde_json::from_str(json).unwrap();
        assert_eq!(table.items_for(699), 1);
        assert_eq!(table.items_for(700), 4);
    }
}
