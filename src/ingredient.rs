//! Closed ingredient vocabulary.
//!
//! Every ingredient a recipe can reference is one of the nine names below.
//! Callers convert user-supplied strings with `FromStr`, which rejects
//! anything outside the vocabulary before a query reaches the matcher.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IngredientName {
    #[serde(rename = "Spicy Pepper")]
    SpicyPepper,
    #[serde(rename = "Hyrule Bass")]
    HyruleBass,
    #[serde(rename = "Raw Meat")]
    RawMeat,
    #[serde(rename = "Staminoka Bass")]
    StaminokaBass,
    #[serde(rename = "Mighty Carp")]
    MightyCarp,
    #[serde(rename = "Fortified Pumpkin")]
    FortifiedPumpkin,
    #[serde(rename = "Blue Nightshade")]
    BlueNightshade,
    #[serde(rename = "Hyrule Herb")]
    HyruleHerb,
    #[serde(rename = "Silent Princess")]
    SilentPrincess,
}

impl IngredientName {
    /// Every known ingredient, in vocabulary order.
    pub const ALL: [IngredientName; 9] = [
        IngredientName::SpicyPepper,
        IngredientName::HyruleBass,
        IngredientName::RawMeat,
        IngredientName::StaminokaBass,
        IngredientName::MightyCarp,
        IngredientName::FortifiedPumpkin,
        IngredientName::BlueNightshade,
        IngredientName::HyruleHerb,
        IngredientName::SilentPrincess,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientName::SpicyPepper => "Spicy Pepper",
            IngredientName::HyruleBass => "Hyrule Bass",
            IngredientName::RawMeat => "Raw Meat",
            IngredientName::StaminokaBass => "Staminoka Bass",
            IngredientName::MightyCarp => "Mighty Carp",
            IngredientName::FortifiedPumpkin => "Fortified Pumpkin",
            IngredientName::BlueNightshade => "Blue Nightshade",
            IngredientName::HyruleHerb => "Hyrule Herb",
            IngredientName::SilentPrincess => "Silent Princess",
        }
    }

    /// Known names starting with `prefix`, compared case-insensitively.
    ///
    /// Blank prefixes yield nothing so an empty input box shows no list.
    pub fn suggest(prefix: &str) -> Vec<IngredientName> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        Self::ALL
            .into_iter()
            .filter(|name| name.as_str().to_lowercase().starts_with(&prefix))
            .collect()
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for IngredientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown ingredient '{0}'")]
pub struct UnknownIngredient(pub String);

impl FromStr for IngredientName {
    type Err = UnknownIngredient;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == value)
            .ok_or_else(|| UnknownIngredient(value.to_string()))
    }
}

/// One line of a recipe: an ingredient and how many of it go in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: IngredientName,
    pub quantity: u32,
}

/// Set of distinct ingredient names, one bit per vocabulary entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IngredientSet(u16);

impl IngredientSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, name: IngredientName) {
        self.0 |= name.bit();
    }

    pub fn contains(&self, name: IngredientName) -> bool {
        self.0 & name.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of names present in both sets.
    pub fn overlap(&self, other: &IngredientSet) -> usize {
        (self.0 & other.0).count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = IngredientName> + use<> {
        let set = *self;
        IngredientName::ALL
            .into_iter()
            .filter(move |name| set.contains(*name))
    }
}

impl FromIterator<IngredientName> for IngredientSet {
    fn from_iter<I: IntoIterator<Item = IngredientName>>(iter: I) -> Self {
        let mut set = IngredientSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl<'a> FromIterator<&'a Ingredient> for IngredientSet {
    fn from_iter<I: IntoIterator<Item = &'a Ingredient>>(iter: I) -> Self {
        iter.into_iter().map(|ingredient| ingredient.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_display_name() {
        for name in IngredientName::ALL {
            assert_eq!(name.as_str().parse::<IngredientName>().unwrap(), name);
        }
    }

    #[test]
    fn rejects_unknown_and_miscased_names() {
        assert_eq!(
            "Dragon Horn".parse::<IngredientName>(),
            Err(UnknownIngredient("Dragon Horn".to_string()))
        );
        assert!("hyrule bass".parse::<IngredientName>().is_err());
        assert!("".parse::<IngredientName>().is_err());
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&IngredientName::FortifiedPumpkin).unwrap();
        assert_eq!(json, "\"Fortified Pumpkin\"");
        let parsed: IngredientName = serde_json::from_str("\"Silent Princess\"").unwrap();
        assert_eq!(parsed, IngredientName::SilentPrincess);
        assert!(serde_json::from_str::<IngredientName>("\"Apple\"").is_err());
    }

    #[test]
    fn suggest_matches_prefix_case_insensitively() {
        assert_eq!(
            IngredientName::suggest("hy"),
            vec![IngredientName::HyruleBass, IngredientName::HyruleHerb]
        );
        assert_eq!(
            IngredientName::suggest("  S"),
            vec![
                IngredientName::SpicyPepper,
                IngredientName::StaminokaBass,
                IngredientName::SilentPrincess
            ]
        );
        assert!(IngredientName::suggest("   ").is_empty());
        assert!(IngredientName::suggest("xyz").is_empty());
    }

    #[test]
    fn set_collapses_duplicates() {
        let set: IngredientSet = [
            IngredientName::RawMeat,
            IngredientName::RawMeat,
            IngredientName::MightyCarp,
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(IngredientName::RawMeat));
        assert!(!set.contains(IngredientName::HyruleHerb));
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![IngredientName::RawMeat, IngredientName::MightyCarp]
        );
    }

    #[test]
    fn overlap_counts_shared_names() {
        let left: IngredientSet = [IngredientName::HyruleBass, IngredientName::RawMeat]
            .into_iter()
            .collect();
        let right: IngredientSet = [IngredientName::RawMeat, IngredientName::SpicyPepper]
            .into_iter()
            .collect();
        assert_eq!(left.overlap(&right), 1);
        assert_eq!(left.overlap(&IngredientSet::new()), 0);
        assert!(IngredientSet::new().is_empty());
    }
}
