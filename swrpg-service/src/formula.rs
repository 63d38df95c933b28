//! Numeric formulas shared by the rules calculators.
//!
//! Every formula here is pure and total. Bounds are expressed as partially
//! applied [`clamp`] functions so that each calculator clamps the same way:
//! - Difficulty: 0 to 5
//! - Rarity: 0 to 10
//! - Purchase price modifier: 1 to 4

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

/// Partially applied clamp: `clamp(min, max)(v) == max(min(v, max), min)`.
///
/// Unlike [`Ord::clamp`] this never panics; if `min > max` the result is `min`.
pub fn clamp<T: PartialOrd + Copy>(min: T, max: T) -> impl Fn(T) -> T {
    move |v| {
        let upper = if v > max { max } else { v };
        if upper < min { min } else { upper }
    }
}

pub fn clamp_difficulty(v: i64) -> i64 {
    clamp(0, 5)(v)
}

pub fn clamp_rarity(v: i64) -> i64 {
    clamp(0, 10)(v)
}

pub fn clamp_price_modifier(v: i64) -> i64 {
    clamp(1, 4)(v)
}

/// Contact network ratings (scope, expertise, obscurity) are capped at 5
pub fn clamp_rating(v: i64) -> i64 {
    clamp(0, 5)(v)
}

// ==================== Trade ====================

/// Galactic region where a trade takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Region {
    Core = 0,
    Colonies = 1,
    InnerRim = 2,
    MidRim = 3,
    OuterRim = 4,
    Expansion = 5,
    Wild = 6,
    Unknown = 7,
}

impl Region {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Region::Core),
            1 => Some(Region::Colonies),
            2 => Some(Region::InnerRim),
            3 => Some(Region::MidRim),
            4 => Some(Region::OuterRim),
            5 => Some(Region::Expansion),
            6 => Some(Region::Wild),
            7 => Some(Region::Unknown),
            _ => None,
        }
    }

    pub fn modifier(self) -> i64 {
        match self {
            Region::Core => -1,
            Region::Colonies | Region::InnerRim => 0,
            Region::MidRim => 1,
            Region::OuterRim | Region::Expansion => 2,
            Region::Wild => 3,
            Region::Unknown => 4,
        }
    }
}

/// Proximity to a major trade route
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Proximity {
    On = 0,
    Near = 1,
    Far = 2,
}

impl Proximity {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Proximity::On),
            1 => Some(Proximity::Near),
            2 => Some(Proximity::Far),
            _ => None,
        }
    }

    pub fn modifier(self) -> i64 {
        match self {
            Proximity::On => -1,
            Proximity::Near => 0,
            Proximity::Far => 1,
        }
    }
}

/// Population of the trade location
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Population {
    High = 0,
    Average = 1,
    Low = 2,
    None = 3,
}

impl Population {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Population::High),
            1 => Some(Population::Average),
            2 => Some(Population::Low),
            3 => Some(Population::None),
            _ => None,
        }
    }

    pub fn modifier(self) -> i64 {
        match self {
            Population::High => -1,
            Population::Average => 0,
            Population::Low => 1,
            Population::None => 4,
        }
    }
}

/// Map an item's rarity to the base difficulty of finding it
pub fn rarity_to_difficulty(rarity: i64) -> i64 {
    clamp_rarity(rarity) / 2
}

/// Difficulty of the Negotiation or Streetwise check to find a buyer or seller
pub fn trade_difficulty(
    rarity: i64,
    region: Region,
    proximity: Proximity,
    population: Population,
) -> i64 {
    clamp_difficulty(
        rarity_to_difficulty(rarity)
            + region.modifier()
            + proximity.modifier()
            + population.modifier(),
    )
}

/// Recommended purchase price for a trade of the given difficulty
pub fn purchase_price(difficulty: i64, base_price: f64) -> f64 {
    clamp_price_modifier(difficulty) as f64 * base_price
}

/// Recommended sale prices for one, two and three or more successes
pub fn sell_prices(purchase_price: f64) -> [f64; 3] {
    [
        purchase_price / 4.0,
        purchase_price / 2.0,
        purchase_price * 0.75,
    ]
}

// ==================== Repair ====================

/// Condition of a damaged item
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Condition {
    New = 0,
    Minor = 1,
    Moderate = 2,
    Major = 3,
}

impl Condition {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Condition::New),
            1 => Some(Condition::Minor),
            2 => Some(Condition::Moderate),
            3 => Some(Condition::Major),
            _ => None,
        }
    }

    pub fn cost_modifier(self) -> f64 {
        match self {
            Condition::New => 0.0,
            Condition::Minor => 0.25,
            Condition::Moderate => 0.5,
            Condition::Major => 1.0,
        }
    }

    /// The repair check difficulty equals the damage level
    pub fn difficulty(self) -> i64 {
        self as i64
    }
}

pub fn repair_cost(condition: Condition, base_price: f64) -> f64 {
    base_price * condition.cost_modifier()
}

// ==================== Contact networks ====================

/// The group's reputation with a contact network
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Reputation {
    Famous = 1,
    WellKnown = 2,
    Average = 3,
    Upstart = 4,
    Unfamiliar = 5,
    Adversary = 6,
}

impl Reputation {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Reputation::Famous),
            2 => Some(Reputation::WellKnown),
            3 => Some(Reputation::Average),
            4 => Some(Reputation::Upstart),
            5 => Some(Reputation::Unfamiliar),
            6 => Some(Reputation::Adversary),
            _ => None,
        }
    }
}

/// Relevance of the requested knowledge to the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Relevance {
    Very = 1,
    Somewhat = 2,
    Little = 3,
    None = 4,
}

impl Relevance {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Relevance::Very),
            2 => Some(Relevance::Somewhat),
            3 => Some(Relevance::Little),
            4 => Some(Relevance::None),
            _ => None,
        }
    }
}

/// Days before the informant answers; saturates instead of overflowing
pub fn contact_response_days(obscurity: i64, reputation: Reputation, relevance: Relevance) -> i64 {
    obscurity.saturating_mul(3 * reputation as i64 * relevance as i64)
}

// ==================== Recovery ====================

/// Damage tier relative to a threshold: 1 at half or less, 2 up to the
/// threshold, 3 beyond it. A zero threshold counts as exceeded.
pub fn damage_tier(current: i64, threshold: i64) -> i64 {
    if threshold <= 0 {
        return if current <= 0 { 1 } else { 3 };
    }
    let ratio = current as f64 / threshold as f64;
    if ratio <= 0.5 {
        1
    } else if ratio <= 1.0 {
        2
    } else {
        3
    }
}

/// Difficulty of a Medicine check to heal wounds
pub fn medicine_difficulty(wounds: i64, threshold: i64, self_heal: bool, has_equipment: bool) -> i64 {
    let mut difficulty = damage_tier(wounds, threshold);
    if self_heal {
        difficulty += 2;
    }
    if !has_equipment {
        difficulty += 1;
    }
    difficulty.min(5)
}

/// Difficulty of a Mechanics check to repair hull trauma
pub fn hull_repair_difficulty(trauma: i64, threshold: i64) -> i64 {
    damage_tier(trauma, threshold)
}

// ==================== Navigation ====================

/// Kind of hyperspace route being plotted
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Route {
    Local = 1,
    Established = 2,
    Remote = 3,
    Uncharted = 4,
}

impl Route {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Route::Local),
            2 => Some(Route::Established),
            3 => Some(Route::Remote),
            4 => Some(Route::Uncharted),
            _ => None,
        }
    }
}

/// Difficulty of an Astrogation check
pub fn navigation_difficulty(route: Route, hyperdrive_damaged: bool, has_navicomputer: bool) -> i64 {
    clamp_difficulty(
        route as i64 + i64::from(hyperdrive_damaged) + i64::from(!has_navicomputer),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_clamp_bounds_and_idempotence() {
        let c = clamp(0, 5);
        for v in -20..20 {
            let once = c(v);
            assert!((0..=5).contains(&once));
            assert_eq!(c(once), once);
        }
    }

    #[test]
    fn test_clamp_inverted_bounds_does_not_panic() {
        assert_eq!(clamp(5, 1)(3), 5);
    }

    #[test]
    fn test_rarity_to_difficulty() {
        assert_eq!(rarity_to_difficulty(0), 0);
        assert_eq!(rarity_to_difficulty(5), 2);
        assert_eq!(rarity_to_difficulty(10), 5);
        assert_eq!(rarity_to_difficulty(15), 5);
        assert_eq!(rarity_to_difficulty(-3), 0);
    }

    #[test]
    fn test_trade_difficulty_always_in_range() {
        for rarity in -2..=12 {
            for region in Region::iter() {
                for proximity in Proximity::iter() {
                    for population in Population::iter() {
                        let d = trade_difficulty(rarity, region, proximity, population);
                        assert!((0..=5).contains(&d), "difficulty {} out of range", d);
                    }
                }
            }
        }
    }

    #[test]
    fn test_trade_difficulty_example() {
        // rarity 6 -> 3, Outer Rim +2, Far +1, Low +1 -> clamped to 5
        assert_eq!(
            trade_difficulty(6, Region::OuterRim, Proximity::Far, Population::Low),
            5
        );
        // rarity 4 -> 2, Core -1, On -1, High -1 -> clamped to 0
        assert_eq!(
            trade_difficulty(4, Region::Core, Proximity::On, Population::High),
            0
        );
    }

    #[test]
    fn test_purchase_price_monotone() {
        let mut last = 0.0;
        for diff in -1..=6 {
            let price = purchase_price(diff, 100.0);
            assert!(price >= last);
            last = price;
        }
        assert_eq!(purchase_price(0, 100.0), 100.0);
        assert_eq!(purchase_price(5, 100.0), 400.0);
    }

    #[test]
    fn test_sell_prices_strictly_increasing() {
        for p in [1.0, 3.0, 100.0, 12345.0] {
            let [a, b, c] = sell_prices(p);
            assert!(a < b && b < c);
        }
        assert_eq!(sell_prices(400.0), [100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_repair_cost() {
        assert_eq!(repair_cost(Condition::Moderate, 1000.0), 500.0);
        assert_eq!(repair_cost(Condition::New, 1000.0), 0.0);
        assert_eq!(repair_cost(Condition::Major, 1000.0), 1000.0);
        assert_eq!(Condition::Minor.difficulty(), 1);
    }

    #[test]
    fn test_contact_response_days() {
        assert_eq!(
            contact_response_days(2, Reputation::Average, Relevance::Very),
            18
        );
        assert_eq!(
            contact_response_days(1, Reputation::Adversary, Relevance::None),
            72
        );
    }

    #[test]
    fn test_contact_response_days_saturates() {
        assert_eq!(
            contact_response_days(i64::MAX, Reputation::Adversary, Relevance::None),
            i64::MAX
        );
        assert_eq!(
            contact_response_days(i64::MIN, Reputation::Average, Relevance::Somewhat),
            i64::MIN
        );
    }

    #[test]
    fn test_enum_names_parse() {
        assert_eq!("outer-rim".parse::<Region>().unwrap(), Region::OuterRim);
        assert_eq!("MODERATE".parse::<Condition>().unwrap(), Condition::Moderate);
        assert_eq!("well-known".parse::<Reputation>().unwrap(), Reputation::WellKnown);
        assert!(Region::from_code(8).is_none());
    }

    #[test]
    fn test_medicine_difficulty() {
        assert_eq!(medicine_difficulty(5, 10, false, true), 1);
        assert_eq!(medicine_difficulty(6, 10, false, true), 2);
        assert_eq!(medicine_difficulty(10, 10, false, true), 2);
        assert_eq!(medicine_difficulty(11, 10, false, true), 3);
        assert_eq!(medicine_difficulty(6, 10, true, true), 4);
        assert_eq!(medicine_difficulty(11, 10, true, false), 5);
        assert_eq!(medicine_difficulty(3, 0, false, true), 3);
    }

    #[test]
    fn test_navigation_difficulty() {
        assert_eq!(navigation_difficulty(Route::Local, false, true), 1);
        assert_eq!(navigation_difficulty(Route::Uncharted, true, false), 5);
        assert_eq!(navigation_difficulty(Route::Remote, true, true), 4);
    }
}
