//! Pricing constants for both calculators.
//!
//! Every number the quotation and earnings calculators use lives on a
//! [`RateCard`]. `RateCard::default()` is the production card; an operator can
//! retune pricing by loading a YAML card instead, without touching the
//! calculation code.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::campaign::{FollowersRange, PostDuration};
use crate::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateCard {
    pub quotation: QuotationRates,
    pub earnings: EarningsRates,
}

/// Rates used to price a brand's campaign request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuotationRates {
    pub base_rates: BTreeMap<FollowersRange, Decimal>,
    /// Applied when the followers range label is missing or unrecognized.
    pub default_base_rate: Decimal,
    pub duration_multipliers: BTreeMap<PostDuration, Decimal>,
    /// Applied when the post duration label is missing or unrecognized.
    pub default_duration_multiplier: Decimal,
    /// Scales `base_rate * duration_multiplier` into currency units.
    pub cost_unit: Decimal,
    /// Substring of the post frequency that selects the high-frequency package.
    pub high_frequency_marker: String,
    pub high_frequency_post_count: u32,
    pub default_post_count: u32,
    /// Markup on the base cost, as a fraction (`0.2` is 20%).
    pub platform_fee_rate: Decimal,
}

/// A follower-count threshold and the per-post fee it unlocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FollowerTier {
    pub min_followers: i64,
    pub fee: Decimal,
}

/// Rates used to project an influencer's earnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EarningsRates {
    /// Evaluated top-down; the first tier whose threshold is met wins.
    pub follower_tiers: Vec<FollowerTier>,
    pub default_follower_fee: Decimal,
    pub impression_fee: Decimal,
    pub niche_fee: Decimal,
    /// Fee for locations matching one of `regional_locations`.
    pub regional_location_fee: Decimal,
    pub default_location_fee: Decimal,
    /// Lower-case substrings matched anywhere in the lower-cased location.
    pub regional_locations: Vec<String>,
    /// Naira per unit of base earnings.
    pub naira_exchange_rate: Decimal,
    pub max_posts_per_month: u32,
}

const REGIONAL_LOCATIONS: [&str; 18] = [
    "nigeria",
    "ghana",
    "kenya",
    "south africa",
    "africa",
    "egypt",
    "morocco",
    "china",
    "india",
    "japan",
    "korea",
    "thailand",
    "singapore",
    "malaysia",
    "indonesia",
    "philippines",
    "vietnam",
    "asia",
];

impl Default for QuotationRates {
    fn default() -> Self {
        let base_rates = BTreeMap::from([
            (FollowersRange::OneToThreeK, Decimal::from(2)),
            (FollowersRange::ThreeToTenK, Decimal::from(3)),
            (FollowersRange::TenToTwentyK, Decimal::from(5)),
            (FollowersRange::TwentyToFiftyK, Decimal::from(8)),
            (FollowersRange::FiftyKAndAbove, Decimal::from(10)),
        ]);
        let duration_multipliers = BTreeMap::from([
            (PostDuration::OneDay, Decimal::ONE),
            (PostDuration::OneWeek, Decimal::new(15, 1)),
            (PostDuration::TwoWeeks, Decimal::from(2)),
            (PostDuration::OneMonth, Decimal::new(25, 1)),
        ]);

        Self {
            base_rates,
            default_base_rate: Decimal::from(5),
            duration_multipliers,
            default_duration_multiplier: Decimal::new(15, 1),
            cost_unit: Decimal::from(1000),
            high_frequency_marker: "15 posts".to_string(),
            high_frequency_post_count: 15,
            default_post_count: 12,
            platform_fee_rate: Decimal::new(2, 1),
        }
    }
}

impl Default for EarningsRates {
    fn default() -> Self {
        // The below-1000 default matches the 1000 tier. Product has not
        // confirmed whether micro accounts should earn less.
        let follower_tiers = [(50_000, 8), (20_000, 7), (10_000, 5), (3_000, 4), (1_000, 2)]
            .into_iter()
            .map(|(min_followers, fee)| FollowerTier {
                min_followers,
                fee: Decimal::from(fee),
            })
            .collect();

        Self {
            follower_tiers,
            default_follower_fee: Decimal::from(2),
            impression_fee: Decimal::ONE,
            niche_fee: Decimal::new(15, 1),
            regional_location_fee: Decimal::new(15, 1),
            default_location_fee: Decimal::new(25, 1),
            regional_locations: REGIONAL_LOCATIONS.iter().map(ToString::to_string).collect(),
            naira_exchange_rate: Decimal::from(1485),
            max_posts_per_month: 10,
        }
    }
}

impl QuotationRates {
    /// Base rate for a followers range label, or the default for unknown labels.
    #[must_use]
    pub fn base_rate(&self, followers_range: &str) -> Decimal {
        FollowersRange::from_label(followers_range)
            .and_then(|range| self.base_rates.get(&range).copied())
            .unwrap_or(self.default_base_rate)
    }

    /// Duration multiplier for a post duration label, or the default for unknown labels.
    #[must_use]
    pub fn duration_multiplier(&self, post_duration: &str) -> Decimal {
        PostDuration::from_label(post_duration)
            .and_then(|duration| self.duration_multipliers.get(&duration).copied())
            .unwrap_or(self.default_duration_multiplier)
    }

    #[must_use]
    pub fn post_count(&self, post_frequency: &str) -> u32 {
        if post_frequency.contains(self.high_frequency_marker.as_str()) {
            self.high_frequency_post_count
        } else {
            self.default_post_count
        }
    }
}

impl EarningsRates {
    #[must_use]
    pub fn follower_fee(&self, followers: i64) -> Decimal {
        self.follower_tiers
            .iter()
            .find(|tier| followers >= tier.min_followers)
            .map_or(self.default_follower_fee, |tier| tier.fee)
    }

    #[must_use]
    pub fn is_regional(&self, location: &str) -> bool {
        let location = location.to_lowercase();
        self.regional_locations
            .iter()
            .any(|token| location.contains(token.as_str()))
    }

    #[must_use]
    pub fn location_fee(&self, location: &str) -> Decimal {
        if self.is_regional(location) {
            self.regional_location_fee
        } else {
            self.default_location_fee
        }
    }
}

/// Load and validate a rate card from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_rate_card(path: &Path) -> Result<RateCard, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RateCardIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let card: RateCard = serde_yaml::from_str(&content)?;
    validate_rate_card(&card)?;

    Ok(card)
}

fn ensure_positive(name: &str, value: Decimal) -> Result<(), ConfigError> {
    if value > Decimal::ZERO {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn validate_rate_card(card: &RateCard) -> Result<(), ConfigError> {
    let q = &card.quotation;

    for (range, rate) in &q.base_rates {
        ensure_positive(&format!("base rate for '{range}'"), *rate)?;
    }
    ensure_positive("default_base_rate", q.default_base_rate)?;
    for (duration, multiplier) in &q.duration_multipliers {
        ensure_positive(&format!("duration multiplier for '{duration}'"), *multiplier)?;
    }
    ensure_positive("default_duration_multiplier", q.default_duration_multiplier)?;
    ensure_positive("cost_unit", q.cost_unit)?;

    if q.high_frequency_marker.trim().is_empty() {
        return Err(ConfigError::Validation(
            "high_frequency_marker must be non-empty".to_string(),
        ));
    }
    if q.high_frequency_post_count == 0 || q.default_post_count == 0 {
        return Err(ConfigError::Validation(
            "post counts must be at least 1".to_string(),
        ));
    }
    if q.platform_fee_rate < Decimal::ZERO || q.platform_fee_rate >= Decimal::ONE {
        return Err(ConfigError::Validation(format!(
            "platform_fee_rate must be in [0, 1), got {}",
            q.platform_fee_rate
        )));
    }

    let e = &card.earnings;

    if e.follower_tiers.is_empty() {
        return Err(ConfigError::Validation(
            "follower_tiers must be non-empty".to_string(),
        ));
    }
    for tier in &e.follower_tiers {
        ensure_positive(
            &format!("fee for the {} follower tier", tier.min_followers),
            tier.fee,
        )?;
    }
    if let Some(pair) = e
        .follower_tiers
        .windows(2)
        .find(|pair| pair[0].min_followers <= pair[1].min_followers)
    {
        return Err(ConfigError::Validation(format!(
            "follower_tiers must be strictly descending; {} is followed by {}",
            pair[0].min_followers, pair[1].min_followers
        )));
    }
    ensure_positive("default_follower_fee", e.default_follower_fee)?;
    ensure_positive("impression_fee", e.impression_fee)?;
    ensure_positive("niche_fee", e.niche_fee)?;
    ensure_positive("regional_location_fee", e.regional_location_fee)?;
    ensure_positive("default_location_fee", e.default_location_fee)?;
    ensure_positive("naira_exchange_rate", e.naira_exchange_rate)?;
    if e.max_posts_per_month == 0 {
        return Err(ConfigError::Validation(
            "max_posts_per_month must be at least 1".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for token in &e.regional_locations {
        if token.is_empty() || token.trim() != token || token.to_lowercase() != *token {
            return Err(ConfigError::Validation(format!(
                "regional location '{token}' must be non-empty, trimmed and lower-case"
            )));
        }
        if !seen.insert(token.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate regional location: '{token}'"
            )));
        }
    }

    ensure_headroom(card)
}

/// Reject cards whose largest possible figure does not fit in a `Decimal`.
///
/// Every factor is positive, so the product of the per-table maxima bounds
/// every quotation and projection the card can produce. Cards that pass
/// cannot overflow in `quote_brand` or `project_earnings`.
fn ensure_headroom(card: &RateCard) -> Result<(), ConfigError> {
    let q = &card.quotation;
    let max_base_rate = q.base_rates.values().copied().fold(q.default_base_rate, Ord::max);
    let max_multiplier = q
        .duration_multipliers
        .values()
        .copied()
        .fold(q.default_duration_multiplier, Ord::max);
    let max_posts = Decimal::from(q.high_frequency_post_count.max(q.default_post_count));

    let max_total_cost = max_base_rate
        .checked_mul(max_multiplier)
        .and_then(|cost| cost.checked_mul(q.cost_unit))
        .and_then(|cost| cost.checked_mul(max_posts))
        .and_then(|cost| cost.checked_mul(Decimal::from(u32::MAX)))
        .and_then(|base| {
            base.checked_mul(q.platform_fee_rate)
                .and_then(|fee| base.checked_add(fee))
        });
    if max_total_cost.is_none() {
        return Err(ConfigError::Validation(format!(
            "quotation rates overflow for a campaign of {} influencers; lower cost_unit or the rate tables",
            u32::MAX
        )));
    }

    let e = &card.earnings;
    let max_follower_fee = e
        .follower_tiers
        .iter()
        .map(|tier| tier.fee)
        .fold(e.default_follower_fee, Ord::max);
    let max_location_fee = e.regional_location_fee.max(e.default_location_fee);

    let max_monthly_naira = max_follower_fee
        .checked_mul(e.impression_fee)
        .and_then(|fee| fee.checked_mul(max_location_fee))
        .and_then(|fee| fee.checked_mul(e.niche_fee))
        .and_then(|per_post| {
            per_post.checked_mul(e.naira_exchange_rate)?;
            per_post.checked_mul(Decimal::from(e.max_posts_per_month))
        })
        .and_then(|monthly| monthly.checked_mul(e.naira_exchange_rate));
    if max_monthly_naira.is_none() {
        return Err(ConfigError::Validation(
            "earnings rates overflow at the top follower tier; lower naira_exchange_rate or the fees"
                .to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "rates_test.rs"]
mod tests;
