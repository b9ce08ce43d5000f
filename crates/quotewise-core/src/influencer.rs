//! Influencer earnings projection.
//!
//! Earnings are a product of independent fees: audience size, impressions,
//! geography and niche. Only one platform's audience feeds the follower fee,
//! chosen by [`PLATFORM_PRIORITY`].

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rates::RateCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Twitter,
    TikTok,
    YouTube,
}

/// Order in which platforms are consulted for the follower count. The first
/// one present on a profile wins; the rest are ignored.
pub const PLATFORM_PRIORITY: [Platform; 4] = [
    Platform::Instagram,
    Platform::Twitter,
    Platform::TikTok,
    Platform::YouTube,
];

impl Platform {
    /// Profile keys this platform is registered under. Twitter also answers to `x`.
    #[must_use]
    pub fn identifiers(self) -> &'static [&'static str] {
        match self {
            Platform::Instagram => &["instagram"],
            Platform::Twitter => &["twitter", "x"],
            Platform::TikTok => &["tiktok"],
            Platform::YouTube => &["youtube"],
        }
    }

    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        PLATFORM_PRIORITY
            .into_iter()
            .find(|platform| platform.identifiers().contains(&identifier))
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifiers()[0])
    }
}

/// Audience data for one platform, as typed into the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformData {
    /// Raw follower count, e.g. `"75000"`.
    pub followers: String,
    pub url: String,
    pub impressions: String,
    /// Link to a screenshot or analytics export backing the numbers.
    pub proof: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfluencerProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub location: String,
    /// Keyed by platform identifier (`instagram`, `twitter`, `x`, `tiktok`,
    /// `youtube`). Unknown keys are kept but never priced.
    pub platforms: BTreeMap<String, PlatformData>,
    /// Not priced; the niche fee is flat.
    pub niches: Vec<String>,
}

impl InfluencerProfile {
    /// The highest-priority platform present on this profile.
    #[must_use]
    pub fn primary_platform(&self) -> Option<(Platform, &PlatformData)> {
        PLATFORM_PRIORITY.into_iter().find_map(|platform| {
            platform
                .identifiers()
                .iter()
                .find_map(|id| self.platforms.get(*id))
                .map(|data| (platform, data))
        })
    }
}

/// Projected payout for an influencer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluencerEarnings {
    /// Platform whose followers fed the follower fee, if any.
    pub source_platform: Option<Platform>,
    pub followers_count: i64,
    pub follower_fee: Decimal,
    pub impression_fee: Decimal,
    pub location_fee: Decimal,
    pub niche_fee: Decimal,
    pub earnings_per_post: Decimal,
    pub earnings_per_post_naira: Decimal,
    pub max_monthly_earnings: Decimal,
    pub max_monthly_earnings_naira: Decimal,
}

/// Parse a follower count the way the registration form does: skip leading
/// whitespace, accept an optional sign, then read leading digits and ignore
/// the rest. No digits means `0`. Values beyond `i64` saturate.
#[must_use]
pub fn parse_followers(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let magnitude = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

impl RateCard {
    /// Project an influencer's earnings against this rate card.
    #[must_use]
    pub fn project_earnings(&self, profile: &InfluencerProfile) -> InfluencerEarnings {
        let rates = &self.earnings;

        let primary = profile.primary_platform();
        let followers_count = primary.map_or(0, |(_, data)| parse_followers(&data.followers));

        let follower_fee = rates.follower_fee(followers_count);
        let impression_fee = rates.impression_fee;
        let location_fee = rates.location_fee(&profile.location);
        let niche_fee = rates.niche_fee;

        let earnings_per_post = follower_fee * impression_fee * location_fee * niche_fee;
        let max_monthly_earnings = earnings_per_post * Decimal::from(rates.max_posts_per_month);

        InfluencerEarnings {
            source_platform: primary.map(|(platform, _)| platform),
            followers_count,
            follower_fee: follower_fee.normalize(),
            impression_fee: impression_fee.normalize(),
            location_fee: location_fee.normalize(),
            niche_fee: niche_fee.normalize(),
            earnings_per_post: earnings_per_post.normalize(),
            earnings_per_post_naira: (earnings_per_post * rates.naira_exchange_rate).normalize(),
            max_monthly_earnings: max_monthly_earnings.normalize(),
            max_monthly_earnings_naira: (max_monthly_earnings * rates.naira_exchange_rate)
                .normalize(),
        }
    }
}

/// Project an influencer's earnings against the default rate card.
#[must_use]
pub fn calculate_influencer_earnings(profile: &InfluencerProfile) -> InfluencerEarnings {
    RateCard::default().project_earnings(profile)
}

#[cfg(test)]
#[path = "influencer_test.rs"]
mod tests;
