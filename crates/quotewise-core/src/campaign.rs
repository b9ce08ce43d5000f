//! Brand campaign quotation.
//!
//! A brand fills in a campaign request form and gets a live cost quotation.
//! The calculator is total: unknown or empty categories fall back to the rate
//! card defaults so a half-filled form still produces a number.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rates::RateCard;

/// Audience-size bracket a brand wants its influencers drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FollowersRange {
    #[serde(rename = "1k-3k")]
    OneToThreeK,
    #[serde(rename = "3k-10k")]
    ThreeToTenK,
    #[serde(rename = "10k-20k")]
    TenToTwentyK,
    #[serde(rename = "20k-50k")]
    TwentyToFiftyK,
    #[serde(rename = "50k & above")]
    FiftyKAndAbove,
}

impl FollowersRange {
    pub const ALL: [FollowersRange; 5] = [
        FollowersRange::OneToThreeK,
        FollowersRange::ThreeToTenK,
        FollowersRange::TenToTwentyK,
        FollowersRange::TwentyToFiftyK,
        FollowersRange::FiftyKAndAbove,
    ];

    /// The form label for this range, e.g. `"50k & above"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FollowersRange::OneToThreeK => "1k-3k",
            FollowersRange::ThreeToTenK => "3k-10k",
            FollowersRange::TenToTwentyK => "10k-20k",
            FollowersRange::TwentyToFiftyK => "20k-50k",
            FollowersRange::FiftyKAndAbove => "50k & above",
        }
    }

    /// Exact, case-sensitive match against the form labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.label() == label)
    }
}

impl std::fmt::Display for FollowersRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How long each sponsored post must stay up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PostDuration {
    #[serde(rename = "1 day")]
    OneDay,
    #[serde(rename = "1 week")]
    OneWeek,
    #[serde(rename = "2 weeks")]
    TwoWeeks,
    #[serde(rename = "1 month")]
    OneMonth,
}

impl PostDuration {
    pub const ALL: [PostDuration; 4] = [
        PostDuration::OneDay,
        PostDuration::OneWeek,
        PostDuration::TwoWeeks,
        PostDuration::OneMonth,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PostDuration::OneDay => "1 day",
            PostDuration::OneWeek => "1 week",
            PostDuration::TwoWeeks => "2 weeks",
            PostDuration::OneMonth => "1 month",
        }
    }

    /// Exact, case-sensitive match against the form labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|duration| duration.label() == label)
    }
}

impl std::fmt::Display for PostDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Campaign parameters as submitted by a brand.
///
/// Categorical fields are kept as raw strings: the form may send labels this
/// build does not know about, and those must still price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandCampaignRequest {
    /// Selected platforms. Not priced.
    pub platforms: Vec<String>,
    pub influencers_min: u32,
    pub influencers_max: u32,
    pub followers_range: String,
    /// Free-form, e.g. `"15 posts monthly"`.
    pub post_frequency: String,
    pub post_duration: String,
    /// Not priced.
    pub location: String,
    /// Not priced.
    pub additional_locations: Vec<String>,
}

impl BrandCampaignRequest {
    /// `ceil((influencers_min + influencers_max) / 2)`.
    #[must_use]
    pub fn avg_influencers(&self) -> u32 {
        let sum = u64::from(self.influencers_min) + u64::from(self.influencers_max);
        // The mean of two u32 values always fits in a u32.
        u32::try_from(sum.div_ceil(2)).unwrap_or(u32::MAX)
    }
}

/// Cost breakdown for a campaign request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandQuotation {
    pub avg_influencers: u32,
    pub post_count: u32,
    pub base_rate: Decimal,
    pub duration_multiplier: Decimal,
    pub cost_per_influencer_per_post: Decimal,
    pub total_base_cost: Decimal,
    pub platform_fee: Decimal,
    pub total_cost: Decimal,
}

impl RateCard {
    /// Price a campaign request against this rate card.
    #[must_use]
    pub fn quote_brand(&self, request: &BrandCampaignRequest) -> BrandQuotation {
        let rates = &self.quotation;

        let avg_influencers = request.avg_influencers();
        let post_count = rates.post_count(&request.post_frequency);
        let base_rate = rates.base_rate(&request.followers_range);
        let duration_multiplier = rates.duration_multiplier(&request.post_duration);

        let cost_per_influencer_per_post = base_rate * duration_multiplier * rates.cost_unit;
        let total_base_cost = Decimal::from(avg_influencers)
            * Decimal::from(post_count)
            * cost_per_influencer_per_post;
        let platform_fee = total_base_cost * rates.platform_fee_rate;
        let total_cost = total_base_cost + platform_fee;

        BrandQuotation {
            avg_influencers,
            post_count,
            base_rate: base_rate.normalize(),
            duration_multiplier: duration_multiplier.normalize(),
            cost_per_influencer_per_post: cost_per_influencer_per_post.normalize(),
            total_base_cost: total_base_cost.normalize(),
            platform_fee: platform_fee.normalize(),
            total_cost: total_cost.normalize(),
        }
    }
}

/// Price a campaign request against the default rate card.
#[must_use]
pub fn calculate_brand_quotation(request: &BrandCampaignRequest) -> BrandQuotation {
    RateCard::default().quote_brand(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(followers_range: &str, post_duration: &str) -> BrandCampaignRequest {
        BrandCampaignRequest {
            platforms: vec!["instagram".to_string()],
            influencers_min: 2,
            influencers_max: 4,
            followers_range: followers_range.to_string(),
            post_frequency: "12 posts monthly".to_string(),
            post_duration: post_duration.to_string(),
            location: "Lagos".to_string(),
            additional_locations: vec![],
        }
    }

    #[test]
    fn avg_influencers_rounds_up() {
        let mut req = request("1k-3k", "1 day");
        req.influencers_min = 1;
        req.influencers_max = 2;
        assert_eq!(req.avg_influencers(), 2);

        req.influencers_min = 3;
        req.influencers_max = 3;
        assert_eq!(req.avg_influencers(), 3);

        req.influencers_min = 0;
        req.influencers_max = 0;
        assert_eq!(req.avg_influencers(), 0);
    }

    #[test]
    fn avg_influencers_never_below_min() {
        let mut req = request("1k-3k", "1 day");
        for min in 0..40 {
            for max in min..40 {
                req.influencers_min = min;
                req.influencers_max = max;
                let avg = req.avg_influencers();
                assert!(avg >= min, "avg {avg} < min {min} for max {max}");
                assert!(avg <= max, "avg {avg} > max {max} for min {min}");
            }
        }
    }

    #[test]
    fn avg_influencers_does_not_overflow() {
        let mut req = request("1k-3k", "1 day");
        req.influencers_min = u32::MAX;
        req.influencers_max = u32::MAX;
        assert_eq!(req.avg_influencers(), u32::MAX);
    }

    #[test]
    fn top_tier_month_long_costs_25000_per_post() {
        let quote = calculate_brand_quotation(&request("50k & above", "1 month"));
        assert_eq!(quote.base_rate, Decimal::from(10));
        assert_eq!(quote.duration_multiplier, Decimal::new(25, 1));
        assert_eq!(quote.cost_per_influencer_per_post, Decimal::from(25_000));
    }

    #[test]
    fn unknown_followers_range_uses_default_rate() {
        let quote = calculate_brand_quotation(&request("xyz", "1 day"));
        assert_eq!(quote.base_rate, Decimal::from(5));
    }

    #[test]
    fn unknown_post_duration_uses_default_multiplier() {
        let quote = calculate_brand_quotation(&request("1k-3k", "3 days"));
        assert_eq!(quote.duration_multiplier, Decimal::new(15, 1));
    }

    #[test]
    fn post_count_follows_frequency_marker() {
        let mut req = request("1k-3k", "1 day");
        req.post_frequency = "15 posts monthly".to_string();
        assert_eq!(calculate_brand_quotation(&req).post_count, 15);

        req.post_frequency = "12 posts monthly".to_string();
        assert_eq!(calculate_brand_quotation(&req).post_count, 12);

        req.post_frequency = String::new();
        assert_eq!(calculate_brand_quotation(&req).post_count, 12);
    }

    #[test]
    fn full_quotation_breakdown() {
        // avg 3, 12 posts, 3 * 1.5 * 1000 = 4500 per post
        let quote = calculate_brand_quotation(&request("3k-10k", "1 week"));
        assert_eq!(quote.avg_influencers, 3);
        assert_eq!(quote.post_count, 12);
        assert_eq!(quote.cost_per_influencer_per_post, Decimal::from(4_500));
        assert_eq!(quote.total_base_cost, Decimal::from(162_000));
        assert_eq!(quote.platform_fee, Decimal::from(32_400));
        assert_eq!(quote.total_cost, Decimal::from(194_400));
    }

    #[test]
    fn total_cost_is_base_plus_twenty_percent() {
        let markup = Decimal::new(12, 1);
        for range in FollowersRange::ALL {
            for duration in PostDuration::ALL {
                for (min, max) in [(0, 0), (1, 2), (5, 9), (10, 10)] {
                    let mut req = request(range.label(), duration.label());
                    req.influencers_min = min;
                    req.influencers_max = max;
                    req.post_frequency = "15 posts monthly".to_string();
                    let quote = calculate_brand_quotation(&req);
                    assert_eq!(quote.total_cost, quote.total_base_cost * markup);
                    assert_eq!(
                        quote.total_base_cost,
                        Decimal::from(quote.avg_influencers)
                            * Decimal::from(quote.post_count)
                            * quote.cost_per_influencer_per_post
                    );
                }
            }
        }
    }

    #[test]
    fn empty_request_still_prices() {
        let quote = calculate_brand_quotation(&BrandCampaignRequest::default());
        assert_eq!(quote.avg_influencers, 0);
        assert_eq!(quote.post_count, 12);
        assert_eq!(quote.cost_per_influencer_per_post, Decimal::from(7_500));
        assert_eq!(quote.total_cost, Decimal::ZERO);
    }

    #[test]
    fn labels_round_trip_through_from_label() {
        for range in FollowersRange::ALL {
            assert_eq!(FollowersRange::from_label(range.label()), Some(range));
        }
        for duration in PostDuration::ALL {
            assert_eq!(PostDuration::from_label(duration.label()), Some(duration));
        }
        assert_eq!(FollowersRange::from_label("50K & Above"), None);
    }

    #[test]
    fn request_deserializes_from_partial_form() {
        let req: BrandCampaignRequest = serde_json::from_str(
            r#"{"influencers_min": 4, "influencers_max": 7, "followers_range": "20k-50k"}"#,
        )
        .expect("partial form should deserialize");
        assert_eq!(req.avg_influencers(), 6);
        assert!(req.post_duration.is_empty());
        let quote = calculate_brand_quotation(&req);
        assert_eq!(quote.cost_per_influencer_per_post, Decimal::from(12_000));
    }

    #[test]
    fn quotation_serializes_amounts_as_strings() {
        let quote = calculate_brand_quotation(&request("50k & above", "1 month"));
        let json = serde_json::to_value(&quote).expect("serialize");
        assert_eq!(json["cost_per_influencer_per_post"], "25000");
        assert_eq!(json["post_count"], 12);
    }
}
