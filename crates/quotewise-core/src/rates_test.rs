use std::path::Path;

use super::*;

fn shipped_rate_card_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("rates.yaml")
}

#[test]
fn default_card_is_valid() {
    assert!(validate_rate_card(&RateCard::default()).is_ok());
}

#[test]
fn shipped_rate_card_matches_defaults() {
    let path = shipped_rate_card_path();
    assert!(path.exists(), "rates.yaml missing at {path:?}");
    let card = load_rate_card(&path);
    assert!(card.is_ok(), "failed to load rates.yaml: {card:?}");
    assert_eq!(card.unwrap(), RateCard::default());
}

#[test]
fn base_rate_table() {
    let rates = QuotationRates::default();
    assert_eq!(rates.base_rate("1k-3k"), Decimal::from(2));
    assert_eq!(rates.base_rate("3k-10k"), Decimal::from(3));
    assert_eq!(rates.base_rate("10k-20k"), Decimal::from(5));
    assert_eq!(rates.base_rate("20k-50k"), Decimal::from(8));
    assert_eq!(rates.base_rate("50k & above"), Decimal::from(10));
    assert_eq!(rates.base_rate("xyz"), Decimal::from(5));
    assert_eq!(rates.base_rate(""), Decimal::from(5));
}

#[test]
fn duration_multiplier_table() {
    let rates = QuotationRates::default();
    assert_eq!(rates.duration_multiplier("1 day"), Decimal::ONE);
    assert_eq!(rates.duration_multiplier("1 week"), Decimal::new(15, 1));
    assert_eq!(rates.duration_multiplier("2 weeks"), Decimal::from(2));
    assert_eq!(rates.duration_multiplier("1 month"), Decimal::new(25, 1));
    assert_eq!(rates.duration_multiplier("forever"), Decimal::new(15, 1));
}

#[test]
fn post_count_matches_substring_anywhere() {
    let rates = QuotationRates::default();
    assert_eq!(rates.post_count("about 15 posts a month"), 15);
    assert_eq!(rates.post_count("15 Posts"), 12);
    assert_eq!(rates.post_count("30 posts monthly"), 12);
}

#[test]
fn missing_table_entry_uses_default() {
    let mut rates = QuotationRates::default();
    rates.base_rates.remove(&FollowersRange::OneToThreeK);
    assert_eq!(rates.base_rate("1k-3k"), Decimal::from(5));
}

#[test]
fn retuned_card_changes_quote() {
    let mut card = RateCard::default();
    card.quotation.platform_fee_rate = Decimal::new(1, 1);
    card.quotation
        .base_rates
        .insert(FollowersRange::FiftyKAndAbove, Decimal::from(12));
    let quote = card.quote_brand(&crate::BrandCampaignRequest {
        influencers_min: 1,
        influencers_max: 1,
        followers_range: "50k & above".to_string(),
        post_duration: "1 day".to_string(),
        ..Default::default()
    });
    assert_eq!(quote.cost_per_influencer_per_post, Decimal::from(12_000));
    assert_eq!(quote.total_base_cost, Decimal::from(144_000));
    assert_eq!(quote.platform_fee, Decimal::from(14_400));
}

#[test]
fn validate_rejects_unsorted_tiers() {
    let mut card = RateCard::default();
    card.earnings.follower_tiers.swap(0, 1);
    let err = validate_rate_card(&card).unwrap_err();
    assert!(err.to_string().contains("strictly descending"), "{err}");
}

#[test]
fn validate_rejects_duplicate_tier_threshold() {
    let mut card = RateCard::default();
    card.earnings.follower_tiers[1].min_followers = 50_000;
    let err = validate_rate_card(&card).unwrap_err();
    assert!(err.to_string().contains("strictly descending"), "{err}");
}

#[test]
fn validate_rejects_empty_tiers() {
    let mut card = RateCard::default();
    card.earnings.follower_tiers.clear();
    let err = validate_rate_card(&card).unwrap_err();
    assert!(err.to_string().contains("non-empty"), "{err}");
}

#[test]
fn validate_rejects_full_platform_fee() {
    let mut card = RateCard::default();
    card.quotation.platform_fee_rate = Decimal::ONE;
    let err = validate_rate_card(&card).unwrap_err();
    assert!(err.to_string().contains("platform_fee_rate"), "{err}");
}

#[test]
fn validate_rejects_zero_rate() {
    let mut card = RateCard::default();
    card.quotation
        .duration_multipliers
        .insert(PostDuration::OneDay, Decimal::ZERO);
    let err = validate_rate_card(&card).unwrap_err();
    assert!(err.to_string().contains("1 day"), "{err}");
}

#[test]
fn validate_rejects_negative_exchange_rate() {
    let mut card = RateCard::default();
    card.earnings.naira_exchange_rate = Decimal::from(-1);
    let err = validate_rate_card(&card).unwrap_err();
    assert!(err.to_string().contains("naira_exchange_rate"), "{err}");
}

#[test]
fn validate_rejects_uppercase_location() {
    let mut card = RateCard::default();
    card.earnings.regional_locations.push("Brazil".to_string());
    let err = validate_rate_card(&card).unwrap_err();
    assert!(err.to_string().contains("lower-case"), "{err}");
}

#[test]
fn validate_rejects_duplicate_location() {
    let mut card = RateCard::default();
    card.earnings.regional_locations.push("ghana".to_string());
    let err = validate_rate_card(&card).unwrap_err();
    assert!(err.to_string().contains("duplicate"), "{err}");
}

#[test]
fn validate_rejects_blank_frequency_marker() {
    let mut card = RateCard::default();
    card.quotation.high_frequency_marker = " ".to_string();
    let err = validate_rate_card(&card).unwrap_err();
    assert!(err.to_string().contains("high_frequency_marker"), "{err}");
}

#[test]
fn validate_rejects_cost_unit_that_overflows_large_campaign() {
    let mut card = RateCard::default();
    card.quotation.cost_unit = Decimal::from_i128_with_scale(10_i128.pow(24), 0);
    let err = validate_rate_card(&card).unwrap_err();
    assert!(err.to_string().contains("quotation rates overflow"), "{err}");
}

#[test]
fn validate_rejects_exchange_rate_that_overflows_monthly_naira() {
    let mut card = RateCard::default();
    card.earnings.naira_exchange_rate = Decimal::from_i128_with_scale(10_i128.pow(27), 0);
    let err = validate_rate_card(&card).unwrap_err();
    assert!(err.to_string().contains("earnings rates overflow"), "{err}");
}

#[test]
fn default_card_quotes_largest_campaign_without_overflow() {
    let quote = RateCard::default().quote_brand(&crate::BrandCampaignRequest {
        influencers_min: u32::MAX,
        influencers_max: u32::MAX,
        followers_range: "50k & above".to_string(),
        post_frequency: "15 posts monthly".to_string(),
        post_duration: "1 month".to_string(),
        ..Default::default()
    });
    assert_eq!(
        quote.total_base_cost,
        Decimal::from(u32::MAX) * Decimal::from(15) * Decimal::from(25_000)
    );
    assert_eq!(quote.total_cost, quote.total_base_cost * Decimal::new(12, 1));
}

#[test]
fn parse_rejects_unknown_fields() {
    let mut yaml = serde_yaml::to_string(&RateCard::default()).expect("serialize");
    yaml.push_str("surge_pricing: true\n");
    assert!(serde_yaml::from_str::<RateCard>(&yaml).is_err());
}

#[test]
fn parse_rejects_unknown_followers_range_key() {
    let yaml = serde_yaml::to_string(&RateCard::default())
        .expect("serialize")
        .replace("50k & above", "100k+");
    assert!(serde_yaml::from_str::<RateCard>(&yaml).is_err());
}

#[test]
fn yaml_round_trip_preserves_card() {
    let yaml = serde_yaml::to_string(&RateCard::default()).expect("serialize");
    let card: RateCard = serde_yaml::from_str(&yaml).expect("parse");
    assert_eq!(card, RateCard::default());
}

#[test]
fn load_missing_file_is_io_error() {
    let err = load_rate_card(Path::new("/nonexistent/quotewise/rates.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::RateCardIo { .. }), "{err:?}");
}
