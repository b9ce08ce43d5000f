pub mod app_config;
pub mod campaign;
pub mod config;
pub mod influencer;
pub mod rates;

pub use app_config::{AppConfig, Environment};
pub use campaign::{
    calculate_brand_quotation, BrandCampaignRequest, BrandQuotation, FollowersRange, PostDuration,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use influencer::{
    calculate_influencer_earnings, parse_followers, InfluencerEarnings, InfluencerProfile,
    Platform, PlatformData, PLATFORM_PRIORITY,
};
pub use rates::{load_rate_card, EarningsRates, FollowerTier, QuotationRates, RateCard};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read rate card at {path}: {source}")]
    RateCardIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rate card: {0}")]
    RateCardParse(#[from] serde_yaml::Error),

    #[error("rate card validation failed: {0}")]
    Validation(String),
}
