//! `quote` command handlers: price a campaign or project influencer earnings
//! and print the breakdown as JSON.

use clap::{Args, Subcommand};
use quotewise_core::{BrandCampaignRequest, InfluencerProfile, PlatformData, RateCard};

/// Sub-commands available under `quote`.
#[derive(Debug, Subcommand)]
pub enum QuoteCommands {
    /// Price a brand campaign request
    Brand(BrandArgs),
    /// Project an influencer's earnings
    Influencer(InfluencerArgs),
}

#[derive(Debug, Args)]
pub struct BrandArgs {
    /// Fewest influencers the brand wants
    #[arg(long)]
    pub influencers_min: u32,
    /// Most influencers the brand wants
    #[arg(long)]
    pub influencers_max: u32,
    /// Followers range label, e.g. "10k-20k" or "50k & above"
    #[arg(long, default_value = "")]
    pub followers_range: String,
    /// Posting frequency, e.g. "15 posts monthly"
    #[arg(long, default_value = "")]
    pub post_frequency: String,
    /// Post duration label, e.g. "1 week"
    #[arg(long, default_value = "")]
    pub post_duration: String,
    /// Platform to run on (repeatable)
    #[arg(long = "platform")]
    pub platforms: Vec<String>,
    #[arg(long, default_value = "")]
    pub location: String,
}

#[derive(Debug, Args)]
pub struct InfluencerArgs {
    /// Platform the audience lives on, e.g. "instagram", "tiktok" or "x"
    #[arg(long)]
    pub platform: String,
    /// Follower count as typed into the form, e.g. "75000"
    #[arg(long)]
    pub followers: String,
    #[arg(long, default_value = "")]
    pub location: String,
    /// Content niche (repeatable)
    #[arg(long = "niche")]
    pub niches: Vec<String>,
    #[arg(long, default_value = "")]
    pub name: String,
}

impl From<BrandArgs> for BrandCampaignRequest {
    fn from(args: BrandArgs) -> Self {
        Self {
            platforms: args.platforms,
            influencers_min: args.influencers_min,
            influencers_max: args.influencers_max,
            followers_range: args.followers_range,
            post_frequency: args.post_frequency,
            post_duration: args.post_duration,
            location: args.location,
            additional_locations: Vec::new(),
        }
    }
}

impl From<InfluencerArgs> for InfluencerProfile {
    fn from(args: InfluencerArgs) -> Self {
        // Profile keys are lower-case; the follower string stays raw so it is
        // parsed exactly as a form submission would be.
        let platform = PlatformData {
            followers: args.followers,
            ..PlatformData::default()
        };
        Self {
            name: args.name,
            location: args.location,
            niches: args.niches,
            platforms: [(args.platform.trim().to_lowercase(), platform)]
                .into_iter()
                .collect(),
            ..Self::default()
        }
    }
}

/// Run a `quote` sub-command against `rate_card` and print the result.
///
/// # Errors
///
/// Returns an error only if the result cannot be serialized.
pub(crate) fn run_quote(rate_card: &RateCard, command: QuoteCommands) -> anyhow::Result<()> {
    let output = match command {
        QuoteCommands::Brand(args) => {
            let request = BrandCampaignRequest::from(args);
            if request.influencers_min > request.influencers_max {
                tracing::warn!(
                    min = request.influencers_min,
                    max = request.influencers_max,
                    "influencers_min exceeds influencers_max; quoting anyway"
                );
            }
            serde_json::to_string_pretty(&rate_card.quote_brand(&request))?
        }
        QuoteCommands::Influencer(args) => {
            let profile = InfluencerProfile::from(args);
            let earnings = rate_card.project_earnings(&profile);
            if earnings.source_platform.is_none() {
                tracing::warn!("no priced platform given; projecting with 0 followers");
            }
            serde_json::to_string_pretty(&earnings)?
        }
    };

    println!("{output}");
    Ok(())
}
