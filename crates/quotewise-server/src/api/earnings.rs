use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use quotewise_core::{InfluencerEarnings, InfluencerProfile};

use crate::middleware::RequestId;

use super::{map_json_rejection, ApiError, ApiResponse, AppState, ResponseMeta};

/// `POST /api/v1/earnings/influencer` — projected earnings for a registration form.
pub(super) async fn project_influencer_earnings(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<InfluencerProfile>, JsonRejection>,
) -> Result<Json<ApiResponse<InfluencerEarnings>>, ApiError> {
    let Json(profile) = payload.map_err(|e| map_json_rejection(req_id.0.clone(), &e))?;

    let earnings = state.rate_card.project_earnings(&profile);

    if earnings.source_platform.is_none() && !profile.platforms.is_empty() {
        let platforms: Vec<&String> = profile.platforms.keys().collect();
        tracing::debug!(
            request_id = %req_id.0,
            platforms = ?platforms,
            "no priced platform on profile; lowest follower tier applied"
        );
    }

    tracing::debug!(
        request_id = %req_id.0,
        followers = earnings.followers_count,
        earnings_per_post = %earnings.earnings_per_post,
        "influencer earnings computed"
    );

    Ok(Json(ApiResponse {
        data: earnings,
        meta: ResponseMeta::new(req_id.0),
    }))
}
