use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use quotewise_core::{BrandCampaignRequest, BrandQuotation, FollowersRange, PostDuration};

use crate::middleware::RequestId;

use super::{map_json_rejection, ApiError, ApiResponse, AppState, ResponseMeta};

/// `POST /api/v1/quotations/brand` — live cost quotation for a campaign form.
///
/// Never fails on field content: unknown categories price at the rate card
/// defaults. Only an unparseable body is rejected.
pub(super) async fn quote_brand(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<BrandCampaignRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<BrandQuotation>>, ApiError> {
    let Json(request) = payload.map_err(|e| map_json_rejection(req_id.0.clone(), &e))?;

    if !request.followers_range.is_empty()
        && FollowersRange::from_label(&request.followers_range).is_none()
    {
        tracing::debug!(
            followers_range = %request.followers_range,
            "unrecognized followers range; default base rate applied"
        );
    }
    if !request.post_duration.is_empty()
        && PostDuration::from_label(&request.post_duration).is_none()
    {
        tracing::debug!(
            post_duration = %request.post_duration,
            "unrecognized post duration; default multiplier applied"
        );
    }

    let quotation = state.rate_card.quote_brand(&request);

    tracing::debug!(
        request_id = %req_id.0,
        avg_influencers = quotation.avg_influencers,
        post_count = quotation.post_count,
        total_cost = %quotation.total_cost,
        "brand quotation computed"
    );

    Ok(Json(ApiResponse {
        data: quotation,
        meta: ResponseMeta::new(req_id.0),
    }))
}
