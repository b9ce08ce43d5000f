use axum::{extract::State, Extension, Json};
use quotewise_core::RateCard;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

/// `GET /api/v1/rate-card` — the rates the server is pricing with, so the
/// form can show its tables without hard-coding them.
pub(super) async fn get_rate_card(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<RateCard>> {
    Json(ApiResponse {
        data: RateCard::clone(&state.rate_card),
        meta: ResponseMeta::new(req_id.0),
    })
}
