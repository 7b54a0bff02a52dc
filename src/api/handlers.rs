use crate::application::lending::{
    ServiceDependencies, add_item as execute_add_item, add_member as execute_add_member,
    borrow_item as execute_borrow_item, list_active_loans as execute_list_active_loans,
    list_available_items as execute_list_available_items, return_item as execute_return_item,
};
use crate::domain::commands::{BorrowItem, ReturnItem};
use crate::domain::member::Member;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{
        BorrowRequest, ItemResponse, LoanCreatedResponse, LoanResponse, LoanReturnedResponse,
        MemberResponse, NewItemRequest, NewMemberRequest,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /loans - 新しい貸出を作成
///
/// 強制されるビジネスルール:
/// - 会員が存在し有効であること
/// - 資料が存在し貸出可能であること
/// - 会員の貸出中の件数が上限（3点）未満であること
pub async fn create_loan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BorrowRequest>,
) -> Result<(StatusCode, Json<LoanCreatedResponse>), ApiError> {
    let cmd = BorrowItem {
        member_id: req.member_id,
        item_id: req.item_id,
        borrowed_on: Utc::now().date_naive(),
    };

    let loan_id = execute_borrow_item(&state.service_deps, cmd.clone()).await?;

    let response = LoanCreatedResponse {
        loan_id: loan_id.value(),
        member_id: cmd.member_id,
        item_id: cmd.item_id,
        borrowed_on: cmd.borrowed_on,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /loans/:id/return - 貸出を返却
///
/// 強制されるビジネスルール:
/// - 貸出が存在すること
/// - 既に返却済みでないこと
pub async fn return_loan(
    State(state): State<Arc<AppState>>,
    Path(loan_id): Path<i64>,
) -> Result<(StatusCode, Json<LoanReturnedResponse>), ApiError> {
    let cmd = ReturnItem {
        loan_id,
        returned_on: Utc::now().date_naive(),
    };

    execute_return_item(&state.service_deps, cmd.clone()).await?;

    let response = LoanReturnedResponse {
        loan_id: cmd.loan_id,
        returned_on: cmd.returned_on,
    };

    Ok((StatusCode::OK, Json(response)))
}

/// POST /items - 資料をカタログに追加
///
/// 構築時バリデーション（ID・タイトル・種別固有属性）のみ。
/// ビジネスルールの検証はしない。
pub async fn add_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let item = req.into_item().map_err(crate::application::lending::LendingError::from)?;
    let response = ItemResponse::from(item.clone());

    execute_add_item(&state.service_deps, item).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /members - 会員を登録
pub async fn add_member(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let member = Member::new(req.id, req.name)
        .map_err(crate::application::lending::LendingError::from)?;
    let response = MemberResponse::from(member.clone());

    execute_add_member(&state.service_deps, member).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /items/available - 貸出可能な資料の一覧
pub async fn list_available_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = execute_list_available_items(&state.service_deps).await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// GET /members/:id/loans - 会員の貸出中の貸出一覧
pub async fn list_member_loans(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<i64>,
) -> Result<Json<Vec<LoanResponse>>, ApiError> {
    let loans = execute_list_active_loans(&state.service_deps, member_id).await?;
    Ok(Json(loans.into_iter().map(LoanResponse::from).collect()))
}
