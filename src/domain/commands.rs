use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// コマンド：資料を借りる
///
/// IDはプレゼンテーション層から受け取った生の値のまま運び、
/// 検証はオーケストレータが行う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowItem {
    pub member_id: i64,
    pub item_id: i64,
    pub borrowed_on: NaiveDate,
}

/// コマンド：貸出を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnItem {
    pub loan_id: i64,
    pub returned_on: NaiveDate,
}
