use chrono::NaiveDate;
use thiserror::Error;

/// エンティティ構築時のバリデーションエラー
///
/// 不正な引数（非正のID、空文字列、非正の数値属性）を型の構築時点で拒否する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 識別子が狭義に正でない
    #[error("identifier must be strictly positive, got {0}")]
    NonPositiveId(i64),

    /// 必須の文字列属性が空
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// 数値属性が狭義に正でない
    #[error("{0} must be strictly positive")]
    NonPositiveField(&'static str),
}

/// 資料の状態遷移エラー
///
/// 現在と同じ状態への遷移は不正（多重貸出・多重返却の防波堤）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemStateError {
    /// 既に貸出可能
    #[error("item {0} is already available")]
    AlreadyAvailable(i64),

    /// 既に貸出中
    #[error("item {0} is already unavailable")]
    AlreadyUnavailable(i64),
}

/// 返却マーキングのエラー
///
/// 返却日は一度しか設定できず、貸出日以降でなければならない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReturnError {
    /// 既に返却済み
    #[error("loan {0} has already been returned")]
    AlreadyReturned(i64),

    /// 返却日が貸出日より前
    #[error("return date {returned_on} precedes borrow date {borrowed_on}")]
    ReturnBeforeBorrow {
        borrowed_on: NaiveDate,
        returned_on: NaiveDate,
    },
}
