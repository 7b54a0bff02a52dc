use thiserror::Error;

use crate::domain::errors::ValidationError;

/// 貸出管理アプリケーション層のエラー
///
/// 2種類に大別される：
/// - 不正引数：入力そのものが不正（非正のID、構築バリデーション違反）。
///   ストアに触れる前に検出され、部分的な効果を残さない。
/// - 状態競合：入力は正しいが現在の状態が操作を禁じる。どの前提条件が
///   破られたかと対象の識別子をメッセージに含む。
#[derive(Debug, Error)]
pub enum LendingError {
    /// 識別子が狭義に正でない（不正引数）
    #[error("identifier must be strictly positive, got {0}")]
    InvalidId(i64),

    /// エンティティの構築バリデーション違反（不正引数）
    #[error("invalid entity: {0}")]
    Validation(#[from] ValidationError),

    /// 会員が存在しない
    #[error("member with id {0} does not exist")]
    MemberNotFound(i64),

    /// 会員が無効
    #[error("member with id {0} is inactive")]
    MemberInactive(i64),

    /// 資料が存在しない
    #[error("item with id {0} does not exist")]
    ItemNotFound(i64),

    /// 資料が貸出中
    #[error("item with id {0} is not available")]
    ItemUnavailable(i64),

    /// 貸出上限に達している
    #[error("member with id {member_id} has reached the active loan quota ({quota})")]
    QuotaExceeded { member_id: i64, quota: usize },

    /// 貸出が存在しない
    #[error("loan with id {0} does not exist")]
    LoanNotFound(i64),

    /// 既に返却済み
    #[error("loan with id {0} has already been returned")]
    LoanAlreadyReturned(i64),

    /// 貸出が参照する資料がストアに存在しない
    ///
    /// 不変条件が保たれている限り到達しない。ユーザー起因ではなく
    /// 実装欠陥のシグナルとして扱う。
    #[error("item with id {item_id} referenced by loan {loan_id} no longer exists")]
    CatalogInconsistency { loan_id: i64, item_id: i64 },

    /// ドメイン層のエラー
    ///
    /// オーケストレータの事前チェックを通過した後のエンティティ遷移が
    /// 失敗した場合。事前チェックが正しければ到達しない。
    #[error("domain error: {0}")]
    DomainError(String),

    /// カタログストアのエラー
    #[error("catalog store error")]
    CatalogStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 会員ストアのエラー
    #[error("member store error")]
    MemberStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 貸出ストアのエラー
    #[error("loan store error")]
    LoanStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LendingError>;
