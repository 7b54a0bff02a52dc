use crate::domain::loan::Loan;
use crate::domain::value_objects::{LoanId, MemberId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 貸出ストアポート
///
/// 貸出の検索と保存。会員ごとの貸出中の貸出を引けることが
/// 貸出上限チェックの前提になる。
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// IDで貸出を検索する
    async fn find_by_id(&self, id: LoanId) -> Result<Option<Loan>>;

    /// 全貸出のスナップショットを返す（順序は未規定）
    async fn find_all(&self) -> Result<Vec<Loan>>;

    /// 会員の貸出中（未返却）の貸出を返す
    ///
    /// 貸出上限（会員ごと最大3点）の確認に使用される。
    async fn find_active_by_member(&self, member_id: MemberId) -> Result<Vec<Loan>>;

    /// 貸出を保存する（挿入または全置換）
    async fn save(&self, loan: Loan) -> Result<()>;
}
