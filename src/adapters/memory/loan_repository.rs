use crate::domain::loan::Loan;
use crate::domain::value_objects::{LoanId, MemberId};
use crate::ports::loan_repository::{LoanRepository as LoanRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// 貸出ストアのインメモリ実装
///
/// 貸出IDをキーとする`HashMap`に貸出を保持する。参照実装であり、
/// 外部永続化は行わない。
pub struct LoanRepository {
    loans: Mutex<HashMap<LoanId, Loan>>,
}

impl LoanRepository {
    pub fn new() -> Self {
        Self {
            loans: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for LoanRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoanRepositoryTrait for LoanRepository {
    /// 存在しないIDは`Ok(None)`
    async fn find_by_id(&self, id: LoanId) -> Result<Option<Loan>> {
        Ok(self.loans.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Loan>> {
        Ok(self.loans.lock().unwrap().values().cloned().collect())
    }

    /// 指定会員の未返却の貸出のみを返す
    async fn find_active_by_member(&self, member_id: MemberId) -> Result<Vec<Loan>> {
        Ok(self
            .loans
            .lock()
            .unwrap()
            .values()
            .filter(|loan| loan.member_id() == member_id)
            .filter(|loan| loan.is_active())
            .cloned()
            .collect())
    }

    /// 同一IDの既存レコードは完全に置き換えられる
    async fn save(&self, loan: Loan) -> Result<()> {
        self.loans.lock().unwrap().insert(loan.id(), loan);
        Ok(())
    }
}
