use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::ReturnError;
use super::value_objects::{ItemId, LoanId, MemberId};

/// 貸出 - 1会員による1資料の1回の貸出
///
/// 不変条件：
/// - 各IDは狭義に正（型で保証）
/// - 貸出日は作成時に確定し変更されない
/// - 返却日は未設定で始まり、一度だけ設定できる
/// - 返却日は貸出日以降でなければならない
///
/// 派生状態：「貸出中」⇔ 返却日が未設定。
/// 会員・資料への参照はIDのみ（弱参照、所有しない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    id: LoanId,
    member_id: MemberId,
    item_id: ItemId,
    borrowed_on: NaiveDate,
    returned_on: Option<NaiveDate>,
}

impl Loan {
    /// 貸出中の貸出を新規作成する
    ///
    /// IDは検証済みの値オブジェクトで受け取るため、ここでの検証は不要。
    pub fn new(id: LoanId, member_id: MemberId, item_id: ItemId, borrowed_on: NaiveDate) -> Self {
        Self {
            id,
            member_id,
            item_id,
            borrowed_on,
            // 作成直後は貸出中
            returned_on: None,
        }
    }

    /// 永続化層からの復元用コンストラクタ
    pub fn restore(
        id: LoanId,
        member_id: MemberId,
        item_id: ItemId,
        borrowed_on: NaiveDate,
        returned_on: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            member_id,
            item_id,
            borrowed_on,
            returned_on,
        }
    }

    pub fn id(&self) -> LoanId {
        self.id
    }

    pub fn member_id(&self) -> MemberId {
        self.member_id
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn borrowed_on(&self) -> NaiveDate {
        self.borrowed_on
    }

    pub fn returned_on(&self) -> Option<NaiveDate> {
        self.returned_on
    }

    /// 貸出中（未返却）かどうか
    pub fn is_active(&self) -> bool {
        self.returned_on.is_none()
    }

    /// 貸出を返却済みにする
    ///
    /// # エラー
    /// - 既に返却済みの場合は`ReturnError::AlreadyReturned`
    /// - 返却日が貸出日より前の場合は`ReturnError::ReturnBeforeBorrow`
    pub fn mark_returned(&mut self, date: NaiveDate) -> Result<(), ReturnError> {
        if self.returned_on.is_some() {
            return Err(ReturnError::AlreadyReturned(self.id.value()));
        }
        if date < self.borrowed_on {
            return Err(ReturnError::ReturnBeforeBorrow {
                borrowed_on: self.borrowed_on,
                returned_on: date,
            });
        }

        self.returned_on = Some(date);
        Ok(())
    }
}

impl std::fmt::Display for Loan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Loan{{id={}, member={}, item={}, borrowed_on={}, returned_on={}}}",
            self.id,
            self.member_id,
            self.item_id,
            self.borrowed_on,
            match self.returned_on {
                Some(date) => date.to_string(),
                None => "-".to_string(),
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_loan() -> Loan {
        Loan::new(
            LoanId::new(1).unwrap(),
            MemberId::new(2).unwrap(),
            ItemId::new(3).unwrap(),
            date(2024, 3, 1),
        )
    }

    // TDD: 作成直後の状態のテスト
    #[test]
    fn test_new_loan_is_active() {
        let loan = sample_loan();
        assert!(loan.is_active());
        assert_eq!(loan.returned_on(), None);
        assert_eq!(loan.borrowed_on(), date(2024, 3, 1));
        assert_eq!(loan.member_id().value(), 2);
        assert_eq!(loan.item_id().value(), 3);
    }

    // TDD: 返却マーキングのテスト
    #[test]
    fn test_mark_returned_sets_return_date() {
        let mut loan = sample_loan();

        loan.mark_returned(date(2024, 3, 10)).unwrap();

        assert!(!loan.is_active());
        assert_eq!(loan.returned_on(), Some(date(2024, 3, 10)));
    }

    #[test]
    fn test_mark_returned_on_borrow_date_is_allowed() {
        let mut loan = sample_loan();
        loan.mark_returned(date(2024, 3, 1)).unwrap();
        assert!(!loan.is_active());
    }

    #[test]
    fn test_mark_returned_twice_is_rejected() {
        let mut loan = sample_loan();
        loan.mark_returned(date(2024, 3, 10)).unwrap();

        let result = loan.mark_returned(date(2024, 3, 11));
        assert_eq!(result.unwrap_err(), ReturnError::AlreadyReturned(1));
        // 最初の返却日が保持される
        assert_eq!(loan.returned_on(), Some(date(2024, 3, 10)));
    }

    #[test]
    fn test_mark_returned_before_borrow_date_is_rejected() {
        let mut loan = sample_loan();

        let result = loan.mark_returned(date(2024, 2, 28));
        assert_eq!(
            result.unwrap_err(),
            ReturnError::ReturnBeforeBorrow {
                borrowed_on: date(2024, 3, 1),
                returned_on: date(2024, 2, 28),
            }
        );
        assert!(loan.is_active());
    }

    #[test]
    fn test_display_marks_open_return_date() {
        let loan = sample_loan();
        assert_eq!(
            loan.to_string(),
            "Loan{id=1, member=2, item=3, borrowed_on=2024-03-01, returned_on=-}"
        );
    }

    #[test]
    fn test_restore_with_return_date_is_not_active() {
        let loan = Loan::restore(
            LoanId::new(1).unwrap(),
            MemberId::new(2).unwrap(),
            ItemId::new(3).unwrap(),
            date(2024, 3, 1),
            Some(date(2024, 3, 5)),
        );
        assert!(!loan.is_active());
    }
}
