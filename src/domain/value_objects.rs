use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

/// 資料ID - カタログ内の資料を一意に識別する
///
/// 不変条件：値は狭義に正（> 0）。
/// 型システムでこの制約を強制し、不正な値を作成できないようにする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ItemId(i64);

impl ItemId {
    /// 検証付きコンストラクタ
    ///
    /// # エラー
    /// `raw <= 0` の場合は`ValidationError::NonPositiveId`を返す
    pub fn new(raw: i64) -> Result<Self, ValidationError> {
        if raw <= 0 {
            return Err(ValidationError::NonPositiveId(raw));
        }
        Ok(Self(raw))
    }

    /// 内部値
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for ItemId {
    type Error = ValidationError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ItemId> for i64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 会員ID - 会員を一意に識別する
///
/// 不変条件：値は狭義に正（> 0）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct MemberId(i64);

impl MemberId {
    /// 検証付きコンストラクタ
    ///
    /// # エラー
    /// `raw <= 0` の場合は`ValidationError::NonPositiveId`を返す
    pub fn new(raw: i64) -> Result<Self, ValidationError> {
        if raw <= 0 {
            return Err(ValidationError::NonPositiveId(raw));
        }
        Ok(Self(raw))
    }

    /// 内部値
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for MemberId {
    type Error = ValidationError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<MemberId> for i64 {
    fn from(id: MemberId) -> Self {
        id.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 貸出ID - 貸出を一意に識別する
///
/// 不変条件：値は狭義に正（> 0）。貸出作成時にIDソースから発行される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct LoanId(i64);

impl LoanId {
    /// 検証付きコンストラクタ
    ///
    /// # エラー
    /// `raw <= 0` の場合は`ValidationError::NonPositiveId`を返す
    pub fn new(raw: i64) -> Result<Self, ValidationError> {
        if raw <= 0 {
            return Err(ValidationError::NonPositiveId(raw));
        }
        Ok(Self(raw))
    }

    /// 内部値
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for LoanId {
    type Error = ValidationError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<LoanId> for i64 {
    fn from(id: LoanId) -> Self {
        id.0
    }
}

impl std::fmt::Display for LoanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // TDD: ID value objects のテスト
    #[test]
    fn test_item_id_accepts_positive_value() {
        let id = ItemId::new(1);
        assert!(id.is_ok());
        assert_eq!(id.unwrap().value(), 1);
    }

    #[test]
    fn test_item_id_rejects_zero() {
        let id = ItemId::new(0);
        assert!(id.is_err());
        assert_eq!(id.unwrap_err(), ValidationError::NonPositiveId(0));
    }

    #[test]
    fn test_item_id_rejects_negative_value() {
        let id = ItemId::new(-5);
        assert!(id.is_err());
        assert_eq!(id.unwrap_err(), ValidationError::NonPositiveId(-5));
    }

    #[test]
    fn test_member_id_rejects_non_positive_values() {
        assert!(MemberId::new(0).is_err());
        assert!(MemberId::new(-1).is_err());
        assert!(MemberId::new(42).is_ok());
    }

    #[test]
    fn test_loan_id_try_from_delegates_to_validation() {
        assert!(LoanId::try_from(7).is_ok());
        assert!(LoanId::try_from(0).is_err());
        assert!(LoanId::try_from(-7).is_err());
    }

    #[test]
    fn test_ids_with_same_value_are_equal() {
        let a = ItemId::new(3).unwrap();
        let b = ItemId::new(3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_id_display_renders_inner_value() {
        let id = LoanId::new(12).unwrap();
        assert_eq!(id.to_string(), "12");
    }
}
