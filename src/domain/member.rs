use serde::{Deserialize, Serialize};

use super::errors::ValidationError;
use super::value_objects::MemberId;

/// 会員ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    /// 有効（貸出可能）
    Active,
    /// 無効（貸出不可）
    Inactive,
}

impl MemberStatus {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Inactive => "inactive",
        }
    }
}

impl std::str::FromStr for MemberStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(MemberStatus::Active),
            "inactive" => Ok(MemberStatus::Inactive),
            _ => Err(format!("Invalid member status: {}", s)),
        }
    }
}

/// 会員 - 貸出機関の利用者
///
/// 不変条件：
/// - IDは狭義に正（型で保証）
/// - 名前は空でない
/// - 作成時のステータスはActive
///
/// ステータス変更は`activate`/`deactivate`のみが行い、どちらも冪等。
/// 削除操作は存在しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
    status: MemberStatus,
}

impl Member {
    /// 有効な会員を新規作成する
    ///
    /// # エラー
    /// - id <= 0
    /// - 名前が空（空白のみを含む）
    pub fn new(id: i64, name: impl Into<String>) -> Result<Self, ValidationError> {
        let id = MemberId::new(id)?;
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }

        Ok(Self {
            id,
            name,
            status: MemberStatus::Active,
        })
    }

    /// 永続化層からの復元用コンストラクタ
    pub fn restore(
        id: i64,
        name: impl Into<String>,
        status: MemberStatus,
    ) -> Result<Self, ValidationError> {
        let mut member = Self::new(id, name)?;
        member.status = status;
        Ok(member)
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> MemberStatus {
        self.status
    }

    /// 有効かどうか
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }

    /// 会員を有効にする（冪等）
    pub fn activate(&mut self) {
        self.status = MemberStatus::Active;
    }

    /// 会員を無効にする（冪等）
    pub fn deactivate(&mut self) {
        self.status = MemberStatus::Inactive;
    }
}

impl std::fmt::Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Member{{id={}, name='{}', status={}}}",
            self.id,
            self.name,
            self.status.as_str()
        )
    }
}
