use crate::domain::member::Member;
use crate::domain::value_objects::MemberId;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員ストアポート
///
/// コントラクトはカタログストアと同じ：スナップショット読み取り、
/// `Ok(None)`による不在表現、全置換のupsert。
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// IDで会員を検索する
    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>>;

    /// 全会員のスナップショットを返す（順序は未規定）
    async fn find_all(&self) -> Result<Vec<Member>>;

    /// 会員を保存する（挿入または全置換）
    async fn save(&self, member: Member) -> Result<()>;
}
