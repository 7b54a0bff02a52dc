use crate::domain::item::Item;
use crate::domain::value_objects::ItemId;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// カタログストアポート
///
/// 資料をIDで引くための永続化境界。オーケストレータは具体的な
/// バックエンド（インメモリ、PostgreSQL）を知らない。
///
/// コントラクト：
/// - `find_*`はスナップショットを返す。返された値への変更はストアに影響しない。
/// - 存在しないIDはエラーではなく`Ok(None)`。
/// - `save`は同一IDの既存レコードを完全に置き換える（部分マージはしない）。
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// IDで資料を検索する
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>>;

    /// 全資料のスナップショットを返す（順序は未規定）
    async fn find_all(&self) -> Result<Vec<Item>>;

    /// 貸出可能な資料のみを返す
    async fn find_available(&self) -> Result<Vec<Item>>;

    /// 資料を保存する（挿入または全置換）
    async fn save(&self, item: Item) -> Result<()>;
}
