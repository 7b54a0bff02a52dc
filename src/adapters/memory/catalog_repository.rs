use crate::domain::item::Item;
use crate::domain::value_objects::ItemId;
use crate::ports::catalog_repository::{CatalogRepository as CatalogRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// カタログストアのインメモリ実装
///
/// 資料IDをキーとする`HashMap`に資料を保持する。参照実装であり、
/// 外部永続化は行わない。
pub struct CatalogRepository {
    items: Mutex<HashMap<ItemId, Item>>,
}

impl CatalogRepository {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for CatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepositoryTrait for CatalogRepository {
    /// 存在しないIDは`Ok(None)`
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        Ok(self.items.lock().unwrap().get(&id).cloned())
    }

    /// クローンのスナップショットを返す。呼び出し側の変更はストアに影響しない。
    async fn find_all(&self) -> Result<Vec<Item>> {
        Ok(self.items.lock().unwrap().values().cloned().collect())
    }

    async fn find_available(&self) -> Result<Vec<Item>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|item| item.is_available())
            .cloned()
            .collect())
    }

    /// 同一IDの既存レコードは完全に置き換えられる
    async fn save(&self, item: Item) -> Result<()> {
        self.items.lock().unwrap().insert(item.id(), item);
        Ok(())
    }
}
