use serde::{Deserialize, Serialize};

use super::errors::{ItemStateError, ValidationError};
use super::value_objects::ItemId;

/// 資料の種別ごとの書誌情報
///
/// 閉じたタグ付きユニオン。書籍とディスクのみを表現し、
/// 種別固有の属性をバリアントに持つ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemDetails {
    /// 書籍：著者とカタログ番号
    Book { author: String, catalog_number: i64 },
    /// ディスク：監督と収録時間（分）
    Disc { director: String, duration_minutes: i64 },
}

/// カタログの資料 - 貸出対象の1点物
///
/// 不変条件：
/// - IDは狭義に正（型で保証）
/// - タイトルは空でない
/// - 貸出可能フラグは作成時にtrue
///
/// 貸出可能フラグの遷移は`mark_available`/`mark_unavailable`のみが行う。
/// 1資料レコード = 1貸出単位（複本管理はしない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    title: String,
    available: bool,
    details: ItemDetails,
}

impl Item {
    /// 書籍を作成する
    ///
    /// # エラー
    /// - id <= 0
    /// - タイトルまたは著者が空（空白のみを含む）
    /// - カタログ番号が非正
    pub fn book(
        id: i64,
        title: impl Into<String>,
        author: impl Into<String>,
        catalog_number: i64,
    ) -> Result<Self, ValidationError> {
        let id = ItemId::new(id)?;
        let title = non_empty(title.into(), "title")?;
        let author = non_empty(author.into(), "author")?;
        if catalog_number <= 0 {
            return Err(ValidationError::NonPositiveField("catalog_number"));
        }

        Ok(Self::with_details(
            id,
            title,
            ItemDetails::Book {
                author,
                catalog_number,
            },
        ))
    }

    /// ディスクを作成する
    ///
    /// # エラー
    /// - id <= 0
    /// - タイトルまたは監督が空（空白のみを含む）
    /// - 収録時間が非正
    pub fn disc(
        id: i64,
        title: impl Into<String>,
        director: impl Into<String>,
        duration_minutes: i64,
    ) -> Result<Self, ValidationError> {
        let id = ItemId::new(id)?;
        let title = non_empty(title.into(), "title")?;
        let director = non_empty(director.into(), "director")?;
        if duration_minutes <= 0 {
            return Err(ValidationError::NonPositiveField("duration_minutes"));
        }

        Ok(Self::with_details(
            id,
            title,
            ItemDetails::Disc {
                director,
                duration_minutes,
            },
        ))
    }

    fn with_details(id: ItemId, title: String, details: ItemDetails) -> Self {
        Self {
            id,
            title,
            // 作成直後は常に貸出可能
            available: true,
            details,
        }
    }

    /// 永続化層からの復元用コンストラクタ
    ///
    /// 構築時バリデーションは通常のコンストラクタと同一だが、
    /// 貸出可能フラグをストアに保存された値のまま受け取る。
    pub fn restore(
        id: i64,
        title: impl Into<String>,
        available: bool,
        details: ItemDetails,
    ) -> Result<Self, ValidationError> {
        let mut item = match details {
            ItemDetails::Book {
                author,
                catalog_number,
            } => Self::book(id, title, author, catalog_number)?,
            ItemDetails::Disc {
                director,
                duration_minutes,
            } => Self::disc(id, title, director, duration_minutes)?,
        };
        item.available = available;
        Ok(item)
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// 貸出可能かどうか
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }

    /// 資料を貸出可能にする
    ///
    /// # エラー
    /// 既に貸出可能な場合は`ItemStateError::AlreadyAvailable`を返す
    pub fn mark_available(&mut self) -> Result<(), ItemStateError> {
        if self.available {
            return Err(ItemStateError::AlreadyAvailable(self.id.value()));
        }
        self.available = true;
        Ok(())
    }

    /// 資料を貸出中にする
    ///
    /// # エラー
    /// 既に貸出中の場合は`ItemStateError::AlreadyUnavailable`を返す
    pub fn mark_unavailable(&mut self) -> Result<(), ItemStateError> {
        if !self.available {
            return Err(ItemStateError::AlreadyUnavailable(self.id.value()));
        }
        self.available = false;
        Ok(())
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            ItemDetails::Book {
                author,
                catalog_number,
            } => write!(
                f,
                "Book{{id={}, title='{}', author='{}', catalog_number={}}}",
                self.id, self.title, author, catalog_number
            ),
            ItemDetails::Disc {
                director,
                duration_minutes,
            } => write!(
                f,
                "Disc{{id={}, title='{}', director='{}', duration={} minutes}}",
                self.id, self.title, director, duration_minutes
            ),
        }
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value)
}
