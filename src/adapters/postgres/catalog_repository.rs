use crate::domain::item::{Item, ItemDetails};
use crate::domain::value_objects::ItemId;
use crate::ports::catalog_repository::{CatalogRepository as CatalogRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをItemに変換する
///
/// kind列で書誌情報のバリアントを判別し、ドメインの復元コンストラクタに
/// 通すことで構築時バリデーションを再適用する。
fn map_row_to_item(row: &PgRow) -> Result<Item> {
    let kind: &str = row.get("kind");
    let details = match kind {
        "book" => ItemDetails::Book {
            author: row.get("author"),
            catalog_number: row.get("catalog_number"),
        },
        "disc" => ItemDetails::Disc {
            director: row.get("director"),
            duration_minutes: row.get("duration_minutes"),
        },
        other => {
            return Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("unknown item kind: {}", other),
            )));
        }
    };

    let title: String = row.get("title");
    let item = Item::restore(row.get("id"), title, row.get("available"), details)
        .map_err(|e| {
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
                as Box<dyn std::error::Error + Send + Sync>
        })?;

    Ok(item)
}

/// カタログストアのPostgreSQL実装
///
/// インメモリ実装と同じコントラクトを永続バックエンドで提供する。
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    /// PostgreSQLコネクションプールから新しいCatalogRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepositoryTrait for CatalogRepository {
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, available, kind, author, catalog_number, director, duration_minutes
            FROM catalog_items
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_item).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Item>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, available, kind, author, catalog_number, director, duration_minutes
            FROM catalog_items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_item).collect()
    }

    async fn find_available(&self) -> Result<Vec<Item>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, available, kind, author, catalog_number, director, duration_minutes
            FROM catalog_items
            WHERE available = TRUE
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_item).collect()
    }

    /// 資料を保存する（upsert）
    ///
    /// INSERT ... ON CONFLICT UPDATEで同一IDの行を完全に置き換える。
    async fn save(&self, item: Item) -> Result<()> {
        let (kind, author, catalog_number, director, duration_minutes) = match item.details() {
            ItemDetails::Book {
                author,
                catalog_number,
            } => ("book", Some(author.clone()), Some(*catalog_number), None, None),
            ItemDetails::Disc {
                director,
                duration_minutes,
            } => ("disc", None, None, Some(director.clone()), Some(*duration_minutes)),
        };

        sqlx::query(
            r#"
            INSERT INTO catalog_items (
                id,
                title,
                available,
                kind,
                author,
                catalog_number,
                director,
                duration_minutes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id)
            DO UPDATE SET
                title = EXCLUDED.title,
                available = EXCLUDED.available,
                kind = EXCLUDED.kind,
                author = EXCLUDED.author,
                catalog_number = EXCLUDED.catalog_number,
                director = EXCLUDED.director,
                duration_minutes = EXCLUDED.duration_minutes
            "#,
        )
        .bind(item.id().value())
        .bind(item.title())
        .bind(item.is_available())
        .bind(kind)
        .bind(author)
        .bind(catalog_number)
        .bind(director)
        .bind(duration_minutes)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
