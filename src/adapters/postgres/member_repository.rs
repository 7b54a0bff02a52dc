use crate::domain::member::{Member, MemberStatus};
use crate::domain::value_objects::MemberId;
use crate::ports::member_repository::{MemberRepository as MemberRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

/// PostgreSQLの行データをMemberに変換する
fn map_row_to_member(row: &PgRow) -> Result<Member> {
    let status_str: &str = row.get("status");
    let status = MemberStatus::from_str(status_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    let name: String = row.get("name");
    let member = Member::restore(row.get("id"), name, status).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(member)
}

/// 会員ストアのPostgreSQL実装
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    /// PostgreSQLコネクションプールから新しいMemberRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, status
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_member).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Member>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, status
            FROM members
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_member).collect()
    }

    /// 会員を保存する（upsert、同一IDの行は完全置換）
    async fn save(&self, member: Member) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO members (id, name, status)
            VALUES ($1, $2, $3)
            ON CONFLICT (id)
            DO UPDATE SET
                name = EXCLUDED.name,
                status = EXCLUDED.status
            "#,
        )
        .bind(member.id().value())
        .bind(member.name())
        .bind(member.status().as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
