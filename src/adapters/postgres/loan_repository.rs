use crate::domain::loan::Loan;
use crate::domain::value_objects::{ItemId, LoanId, MemberId};
use crate::ports::loan_repository::{LoanRepository as LoanRepositoryTrait, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをLoanに変換する
///
/// ID列はドメインの値オブジェクトに通し、非正の値を不正データとして弾く。
fn map_row_to_loan(row: &PgRow) -> Result<Loan> {
    let invalid = |e: crate::domain::errors::ValidationError| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
            as Box<dyn std::error::Error + Send + Sync>
    };

    let id = LoanId::new(row.get("id")).map_err(invalid)?;
    let member_id = MemberId::new(row.get("member_id")).map_err(invalid)?;
    let item_id = ItemId::new(row.get("item_id")).map_err(invalid)?;
    let borrowed_on: NaiveDate = row.get("borrowed_on");
    let returned_on: Option<NaiveDate> = row.get("returned_on");

    Ok(Loan::restore(id, member_id, item_id, borrowed_on, returned_on))
}

/// 貸出ストアのPostgreSQL実装
pub struct LoanRepository {
    pool: PgPool,
}

impl LoanRepository {
    /// PostgreSQLコネクションプールから新しいLoanRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanRepositoryTrait for LoanRepository {
    async fn find_by_id(&self, id: LoanId) -> Result<Option<Loan>> {
        let row = sqlx::query(
            r#"
            SELECT id, member_id, item_id, borrowed_on, returned_on
            FROM loans
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_loan).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Loan>> {
        let rows = sqlx::query(
            r#"
            SELECT id, member_id, item_id, borrowed_on, returned_on
            FROM loans
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_loan).collect()
    }

    /// 会員の貸出中の貸出を取得（貸出上限確認用）
    async fn find_active_by_member(&self, member_id: MemberId) -> Result<Vec<Loan>> {
        let rows = sqlx::query(
            r#"
            SELECT id, member_id, item_id, borrowed_on, returned_on
            FROM loans
            WHERE member_id = $1 AND returned_on IS NULL
            ORDER BY id
            "#,
        )
        .bind(member_id.value())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_loan).collect()
    }

    /// 貸出を保存する（upsert、同一IDの行は完全置換）
    async fn save(&self, loan: Loan) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO loans (id, member_id, item_id, borrowed_on, returned_on)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id)
            DO UPDATE SET
                member_id = EXCLUDED.member_id,
                item_id = EXCLUDED.item_id,
                borrowed_on = EXCLUDED.borrowed_on,
                returned_on = EXCLUDED.returned_on
            "#,
        )
        .bind(loan.id().value())
        .bind(loan.member_id().value())
        .bind(loan.item_id().value())
        .bind(loan.borrowed_on())
        .bind(loan.returned_on())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
