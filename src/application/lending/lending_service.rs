use crate::domain::commands::{BorrowItem, ReturnItem};
use crate::domain::item::Item;
use crate::domain::loan::Loan;
use crate::domain::member::Member;
use crate::domain::value_objects::{ItemId, LoanId, MemberId};
use crate::ports::{CatalogRepository, LoanIdSource, LoanRepository, MemberRepository};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::errors::{LendingError, Result};
use super::policy;

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
///
/// クロスエンティティ状態（資料の貸出可能フラグ、貸出の返却日）を
/// 書き換えるのはこのモジュールの関数のみ。ストアを直接書き換える
/// 呼び出し側はコントラクト違反。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub catalog: Arc<dyn CatalogRepository>,
    pub members: Arc<dyn MemberRepository>,
    pub loans: Arc<dyn LoanRepository>,
    pub id_source: Arc<dyn LoanIdSource>,
    /// borrow/returnのcheck-then-actシーケンスを直列化するロック。
    /// これがないと同じ資料への並行borrowが両方とも可用性チェックを
    /// 通過しうる。
    pub write_lock: Arc<Mutex<()>>,
}

impl ServiceDependencies {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        members: Arc<dyn MemberRepository>,
        loans: Arc<dyn LoanRepository>,
        id_source: Arc<dyn LoanIdSource>,
    ) -> Self {
        Self {
            catalog,
            members,
            loans,
            id_source,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// 資料を借りる
///
/// 検証順序（最初に破られた前提条件だけを返す。集約はしない）：
/// 1. 会員が存在すること
/// 2. 会員が有効であること
/// 3. 資料が存在すること
/// 4. 資料が貸出可能であること
/// 5. 会員の貸出中の件数が上限（3点）未満であること
///
/// 5つの検証がすべて通ってから初めて状態を変更する。失敗時に
/// 部分的な効果は残らない。
///
/// # 戻り値
/// 成功時は作成された貸出のID
pub async fn borrow_item(deps: &ServiceDependencies, cmd: BorrowItem) -> Result<LoanId> {
    // 不正引数はストアに触れる前に拒否
    let member_id =
        MemberId::new(cmd.member_id).map_err(|_| LendingError::InvalidId(cmd.member_id))?;
    let item_id = ItemId::new(cmd.item_id).map_err(|_| LendingError::InvalidId(cmd.item_id))?;

    let _guard = deps.write_lock.lock().await;

    // 1. 会員の存在確認
    let member = deps
        .members
        .find_by_id(member_id)
        .await
        .map_err(LendingError::MemberStoreError)?
        .ok_or(LendingError::MemberNotFound(cmd.member_id))?;

    // 2. 会員の有効性確認
    if !member.is_active() {
        return Err(LendingError::MemberInactive(cmd.member_id));
    }

    // 3. 資料の存在確認
    let mut item = deps
        .catalog
        .find_by_id(item_id)
        .await
        .map_err(LendingError::CatalogStoreError)?
        .ok_or(LendingError::ItemNotFound(cmd.item_id))?;

    // 4. 資料の可用性確認
    if !item.is_available() {
        return Err(LendingError::ItemUnavailable(cmd.item_id));
    }

    // 5. 貸出上限確認（3点まで）
    let active_loans = deps
        .loans
        .find_active_by_member(member_id)
        .await
        .map_err(LendingError::LoanStoreError)?;

    if !policy::can_borrow(active_loans.len()) {
        return Err(LendingError::QuotaExceeded {
            member_id: cmd.member_id,
            quota: policy::LOAN_QUOTA,
        });
    }

    // 貸出を作成して保存
    let loan_id = deps.id_source.next_id();
    let loan = Loan::new(loan_id, member_id, item_id, cmd.borrowed_on);
    deps.loans
        .save(loan)
        .await
        .map_err(LendingError::LoanStoreError)?;

    // 資料を貸出中にして保存（4.で確認済みなので遷移は失敗しない）
    item.mark_unavailable()
        .map_err(|e| LendingError::DomainError(format!("{:?}", e)))?;
    deps.catalog
        .save(item)
        .await
        .map_err(LendingError::CatalogStoreError)?;

    tracing::debug!(
        member_id = cmd.member_id,
        item_id = cmd.item_id,
        loan_id = loan_id.value(),
        "loan created"
    );

    Ok(loan_id)
}

/// 貸出を返却する
///
/// 検証順序：
/// 1. 貸出が存在すること
/// 2. 貸出が未返却であること
///
/// 返却日は貸出エンティティ自身が検証する（一度だけ、貸出日以降）。
/// 貸出が参照する資料がストアに無い場合は不変条件の破れであり、
/// 欠陥シグナルとしてエラーにする。
pub async fn return_item(deps: &ServiceDependencies, cmd: ReturnItem) -> Result<()> {
    let loan_id = LoanId::new(cmd.loan_id).map_err(|_| LendingError::InvalidId(cmd.loan_id))?;

    let _guard = deps.write_lock.lock().await;

    // 1. 貸出の存在確認
    let mut loan = deps
        .loans
        .find_by_id(loan_id)
        .await
        .map_err(LendingError::LoanStoreError)?
        .ok_or(LendingError::LoanNotFound(cmd.loan_id))?;

    // 2. 未返却の確認
    if !loan.is_active() {
        return Err(LendingError::LoanAlreadyReturned(cmd.loan_id));
    }

    // 返却日を設定して保存
    loan.mark_returned(cmd.returned_on)
        .map_err(|e| LendingError::DomainError(format!("{:?}", e)))?;
    let item_id = loan.item_id();
    deps.loans
        .save(loan)
        .await
        .map_err(LendingError::LoanStoreError)?;

    // 資料を貸出可能に戻して保存
    let mut item = deps
        .catalog
        .find_by_id(item_id)
        .await
        .map_err(LendingError::CatalogStoreError)?
        .ok_or_else(|| {
            tracing::error!(
                loan_id = cmd.loan_id,
                item_id = item_id.value(),
                "loan references an item missing from the catalog"
            );
            LendingError::CatalogInconsistency {
                loan_id: cmd.loan_id,
                item_id: item_id.value(),
            }
        })?;

    item.mark_available()
        .map_err(|e| LendingError::DomainError(format!("{:?}", e)))?;
    deps.catalog
        .save(item)
        .await
        .map_err(LendingError::CatalogStoreError)?;

    tracing::debug!(loan_id = cmd.loan_id, item_id = item_id.value(), "loan returned");

    Ok(())
}

/// 貸出可能な資料の一覧を返す
///
/// 検証なし。カタログストアに委譲する。
pub async fn list_available_items(deps: &ServiceDependencies) -> Result<Vec<Item>> {
    deps.catalog
        .find_available()
        .await
        .map_err(LendingError::CatalogStoreError)
}

/// 会員の貸出中の貸出一覧を返す
///
/// 会員IDの正当性のみ検証し、貸出ストアに委譲する。
/// 会員の存在確認はしない（存在しない会員は空の一覧になる）。
pub async fn list_active_loans(deps: &ServiceDependencies, member_id: i64) -> Result<Vec<Loan>> {
    let member_id = MemberId::new(member_id).map_err(|_| LendingError::InvalidId(member_id))?;

    deps.loans
        .find_active_by_member(member_id)
        .await
        .map_err(LendingError::LoanStoreError)
}

/// 資料をカタログに追加する
///
/// ビジネスルールの検証はしない（構築時バリデーションのみ）。
/// カタログ管理はこの層では意図的に無制約。
pub async fn add_item(deps: &ServiceDependencies, item: Item) -> Result<()> {
    tracing::debug!(item_id = item.id().value(), "item added to catalog");
    deps.catalog
        .save(item)
        .await
        .map_err(LendingError::CatalogStoreError)
}

/// 会員を登録する
pub async fn add_member(deps: &ServiceDependencies, member: Member) -> Result<()> {
    tracing::debug!(member_id = member.id().value(), "member registered");
    deps.members
        .save(member)
        .await
        .map_err(LendingError::MemberStoreError)
}
