use chrono::NaiveDate;
use rusty_media_library::adapters::memory::{
    InMemoryCatalogRepository, InMemoryLoanRepository, InMemoryMemberRepository,
};
use rusty_media_library::domain::item::{Item, ItemDetails};
use rusty_media_library::domain::loan::Loan;
use rusty_media_library::domain::member::Member;
use rusty_media_library::domain::value_objects::{ItemId, LoanId, MemberId};
use rusty_media_library::ports::{CatalogRepository, LoanRepository, MemberRepository};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn book(id: i64, title: &str) -> Item {
    Item::book(id, title, "Some Author", 1000 + id).unwrap()
}

fn loan(id: i64, member_id: i64, item_id: i64) -> Loan {
    Loan::new(
        LoanId::new(id).unwrap(),
        MemberId::new(member_id).unwrap(),
        ItemId::new(item_id).unwrap(),
        date(2024, 3, 1),
    )
}

// ============================================================================
// ストアコントラクト：不在は Ok(None)
// ============================================================================

#[tokio::test]
async fn test_find_by_id_returns_none_for_missing_records() {
    let catalog = InMemoryCatalogRepository::new();
    let members = InMemoryMemberRepository::new();
    let loans = InMemoryLoanRepository::new();

    assert!(
        catalog
            .find_by_id(ItemId::new(1).unwrap())
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        members
            .find_by_id(MemberId::new(1).unwrap())
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        loans
            .find_by_id(LoanId::new(1).unwrap())
            .await
            .unwrap()
            .is_none()
    );
}

// ============================================================================
// ストアコントラクト：find_all はスナップショット
// ============================================================================

#[tokio::test]
async fn test_find_all_returns_independent_snapshot() {
    let catalog = InMemoryCatalogRepository::new();
    catalog.save(book(1, "A")).await.unwrap();
    catalog.save(book(2, "B")).await.unwrap();

    // 返されたVecを破壊してもストアには影響しない
    let mut snapshot = catalog.find_all().await.unwrap();
    snapshot.clear();

    assert_eq!(catalog.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_snapshot_entities_are_clones() {
    let catalog = InMemoryCatalogRepository::new();
    catalog.save(book(1, "A")).await.unwrap();

    // スナップショット上のエンティティを変更してもストアには書き戻されない
    let mut snapshot = catalog.find_all().await.unwrap();
    snapshot[0].mark_unavailable().unwrap();

    let stored = catalog
        .find_by_id(ItemId::new(1).unwrap())
        .await
        .unwrap()
        .unwrap();
    assert!(stored.is_available());
}

// ============================================================================
// ストアコントラクト：save は全置換
// ============================================================================

#[tokio::test]
async fn test_save_fully_replaces_record_with_same_id() {
    let catalog = InMemoryCatalogRepository::new();
    catalog.save(book(1, "Original Title")).await.unwrap();

    // 同じIDで全く別の内容（種別まで変わる）を保存する
    let replacement = Item::disc(1, "Replacement", "Some Director", 90).unwrap();
    catalog.save(replacement.clone()).await.unwrap();

    let stored = catalog
        .find_by_id(ItemId::new(1).unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, replacement);
    assert!(matches!(stored.details(), ItemDetails::Disc { .. }));
    assert_eq!(catalog.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_member_save_replaces_existing_record() {
    let members = InMemoryMemberRepository::new();
    members.save(Member::new(1, "Before").unwrap()).await.unwrap();

    let mut replacement = Member::new(1, "After").unwrap();
    replacement.deactivate();
    members.save(replacement.clone()).await.unwrap();

    let stored = members
        .find_by_id(MemberId::new(1).unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, replacement);
    assert_eq!(stored.name(), "After");
    assert!(!stored.is_active());
}

// ============================================================================
// フィルタ付き検索
// ============================================================================

#[tokio::test]
async fn test_find_available_filters_unavailable_items() {
    let catalog = InMemoryCatalogRepository::new();
    let mut borrowed = book(1, "Borrowed");
    borrowed.mark_unavailable().unwrap();
    catalog.save(borrowed).await.unwrap();
    catalog.save(book(2, "On the shelf")).await.unwrap();

    let available = catalog.find_available().await.unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id().value(), 2);
}

#[tokio::test]
async fn test_find_active_by_member_filters_member_and_return_state() {
    let loans = InMemoryLoanRepository::new();

    loans.save(loan(1, 1, 1)).await.unwrap();
    loans.save(loan(2, 2, 2)).await.unwrap();

    let mut returned = loan(3, 1, 3);
    returned.mark_returned(date(2024, 3, 5)).unwrap();
    loans.save(returned).await.unwrap();

    let active = loans
        .find_active_by_member(MemberId::new(1).unwrap())
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id().value(), 1);
}
