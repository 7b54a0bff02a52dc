use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;
use crate::domain::item::{Item, ItemDetails};
use crate::domain::loan::Loan;
use crate::domain::member::Member;

/// 資料登録リクエスト（POST /items）
///
/// kindタグで書籍とディスクを判別する。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NewItemRequest {
    Book {
        id: i64,
        title: String,
        author: String,
        catalog_number: i64,
    },
    Disc {
        id: i64,
        title: String,
        director: String,
        duration_minutes: i64,
    },
}

impl NewItemRequest {
    /// ドメインエンティティへ変換する（構築時バリデーション込み）
    pub fn into_item(self) -> Result<Item, ValidationError> {
        match self {
            NewItemRequest::Book {
                id,
                title,
                author,
                catalog_number,
            } => Item::book(id, title, author, catalog_number),
            NewItemRequest::Disc {
                id,
                title,
                director,
                duration_minutes,
            } => Item::disc(id, title, director, duration_minutes),
        }
    }
}

/// 会員登録リクエスト（POST /members）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMemberRequest {
    pub id: i64,
    pub name: String,
}

/// 貸出作成リクエスト（POST /loans）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowRequest {
    pub member_id: i64,
    pub item_id: i64,
}

/// 資料レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: i64,
    pub title: String,
    pub available: bool,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        let mut response = Self {
            id: item.id().value(),
            title: item.title().to_string(),
            available: item.is_available(),
            kind: String::new(),
            author: None,
            catalog_number: None,
            director: None,
            duration_minutes: None,
        };

        match item.details() {
            ItemDetails::Book {
                author,
                catalog_number,
            } => {
                response.kind = "book".to_string();
                response.author = Some(author.clone());
                response.catalog_number = Some(*catalog_number);
            }
            ItemDetails::Disc {
                director,
                duration_minutes,
            } => {
                response.kind = "disc".to_string();
                response.director = Some(director.clone());
                response.duration_minutes = Some(*duration_minutes);
            }
        }

        response
    }
}

/// 会員レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub status: String,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id().value(),
            name: member.name().to_string(),
            status: member.status().as_str().to_string(),
        }
    }
}

/// 貸出レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResponse {
    pub loan_id: i64,
    pub member_id: i64,
    pub item_id: i64,
    pub borrowed_on: NaiveDate,
    pub returned_on: Option<NaiveDate>,
}

impl From<Loan> for LoanResponse {
    fn from(loan: Loan) -> Self {
        Self {
            loan_id: loan.id().value(),
            member_id: loan.member_id().value(),
            item_id: loan.item_id().value(),
            borrowed_on: loan.borrowed_on(),
            returned_on: loan.returned_on(),
        }
    }
}

/// 貸出作成レスポンス（POST /loans）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanCreatedResponse {
    pub loan_id: i64,
    pub member_id: i64,
    pub item_id: i64,
    pub borrowed_on: NaiveDate,
}

/// 返却レスポンス（POST /loans/:id/return）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanReturnedResponse {
    pub loan_id: i64,
    pub returned_on: NaiveDate,
}

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
