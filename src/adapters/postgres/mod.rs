pub mod catalog_repository;
pub mod loan_repository;
pub mod member_repository;

// パブリックに型を再エクスポート
pub use catalog_repository::CatalogRepository as PostgresCatalogRepository;
pub use loan_repository::LoanRepository as PostgresLoanRepository;
pub use member_repository::MemberRepository as PostgresMemberRepository;
