pub mod catalog_repository;
pub mod id_source;
pub mod loan_repository;
pub mod member_repository;

pub use catalog_repository::CatalogRepository;
pub use id_source::LoanIdSource;
pub use loan_repository::LoanRepository;
pub use member_repository::MemberRepository;
