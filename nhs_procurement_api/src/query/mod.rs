mod export;
pub use self::export::ExportRequest;

mod filter;
pub use self::filter::SearchFilter;
