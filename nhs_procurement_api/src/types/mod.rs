mod export;
pub use self::export::{ExportFormat, ExportPayload};

mod notice;
pub use self::notice::{Notice, NoticeSource, NoticeStatus, NoticeType};

mod search;
pub use self::search::SearchResult;
