pub mod envelope;
pub mod grouping;
pub mod news;
pub mod request;

pub use envelope::ResultEnvelope;
pub use grouping::Grouping;
pub use news::{Article, Source, SourceInfo};
pub use request::{PageSpec, RequestParams};
