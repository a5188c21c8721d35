//! Record assembly for Logplex drain requests.

pub mod allow_list;
pub mod assembler;
pub mod metadata;

pub use allow_list::DrainAllowList;
pub use assembler::{DEFAULT_TIME_FORMAT, RecordAssembler, Records};
pub use metadata::DrainMetadata;
