pub mod request;
pub mod sections;
pub mod spec;

pub use request::{OperationContext, OperationKind};
pub use spec::SongSpec;
