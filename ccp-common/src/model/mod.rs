// ccp-common/src/model/mod.rs
pub mod guid;
pub mod package;

pub use guid::Guid;
pub use package::{NameIndex, PackageExtension, PackageIdentity};
