pub mod descriptor;
pub mod entry;

pub use descriptor::ClasspathDescriptor;
pub use entry::{ClasspathEntry, EntryKind};
