pub mod archiver;
pub mod jdk;

pub use archiver::JarArchiver;
