pub mod archiver;

pub use archiver::ArchiveError;
