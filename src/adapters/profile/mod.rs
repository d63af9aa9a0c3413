//! Profile storage adapters

mod filesystem;

pub use filesystem::FsProfileRepository;
