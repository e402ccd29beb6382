pub mod file;
pub mod traits;

// Re-export
pub use file::FileTrackerRepository;
pub use traits::TrackerRepository;
