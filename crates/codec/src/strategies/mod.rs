mod parallel;
mod sequential;

pub use parallel::ParallelBinaryText;
pub use sequential::BinaryText;
