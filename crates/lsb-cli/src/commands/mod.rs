pub mod capacity;
pub mod completion;
pub mod embed;
pub mod extract;
pub mod extract_raw;
