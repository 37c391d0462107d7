pub mod embed;
pub mod extract;

/// extension stored for payloads that do not come with one
pub const DEFAULT_EXTENSION: &str = "bin";
