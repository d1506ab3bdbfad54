pub mod delimiter;
pub mod time;

pub use delimiter::parse_delimiter;
