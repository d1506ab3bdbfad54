pub mod convert;
pub mod row;
pub mod selector;
pub mod sort;

pub use convert::{ConvertLogic, build_rows};
pub use row::Row;
