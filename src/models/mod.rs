pub mod category;
pub mod condition;
pub mod entity;
pub mod fields;
pub mod parse_result;

pub use category::*;
pub use condition::*;
pub use entity::*;
pub use fields::*;
pub use parse_result::*;
