//! Command implementations

mod generate;
mod schema;
mod serve;
mod validate;

pub use generate::generate;
pub use schema::schema;
pub use serve::serve;
pub use validate::validate;
