pub mod category;
pub mod error;
pub mod field;
pub mod value;
pub mod visitor;

pub use category::{LimitProfile, VisitorCategory};
pub use error::{ErrorKind, InvertedBounds, LimitError, Result};
pub use field::BoundedIntField;
pub use value::AttrValue;
pub use visitor::Visitor;
