pub mod category;
pub mod field;

pub use category::{Availability, Category, Recurrence};
pub use field::{FieldDescriptor, FieldKind, descriptor, fields_for};
