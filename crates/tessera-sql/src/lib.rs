pub mod serializer;
pub use serializer::{Params, Placeholder, Rendered, Serializer, TypedValue};

pub use tessera_core::stmt::{self, Statement};
