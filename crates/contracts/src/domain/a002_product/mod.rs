pub mod aggregate;

pub use aggregate::{Product, ProductDto, ProductId, ProductKind, ProductRef};
