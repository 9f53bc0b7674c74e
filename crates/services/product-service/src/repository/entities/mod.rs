//! SeaORM entity definitions.

pub mod product;
