//! Route handlers, one module per resource category.

pub mod geographie;
pub mod logistique;
pub mod roles;
pub mod saisonnalite;
