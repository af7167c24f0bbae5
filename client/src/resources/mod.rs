//! One module per backend resource category.
//!
//! Every function maps 1:1 to a backend GET endpoint: a fixed relative
//! path with no query parameters or body, and the raw response handed
//! back. Invoking a function twice issues two independent requests;
//! nothing is cached or deduplicated.

pub mod geographie;
pub mod logistique;
pub mod roles;
pub mod saisonnalite;

pub use geographie::Geographie;
pub use logistique::Logistique;
pub use roles::Roles;
pub use saisonnalite::Saisonnalite;
