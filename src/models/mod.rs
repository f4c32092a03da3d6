// Re-export all model types
pub use self::catalog::*;
pub use self::detail::*;
pub use self::enums::*;
pub use self::errors::*;
pub use self::validation::*;

mod catalog;
mod detail;
mod enums;
mod errors;
mod validation;
