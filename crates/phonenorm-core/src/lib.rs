pub mod domain;
pub mod dto;
pub mod error;
pub mod phone;
pub mod rules;
pub mod table;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use phone::{normalize_phone, PhoneOptions};
pub use rules::*;
pub use table::CountryTable;
