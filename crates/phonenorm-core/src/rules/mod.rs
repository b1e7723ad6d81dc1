pub mod normalize;
pub mod resolve;
pub mod validate;

pub use normalize::{
    ensure_calling_code, keeps_leading_zeros, strip_echoed_trunk, strip_leading_zeros,
    strip_russian_trunk,
};
pub use resolve::{by_country, by_phone_number, CandidateMatch};
pub use validate::is_valid;
