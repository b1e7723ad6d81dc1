pub mod record;
pub mod result;

pub use record::CountryPhoneRecord;
pub use result::{PhoneResult, ValidPhone};
