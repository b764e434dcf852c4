mod field;
mod form_banner;
mod popup;

pub use field::FormField;
pub use form_banner::FormBanner;
pub use popup::{RegistrationPopup, RegistrationPopupProps};
