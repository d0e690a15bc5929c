pub mod use_debounce;
pub mod use_title;

pub use use_debounce::use_debounce;
pub use use_title::use_title;
