//! Progress indicators

mod spinner;

pub use spinner::ReplySpinner;
