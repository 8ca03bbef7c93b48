pub mod clock;
pub mod error;
pub mod extract;
pub mod notice;
pub mod response;
