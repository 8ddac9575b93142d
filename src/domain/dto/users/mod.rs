//! 사용자 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
