mod announcement;
mod device_token;
mod event;
mod notification;
mod status;
mod tournament;

pub mod dtos {
    pub use crate::announcement::dtos::*;
    pub use crate::device_token::dtos::*;
    pub use crate::event::dtos::*;
    pub use crate::notification::dtos::*;
    pub use crate::tournament::dtos::*;
}

pub use crate::announcement::api::*;
pub use crate::device_token::api::*;
pub use crate::event::api::*;
pub use crate::notification::api::*;
pub use crate::status::api::*;
pub use crate::tournament::api::*;
