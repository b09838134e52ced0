//! Host device drivers: terminal input and the audible bell.

pub mod bell;
pub mod input;
