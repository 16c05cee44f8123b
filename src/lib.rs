pub mod app;
pub mod chat;
pub mod contact;
pub mod motion;
pub mod net;
