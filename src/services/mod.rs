pub mod activity;
pub mod chat;
pub mod contact;
pub mod responder;
pub mod weather;
pub mod wizard;
