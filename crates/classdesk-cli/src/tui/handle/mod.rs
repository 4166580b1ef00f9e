use super::*;

mod chat;
mod dashboard;
mod dispatch;
mod forms;
mod login;
