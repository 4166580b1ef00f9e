use super::*;

mod admin;
mod chat;
mod core;
