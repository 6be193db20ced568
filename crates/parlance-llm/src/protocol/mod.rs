//! Wire-format types for the externally-documented chat-completion protocol

pub mod openai;
