//! Message loaders: turn a source file into the portable [`Message`]
//! model.
//!
//! Conversion from proprietary container formats is an external
//! capability behind this boundary. The built-in loader handles the
//! portable RFC 5322 `.eml` form; other front ends can produce the same
//! model without touching the decomposition core.
//!
//! [`Message`]: crate::model::message::Message

pub mod eml;
