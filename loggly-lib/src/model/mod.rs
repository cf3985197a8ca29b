//! Data model

mod event;

pub use event::Event;
