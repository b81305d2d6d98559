//! Display boundary
//!
//! The sink the countdown writes to and the dispatcher that carries those
//! writes onto the thread owning the display.

pub mod dispatch;
pub mod sink;

pub use dispatch::{Dispatcher, InlineDispatcher, UiDispatcher, UiJob, UiThread};
pub use sink::{DisplaySink, Label, LabelContent};
