pub(crate) use crate::navigator::{self, Page};
pub use relm4::{
    gtk::{self, prelude::*},
    prelude::*,
};
