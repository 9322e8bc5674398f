//! Input configuration options for heft
//!
//! This module defines the `[keys]` table: a list of key strings per action.
//! Key syntax is parsed by [crate::app::keymap].

use serde::Deserialize;

/// Input configuration options of all actions
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    go_up: Vec<String>,
    go_down: Vec<String>,
    go_to_top: Vec<String>,
    go_to_bottom: Vec<String>,
    delete: Vec<String>,
    confirm_yes: Vec<String>,
    confirm_no: Vec<String>,
    rescan: Vec<String>,
    quit: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    go_up,
    go_down,
    go_to_top,
    go_to_bottom,
    delete,
    confirm_yes,
    confirm_no,
    rescan,
    quit,
);

/// Default input configuration options
impl Default for Keys {
    fn default() -> Self {
        Keys {
            go_up: vec!["k".into(), "Up".into()],
            go_down: vec!["j".into(), "Down".into()],
            go_to_top: vec!["g".into(), "Home".into()],
            go_to_bottom: vec!["G".into(), "End".into()],

            delete: vec!["d".into(), "D".into()],
            confirm_yes: vec!["y".into()],
            confirm_no: vec!["n".into(), "Esc".into()],

            rescan: vec!["r".into()],
            quit: vec!["q".into(), "Esc".into(), "Ctrl+c".into()],
        }
    }
}
