//! Human-facing status lines on stdout.
//!
//! `handle` prints a machine-readable envelope on stdout, so it switches
//! these lines off with [`set_quiet`].

use ansi_term::Colour::{Blue, Green, Yellow};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn emit(icon: &str, line: String) {
    if !QUIET.load(Ordering::Relaxed) {
        println!("{icon} {line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit("ℹ️", Blue.bold().paint(msg.to_string()).to_string());
}

pub fn success<T: fmt::Display>(msg: T) {
    emit("✅", Green.paint(msg.to_string()).to_string());
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit("⚠️", Yellow.paint(msg.to_string()).to_string());
}
