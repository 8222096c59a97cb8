//! Clipboard command-line utilities.
//!
//! `ccopy` copies standard input or a file into the system clipboard and
//! `cpaste` writes the clipboard out to standard output or a file. Both run
//! their text through the same [`transform::Pipeline`] and reach the clipboard
//! through the [`clipboard::Clipboard`] trait.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod copy;
pub mod error;
pub mod json;
pub mod paste;
pub mod tracing_sub;
pub mod transform;
