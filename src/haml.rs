//! Main module for haml library functionality

pub mod compiler;
pub mod emitting;
pub mod formats;
pub mod lexing;
