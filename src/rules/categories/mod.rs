//! Rule categories

pub mod ssh;
