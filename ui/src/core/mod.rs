//! Cross-cutting helpers the navigation chrome and shells build on.

pub mod pages;
pub mod scroll;
pub mod storage;
pub mod theme;
pub mod viewport;
