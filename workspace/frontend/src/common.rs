//! Shared UI plumbing: toasts, fetch state rendering, spinners.

pub mod error;
pub mod fetch_hook;
pub mod fetch_render;
pub mod loading;
pub mod toast;
