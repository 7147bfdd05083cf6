pub mod editor;
pub mod files;
pub mod log;
pub(crate) mod messages;
pub mod naming;
pub mod validate;
