pub mod actions;
pub mod gui;
pub mod launcher;
pub mod logging;
pub mod recent;
pub mod settings;
pub mod storage;
pub mod toast_log;
