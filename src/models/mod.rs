pub mod action;
pub mod event;
pub mod policy;
pub mod session;
pub mod verdict;
pub mod window;
