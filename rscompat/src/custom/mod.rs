//! 用户自定义规则：文件存储 + 全局入口
pub mod global;
pub mod store;

pub use global::{global_store, init_global_store};
pub use store::CustomRuleStore;
