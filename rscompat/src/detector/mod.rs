//! 检测模块：按文件类型分派到三个解析器
pub mod detector;

pub use self::detector::FeatureDetector;
