//! rscompat-engine 内核错误定义
//! 封装内核层所有核心错误，与业务层错误解耦，基于thiserror实现类型安全处理
use thiserror::Error;

use regex::Error as RegexError;

/// 内核核心错误枚举
/// 其中 InvalidRulePattern / MalformedCustomRules / MalformedSource 属于可恢复错误：
/// 只在恢复点记录日志，不会传播到解析调用之外
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================== 规则相关错误 =====================
    /// 正则表达式编译失败（正则语法错误/不支持的特性）
    #[error("Regex compilation failed: {0}")]
    RegexCompileError(#[from] RegexError),

    /// 单条规则模式无效（内置或自定义规则），该模式被跳过
    #[error("Invalid pattern for rule [{rule}]: {pattern} ({reason})")]
    InvalidRulePattern {
        rule: String,
        pattern: String,
        reason: String,
    },

    /// 自定义规则文档格式错误，自定义规则集降级为空
    #[error("Malformed custom rules: {0}")]
    MalformedCustomRules(String),

    // ===================== 解析相关错误 =====================
    /// 源码片段无法解析（CSS畸形节点等），跳过该节点继续解析
    #[error("Malformed source at line {line}: {reason}")]
    MalformedSource { line: u32, reason: String },

    // ===================== 内核基础错误 =====================
    /// 无效输入参数（内核层输入校验失败）
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// 内核层全局Result类型别名
pub type CoreResult<T> = Result<T, CoreError>;
