//! log → tracing 桥接（需开启 `tracing` 特性）
//! 本库只通过 `log` 门面输出；使用 tracing 订阅者的调用方在初始化订阅者后调用一次即可

/// 安装 LogTracer；重复调用返回 false
#[cfg(feature = "tracing")]
pub fn init_log_bridge() -> bool {
    match tracing_log::LogTracer::init() {
        Ok(()) => {
            tracing::debug!("log records are now forwarded to tracing");
            true
        }
        Err(e) => {
            log::debug!("LogTracer already installed: {}", e);
            false
        }
    }
}

#[cfg(all(test, feature = "tracing"))]
mod tests {
    use super::*;

    #[test]
    fn bridge_installs_once() {
        init_log_bridge();
        assert!(!init_log_bridge());
    }
}
