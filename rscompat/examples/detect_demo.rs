//! Feature detection demonstration for rscompat
//! rscompat 源码特性检测演示程序
//! 功能说明：
//! 1. 按配置加载自定义规则（RSCOMPAT_CUSTOM_RULES 或 custom_rules.json）
//! 2. 逐个检测命令行给出的文件，输出结构化 JSON 报告
//!
//! 运行命令：
//! cargo run --example detect_demo -- style.css app.js index.html

use env_logger::{Builder, Env, Target};
use rscompat::{FeatureDetector, Language, RuleConfig};
use serde_json::to_string_pretty;
use std::{error::Error, path::Path, time::Instant};

fn main() -> Result<(), Box<dyn Error>> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    let detector = FeatureDetector::from_config(&RuleConfig::default());
    let files: Vec<String> = std::env::args().skip(1).collect();
    if files.is_empty() {
        println!("usage: detect_demo <file>...");
        return Ok(());
    }

    for file in &files {
        let path = Path::new(file);
        let Some(language) = Language::from_path(path) else {
            println!("⚠️ {}: unsupported file type", file);
            continue;
        };

        let start_instant = Instant::now();
        let result = match detector.detect_file(path) {
            Ok(result) => result,
            Err(e) => {
                println!("❌ {}", e);
                continue;
            }
        };
        let elapsed_ms = start_instant.elapsed().as_secs_f64() * 1000.0;

        println!("\n===== {} ({}) | {:.3} ms =====", file, language, elapsed_ms);
        println!("{}", to_string_pretty(&detector.detailed_report(language, &result))?);
        println!("{}", to_string_pretty(&result.details)?);
    }
    Ok(())
}
