//! # 常量与默认配置
//!
//! 固定的数值限制与内置字符串。组件通过参数显式接收这些值，
//! 不读取进程级全局状态。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用，传入 `compress/` 与 `lint/`

/// CSS 压缩输出的换行列
pub const CSS_LINE_BREAK_COLUMN: usize = 80;

/// 诊断详情行的最大字符数
pub const MAX_DETAIL_LENGTH: usize = 100;

/// 详情行被截断时追加的标记
pub const ELLIPSIS: &str = "...";

/// 日志中诊断行的缩进
pub const DIAGNOSTIC_INDENT: &str = "    ";

/// JSLint 配置指令的起始标记
pub const DIRECTIVE_OPENER: &str = "/*jslint ";

/// JSLint 配置指令的结束标记
pub const DIRECTIVE_CLOSER: &str = " */";

/// 未提供配置时使用的内置规则
pub const DEFAULT_JSLINT_CONFIG: &str = "/*jslint white: true, browser: true, onevar: true, undef: true, nomen: true, eqeqeq: true, plusplus: true, bitwise: true, regexp: true, strict: true, newcap: true, immed: true */";

/// 随程序安装的 lint 脚本文件名
pub const LINT_SCRIPT_NAME: &str = "jslint.js";

/// 脚本解释器文件名
#[cfg(windows)]
pub const INTERPRETER_NAME: &str = "cscript.exe";

#[cfg(not(windows))]
pub const INTERPRETER_NAME: &str = "cscript";

/// 解释器的默认参数（静默模式）
pub const DEFAULT_INTERPRETER_ARGS: &[&str] = &["//nologo"];
