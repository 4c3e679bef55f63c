//! # lint 外部工具定位
//!
//! 解释器默认位于系统目录，lint 脚本默认位于当前可执行文件旁边。
//! 两者都可以由命令行覆盖。任何一个不存在都视为配置错误。
//!
//! ## 依赖关系
//! - 被 `lint/supervisor.rs` 使用
//! - 使用 `config.rs` 中的文件名常量

use crate::config::{DEFAULT_INTERPRETER_ARGS, INTERPRETER_NAME, LINT_SCRIPT_NAME};
use crate::error::{AssetError, Result};

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// 解释器与 lint 脚本
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub interpreter: PathBuf,
    pub interpreter_args: Vec<OsString>,
    pub script: PathBuf,
}

impl Toolchain {
    /// 解析工具路径并校验其存在
    pub fn resolve(
        interpreter: Option<PathBuf>,
        interpreter_args: Vec<OsString>,
        script: Option<PathBuf>,
    ) -> Result<Self> {
        let interpreter = interpreter.unwrap_or_else(default_interpreter);
        let script = match script {
            Some(p) => p,
            None => default_script()?,
        };
        let interpreter_args = if interpreter_args.is_empty() {
            DEFAULT_INTERPRETER_ARGS.iter().map(OsString::from).collect()
        } else {
            interpreter_args
        };

        let toolchain = Self {
            interpreter,
            interpreter_args,
            script,
        };
        toolchain.ensure_present()?;
        Ok(toolchain)
    }

    /// 检查解释器与脚本都是已存在的文件
    pub fn ensure_present(&self) -> Result<()> {
        for path in [&self.interpreter, &self.script] {
            if !path.is_file() {
                return Err(AssetError::ToolNotFound {
                    path: path.display().to_string(),
                });
            }
        }
        Ok(())
    }

    /// 构造子进程命令：不经过 shell，重定向标准输入与标准错误
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.interpreter);
        cmd.args(&self.interpreter_args)
            .arg(&self.script)
            .stdin(Stdio::piped())
            .stderr(Stdio::piped())
            .stdout(Stdio::inherit());
        cmd
    }

    /// 用于日志与错误信息的命令行文本
    pub fn display(&self) -> String {
        let mut parts = vec![self.interpreter.display().to_string()];
        parts.extend(
            self.interpreter_args
                .iter()
                .map(|a| a.to_string_lossy().into_owned()),
        );
        parts.push(self.script.display().to_string());
        parts.join(" ")
    }
}

/// 系统目录中的解释器
fn default_interpreter() -> PathBuf {
    system_dir().join(INTERPRETER_NAME)
}

#[cfg(windows)]
fn system_dir() -> PathBuf {
    let root = std::env::var_os("SystemRoot").unwrap_or_else(|| OsString::from(r"C:\Windows"));
    Path::new(&root).join("System32")
}

#[cfg(not(windows))]
fn system_dir() -> PathBuf {
    Path::new("/usr/bin").to_path_buf()
}

/// 可执行文件旁边的 lint 脚本
fn default_script() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| AssetError::FileReadError {
        path: "<current executable>".to_string(),
        source: e,
    })?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(LINT_SCRIPT_NAME))
}
