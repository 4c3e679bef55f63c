//! # lint 子进程监督
//!
//! 每个文件启动一个子进程：写入配置指令行与文件全文，关闭输入流，
//! 然后读空错误流并配对为诊断记录。文件之间严格顺序执行。
//!
//! 会话状态: Spawned → InputWritten → InputClosed → DrainingErrors → Terminated。
//! 无论哪一步失败，子进程都会被回收（kill + wait）。
//!
//! 子进程挂起会阻塞整批检查，没有超时。
//!
//! ## 依赖关系
//! - 被 `commands/lint.rs` 调用
//! - 使用 `lint/toolchain.rs`, `lint/diagnostic.rs`
//! - 使用 `utils/output.rs` 的 `LogSink`

use super::diagnostic::{decode_line, DiagnosticPairs};
use super::encoding::TextEncoding;
use super::toolchain::Toolchain;
use crate::config::{DIAGNOSTIC_INDENT, ELLIPSIS, MAX_DETAIL_LENGTH};
use crate::error::{AssetError, Result};
use crate::models::{DiagnosticRecord, FileReport, RunResult};
use crate::utils::output::LogSink;

use std::fmt;
use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ExitStatus};

/// 检查参数
#[derive(Debug, Clone)]
pub struct LintSettings {
    /// 已规范化的配置指令
    pub directive: String,
    /// 仅校验与展示，不用于转码
    pub encoding: TextEncoding,
    pub max_detail_len: usize,
    pub ellipsis: String,
    pub indent: String,
}

impl LintSettings {
    pub fn new(directive: String, encoding: TextEncoding) -> Self {
        Self {
            directive,
            encoding,
            max_detail_len: MAX_DETAIL_LENGTH,
            ellipsis: ELLIPSIS.to_string(),
            indent: DIAGNOSTIC_INDENT.to_string(),
        }
    }
}

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Spawned,
    InputWritten,
    InputClosed,
    DrainingErrors,
    Terminated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Spawned => "Spawned",
            SessionState::InputWritten => "InputWritten",
            SessionState::InputClosed => "InputClosed",
            SessionState::DrainingErrors => "DrainingErrors",
            SessionState::Terminated => "Terminated",
        };
        f.write_str(name)
    }
}

/// 单个文件的 lint 子进程会话
pub struct LintSession {
    child: Child,
    state: SessionState,
    command: String,
}

impl LintSession {
    /// 启动子进程
    pub fn spawn(toolchain: &Toolchain) -> Result<Self> {
        let command = toolchain.display();
        let child = toolchain
            .command()
            .spawn()
            .map_err(|e| AssetError::SpawnFailed {
                command: command.clone(),
                source: e,
            })?;
        Ok(Self {
            child,
            state: SessionState::Spawned,
            command,
        })
    }

    #[cfg(test)]
    pub fn state(&self) -> SessionState {
        self.state
    }

    fn transition(&mut self, from: SessionState, to: SessionState) -> Result<()> {
        if self.state != from {
            return Err(AssetError::SessionOrder {
                command: self.command.clone(),
                expected: from.to_string(),
                actual: self.state.to_string(),
            });
        }
        self.state = to;
        Ok(())
    }

    fn stream_error(&self, source: io::Error) -> AssetError {
        AssetError::StreamFailed {
            command: self.command.clone(),
            source,
        }
    }

    /// 写入指令行与文件内容
    ///
    /// 子进程提前关闭输入流（broken pipe）不算错误，诊断仍会被读取。
    pub fn write_input(&mut self, directive: &str, content: &[u8]) -> Result<()> {
        self.transition(SessionState::Spawned, SessionState::InputWritten)?;
        let Some(stdin) = self.child.stdin.as_mut() else {
            return Err(self.stream_error(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "stdin is not piped",
            )));
        };
        let written = writeln!(stdin, "{directive}")
            .and_then(|()| stdin.write_all(content))
            .and_then(|()| stdin.flush());
        match written {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            Err(e) => Err(self.stream_error(e)),
        }
    }

    /// 关闭输入流，向子进程发出输入结束信号
    pub fn close_input(&mut self) -> Result<()> {
        self.transition(SessionState::InputWritten, SessionState::InputClosed)?;
        drop(self.child.stdin.take());
        Ok(())
    }

    /// 读到错误流自然结束，按两行一组产出诊断
    pub fn drain_errors(
        &mut self,
        max_detail_len: usize,
        ellipsis: &str,
    ) -> Result<Vec<DiagnosticRecord>> {
        self.transition(SessionState::InputClosed, SessionState::DrainingErrors)?;
        let Some(stderr) = self.child.stderr.take() else {
            return Ok(Vec::new());
        };
        let lines = BufReader::new(stderr).split(b'\n').map(|line| line.map(decode_line));
        DiagnosticPairs::new(lines, max_detail_len, ellipsis)
            .collect::<io::Result<Vec<_>>>()
            .map_err(|e| self.stream_error(e))
    }

    /// 等待子进程退出并回收
    pub fn terminate(mut self) -> Result<ExitStatus> {
        self.transition(SessionState::DrainingErrors, SessionState::Terminated)?;
        self.child.wait().map_err(|e| self.stream_error(e))
    }
}

impl Drop for LintSession {
    fn drop(&mut self) {
        if self.state != SessionState::Terminated {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

/// 顺序检查一组文件的监督器
pub struct Supervisor<'a, L: LogSink> {
    toolchain: &'a Toolchain,
    settings: &'a LintSettings,
    log: &'a L,
}

impl<'a, L: LogSink> Supervisor<'a, L> {
    pub fn new(toolchain: &'a Toolchain, settings: &'a LintSettings, log: &'a L) -> Self {
        Self {
            toolchain,
            settings,
            log,
        }
    }

    #[cfg(test)]
    pub fn check_all(&self, paths: &[PathBuf]) -> Result<RunResult> {
        self.check_all_with(paths, |_| {})
    }

    /// 依次检查所有文件，每个文件完成后回调 `on_file`
    ///
    /// 有诊断的文件不会中断循环；启动失败或读取失败立即中止。
    pub fn check_all_with<F>(&self, paths: &[PathBuf], mut on_file: F) -> Result<RunResult>
    where
        F: FnMut(&FileReport),
    {
        let mut result = RunResult::default();
        for path in paths {
            let report = self.check_file(path)?;
            on_file(&report);
            result.merge(report);
        }
        Ok(result)
    }

    /// 检查单个文件
    pub fn check_file(&self, path: &Path) -> Result<FileReport> {
        self.log.info(&format!("Checking {}", path.display()));

        let content = fs::read(path).map_err(|e| AssetError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let mut session = LintSession::spawn(self.toolchain)?;
        session.write_input(&self.settings.directive, &content)?;
        session.close_input()?;
        let diagnostics =
            session.drain_errors(self.settings.max_detail_len, &self.settings.ellipsis)?;
        session.terminate()?;

        for record in &diagnostics {
            self.log.error(&record.to_log_message(&self.settings.indent));
        }

        Ok(FileReport {
            path: path.to_path_buf(),
            diagnostics,
        })
    }
}
