//! # Command Execution Module / 命令执行模块
//!
//! Low-level process plumbing: spawn an external command and drain both of
//! its output streams concurrently. The streams are kept separate because the
//! execution protocol classifies any error-stream content as a hard failure,
//! distinct from ordinary captured output.
//!
//! 低级进程管道：启动外部命令并并发排空其两个输出流。
//! 两个流保持分离，因为执行协议将任何错误流内容归类为硬失败，
//! 与普通捕获输出不同。

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Everything captured from one finished (or failed-to-start) process.
/// 从一个已结束（或启动失败）的进程捕获的所有内容。
pub struct CapturedProcess {
    /// The exit status, or the I/O error that prevented the spawn.
    /// 退出状态，或阻止启动的 I/O 错误。
    pub status: std::io::Result<std::process::ExitStatus>,
    /// Raw standard-output text, lines joined with `\n`.
    /// 原始标准输出文本，行之间以 `\n` 连接。
    pub stdout: String,
    /// Raw error-stream text, lines joined with `\n`.
    /// 原始错误流文本，行之间以 `\n` 连接。
    pub stderr: String,
}

/// Spawns a command, blocks until it exits, and captures stdout and stderr
/// into separate buffers. Both streams are read by dedicated tasks while the
/// process runs, so a tool that fills one pipe cannot deadlock the runner.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// 启动一个命令，阻塞直到其退出，并将 stdout 和 stderr 捕获到单独的缓冲区。
/// 进程运行时由专用任务读取两个流，因此填满一个管道的工具
/// 不会使运行器死锁。
///
/// # Arguments
/// * `cmd` - 要执行的 `tokio::process::Command`。
pub async fn spawn_and_capture(mut cmd: tokio::process::Command) -> CapturedProcess {
    let mut child = match cmd
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            // If spawning fails, there is nothing to capture.
            // 如果启动失败，则没有任何内容可捕获。
            return CapturedProcess {
                status: Err(e),
                stdout: String::new(),
                stderr: String::new(),
            };
        }
    };

    let stdout = match child.stdout.take() {
        Some(stdout) => stdout,
        None => {
            return CapturedProcess {
                status: Err(std::io::Error::other("failed to capture stdout handle")),
                stdout: String::new(),
                stderr: String::new(),
            };
        }
    };
    let stderr = match child.stderr.take() {
        Some(stderr) => stderr,
        None => {
            return CapturedProcess {
                status: Err(std::io::Error::other("failed to capture stderr handle")),
                stdout: String::new(),
                stderr: String::new(),
            };
        }
    };

    let stdout_handle = tokio::spawn(drain_lines(stdout));
    let stderr_handle = tokio::spawn(drain_lines(stderr));

    // Wait for the process to exit.
    // 等待进程退出。
    let status = child.wait().await;

    // Join the reader tasks to ensure all output has been captured.
    // 等待读取任务结束，以确保所有输出都已捕获。
    let stdout_text = match stdout_handle.await {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to join stdout task: {}", e);
            String::new()
        }
    };
    let stderr_text = match stderr_handle.await {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to join stderr task: {}", e);
            String::new()
        }
    };

    CapturedProcess {
        status,
        stdout: stdout_text,
        stderr: stderr_text,
    }
}

/// Reads one stream line by line into a string, each line newline-terminated.
/// 将一个流逐行读取到字符串中，每行以换行符结尾。
async fn drain_lines<R>(stream: R) -> String
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let mut buffer = String::new();
    let reader = BufReader::new(stream);
    let mut lines = reader.lines();
    while let Ok(Some(line)) = lines.next_line().await {
        buffer.push_str(&line);
        buffer.push('\n');
    }
    buffer
}
