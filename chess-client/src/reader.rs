//! 协议读取任务
//!
//! 独占连接的读端，逐行驱动一个两状态的状态机：平时逐行解析单行事件，
//! 遇到 BOARD 标记则缓冲接下来的 9 行组成一帧快照再渲染。流关闭或
//! 读错误时发出断线提示并触发停机信号，不做重连。

use std::io::Write;

use colored::Colorize;
use tokio::io::AsyncRead;

use protocol::{BoardSnapshot, LineReader, ServerEvent, BOARD_FRAME_LINES};

use crate::render::{render_board, RenderStyle};
use crate::session::{DisplayMode, Session};
use crate::shutdown::Shutdown;

/// 协议读取器
pub struct ProtocolReader<R, W> {
    lines: LineReader<R>,
    session: Session,
    shutdown: Shutdown,
    out: W,
    clear_screen: bool,
}

impl<R: AsyncRead + Unpin, W: Write> ProtocolReader<R, W> {
    /// 创建读取器，输出写入 out（测试中注入缓冲区）
    pub fn new(lines: LineReader<R>, session: Session, shutdown: Shutdown, out: W) -> Self {
        Self {
            lines,
            session,
            shutdown,
            out,
            clear_screen: false,
        }
    }

    /// 每帧棋盘渲染前清屏（只在真实终端上开启）
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// 运行读取循环，直到流结束、读错误或停机信号
    pub async fn run(&mut self) {
        loop {
            let mut shutdown = self.shutdown.clone();
            let result = tokio::select! {
                _ = shutdown.wait() => break,
                result = self.lines.next_line() => result,
            };

            match result {
                Ok(Some(line)) => {
                    if !self.handle_line(&line).await {
                        break;
                    }
                }
                Ok(None) => {
                    self.disconnect();
                    break;
                }
                Err(e) => {
                    tracing::error!("read loop error: {}", e);
                    let _ = writeln!(self.out, "{} {}", "[read error]".red(), e);
                    self.shutdown.trigger();
                    break;
                }
            }
        }
    }

    /// 处理一行入站文本，返回 false 表示读取循环应当结束
    async fn handle_line(&mut self, line: &str) -> bool {
        match ServerEvent::parse(line) {
            ServerEvent::BoardFrame => self.handle_board_frame().await,
            ServerEvent::RoomCreated(key) => {
                let _ = writeln!(self.out, "\n{}", "[room created]".cyan());
                let _ = writeln!(self.out, "{}", format!("  key: {}", key).as_str().cyan());
                let _ = writeln!(
                    self.out,
                    "{}\n",
                    format!("  share it; your opponent joins with: JOIN {}", key)
                        .as_str()
                        .cyan()
                );
                true
            }
            ServerEvent::Queued(text) => {
                let _ = writeln!(self.out, "{} {}", "[queued]".yellow(), text);
                true
            }
            ServerEvent::RoomExpired(key) => {
                let _ = writeln!(self.out, "{} {}", "[room expired]".yellow(), key);
                true
            }
            ServerEvent::Cancelled(key) => {
                let _ = writeln!(self.out, "{} {}", "[room cancelled]".yellow(), key);
                true
            }
            ServerEvent::MatchStarted { color, raw } => {
                self.session.set_player_color(color);
                let _ = writeln!(self.out, "{} {}", "[match started]".cyan(), raw);
                true
            }
            ServerEvent::YourMove => {
                let _ = writeln!(self.out, "{}", "[your move]".green());
                true
            }
            ServerEvent::OpponentMove(text) => {
                let _ = writeln!(self.out, "{} {}", "[opponent]".magenta(), text);
                true
            }
            ServerEvent::Error(text) => {
                let _ = writeln!(self.out, "{} {}", "[error]".red(), text);
                true
            }
            ServerEvent::MatchEnded(text) => {
                // 对局结束后会话保持打开，由用户决定何时退出
                let _ = writeln!(self.out, "{} {}", "[game ended]".yellow(), text);
                true
            }
            ServerEvent::Other(raw) => {
                if !raw.is_empty() {
                    let _ = writeln!(self.out, "{}", raw);
                }
                true
            }
        }
    }

    /// 读取并渲染一帧棋盘，返回 false 表示流在帧中途结束
    async fn handle_board_frame(&mut self) -> bool {
        let mut frame_lines = Vec::with_capacity(BOARD_FRAME_LINES);
        for _ in 0..BOARD_FRAME_LINES {
            match self.lines.next_line().await {
                Ok(Some(line)) => frame_lines.push(line),
                Ok(None) => break,
                Err(e) => {
                    tracing::error!("read loop error inside board frame: {}", e);
                    let _ = writeln!(self.out, "{} {}", "[read error]".red(), e);
                    self.shutdown.trigger();
                    return false;
                }
            }
        }

        let snapshot = BoardSnapshot::from_lines(frame_lines);
        if !snapshot.is_complete() {
            // 截断帧只留作诊断，不当作有效棋盘渲染
            tracing::warn!(
                "truncated board frame: got {} of {} lines: {:?}",
                snapshot.len(),
                BOARD_FRAME_LINES,
                snapshot.raw_lines()
            );
            self.disconnect();
            return false;
        }

        let flip = self.session.flip();
        let style = match self.session.display_mode() {
            DisplayMode::UnicodeColor => RenderStyle::unicode_color(flip),
            DisplayMode::PlainAscii => RenderStyle::plain_ascii(flip),
        };
        let rendered = render_board(&snapshot, style);
        self.session.set_last_snapshot(snapshot);
        self.session.set_last_board(rendered.clone());

        if self.clear_screen {
            let _ = write!(self.out, "\u{1b}[2J\u{1b}[H");
        }
        let _ = writeln!(self.out, "{}", rendered);
        true
    }

    /// 发出断线提示并触发停机
    fn disconnect(&mut self) {
        tracing::info!("connection closed by server");
        let _ = writeln!(self.out, "{}", "[connection closed by server]".yellow());
        self.shutdown.trigger();
    }
}
