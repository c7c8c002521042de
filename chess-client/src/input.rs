//! 交互命令循环
//!
//! 独占连接的写端，逐行读取用户输入：本地命令（quit / ff / ascii /
//! unicode / redraw）就地处理，其余输入先尝试归一化为坐标走法再发送。
//! 写失败视为连接已断，触发停机。

use std::io::Write;

use colored::Colorize;
use tokio::io::{AsyncRead, AsyncWrite};

use protocol::{
    looks_like_move, normalize_move, ClientCommand, LineReader, LineWriter,
};

use crate::render::{render_board, RenderStyle};
use crate::session::{DisplayMode, Session};
use crate::shutdown::Shutdown;

/// 运行交互循环，直到用户退出、输入流结束或停机信号
///
/// 返回后由调用方负责发送 QUIT 并释放写端。
pub async fn run_input_loop<R, W, O>(
    mut input: LineReader<R>,
    writer: &mut LineWriter<W>,
    session: Session,
    shutdown: Shutdown,
    out: &mut O,
) where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    O: Write,
{
    loop {
        let mut wait_shutdown = shutdown.clone();
        let result = tokio::select! {
            _ = wait_shutdown.wait() => break,
            // Ctrl-C 也走正常退出路径：QUIT + 释放写端由调用方完成
            _ = tokio::signal::ctrl_c() => break,
            result = input.next_line() => result,
        };

        let line = match result {
            Ok(Some(line)) => line.trim().to_string(),
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("input error: {}", e);
                break;
            }
        };
        if line.is_empty() {
            continue;
        }

        let lower = line.to_lowercase();
        match lower.as_str() {
            "quit" | "exit" => break,
            "ascii" => {
                session.set_display_mode(DisplayMode::PlainAscii);
                let _ = writeln!(out, "{}", "[display] switched to plain ASCII".yellow());
                redraw(&session, out);
                continue;
            }
            "unicode" => {
                session.set_display_mode(DisplayMode::UnicodeColor);
                let _ = writeln!(out, "{}", "[display] switched to colored unicode".yellow());
                redraw(&session, out);
                continue;
            }
            "redraw" => {
                if session.last_snapshot().is_some() {
                    redraw(&session, out);
                } else {
                    let _ = writeln!(out, "[no board yet]");
                }
                continue;
            }
            _ => {}
        }

        let cmd = if matches!(lower.as_str(), "ff" | "forfeit") {
            ClientCommand::Forfeit.to_line()
        } else {
            let upper = line.to_uppercase();
            if upper.starts_with("MOVE ") || upper.starts_with("NAME ") {
                // 已经是协议命令，原样发送
                line.clone()
            } else {
                match normalize_move(&line) {
                    Some(coord) => ClientCommand::Move(coord).to_line(),
                    None => {
                        if looks_like_move(&line) {
                            // 交给服务端拒绝，同时给出记号提示
                            let _ = writeln!(
                                out,
                                "{}",
                                "[hint] Use full notation: e2e4 or with piece: Nb1c3".yellow()
                            );
                            line.clone()
                        } else {
                            continue;
                        }
                    }
                }
            }
        };

        if let Err(e) = writer.send_line(&cmd).await {
            tracing::error!("send failed: {}", e);
            let _ = writeln!(out, "{} {}", "[send failed]".red(), e);
            shutdown.trigger();
            break;
        }
    }

    shutdown.trigger();
}

/// 按当前显示模式重新渲染并打印最近一帧
fn redraw<O: Write>(session: &Session, out: &mut O) {
    let Some(snapshot) = session.last_snapshot() else {
        return;
    };
    let style = match session.display_mode() {
        DisplayMode::UnicodeColor => RenderStyle::unicode_color(session.flip()),
        DisplayMode::PlainAscii => RenderStyle::plain_ascii(session.flip()),
    };
    let rendered = render_board(&snapshot, style);
    session.set_last_board(rendered.clone());
    let _ = writeln!(out, "{}", rendered);
}
