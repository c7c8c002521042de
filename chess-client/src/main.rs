use std::io::IsTerminal;

use anyhow::Result;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chess_client::input::run_input_loop;
use chess_client::menu;
use chess_client::reader::ProtocolReader;
use chess_client::session::{DisplayMode, Session};
use chess_client::settings::ClientSettings;
use chess_client::shutdown::Shutdown;

use protocol::{ClientCommand, LineReader};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志（用户提示走 stdout，诊断走 tracing）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chess_client=warn".parse()?)
                .add_directive("protocol=warn".parse()?),
        )
        .init();

    println!("{}", "=== Terminal Chess ===".cyan());

    let mut settings = ClientSettings::load();
    let (name, mode) = menu::prompt_session(&settings)?;

    println!("\n{}", "Connecting to server...".green());
    let (lines, mut writer) =
        match protocol::connect(&settings.server_host, settings.server_port).await {
            Ok(pair) => pair,
            Err(e) => {
                eprintln!("{} {}", "Failed to connect:".red(), e);
                std::process::exit(1);
            }
        };

    let session = Session::new(settings.display_mode());
    let shutdown = Shutdown::new();

    // 读取任务独占读端并驱动协议状态机
    let mut reader = ProtocolReader::new(
        lines,
        session.clone(),
        shutdown.clone(),
        std::io::stdout(),
    )
    .with_clear_screen(std::io::stdout().is_terminal());
    let reader_task = tokio::spawn(async move {
        reader.run().await;
    });

    // 注册昵称并发起所选模式
    let mut registered = true;
    for cmd in menu::opening_commands(&name, &mode) {
        if let Err(e) = writer.send_line(&cmd.to_line()).await {
            eprintln!("{} {}", "Send failed:".red(), e);
            shutdown.trigger();
            registered = false;
            break;
        }
    }

    if registered {
        let stdin = LineReader::new(tokio::io::stdin());
        let mut out = std::io::stdout();
        run_input_loop(stdin, &mut writer, session.clone(), shutdown.clone(), &mut out).await;
    }

    // 停机：尽力发送 QUIT，随后无条件释放写端
    shutdown.trigger();
    let _ = writer.send_line(&ClientCommand::Quit.to_line()).await;
    let _ = writer.shutdown().await;
    let _ = reader_task.await;

    // 记住本次会话的昵称和显示模式，供下次启动使用
    settings.nickname = name;
    settings.ascii_only = session.display_mode() == DisplayMode::PlainAscii;
    if let Err(e) = settings.save() {
        tracing::warn!("failed to save settings: {}", e);
    }

    Ok(())
}
