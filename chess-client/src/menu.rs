//! 启动菜单
//!
//! 连接服务器之前的一小段同步问答：昵称和对局模式。

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use colored::Colorize;

use protocol::ClientCommand;

use crate::settings::ClientSettings;

/// 对局模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameMode {
    /// 快速匹配
    Quick,
    /// 创建私人房间（可指定自定义房间号）
    Create(Option<String>),
    /// 加入私人房间
    Join(String),
    /// 人机对战
    Computer,
}

/// 会话开始时要发送的命令序列：注册昵称 + 一条模式命令
pub fn opening_commands(name: &str, mode: &GameMode) -> Vec<ClientCommand> {
    let mode_cmd = match mode {
        GameMode::Quick => ClientCommand::Find,
        GameMode::Create(key) => ClientCommand::Create(key.clone()),
        GameMode::Join(key) => ClientCommand::Join(key.clone()),
        GameMode::Computer => ClientCommand::Computer,
    };
    vec![ClientCommand::Name(name.to_string()), mode_cmd]
}

/// 交互式询问昵称和对局模式
pub fn prompt_session(settings: &ClientSettings) -> Result<(String, GameMode)> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock();

    let name = ask(&mut lines, &format!("Enter your name [{}]: ", settings.nickname))?;
    let name = if name.is_empty() {
        settings.nickname.clone()
    } else {
        name
    };

    println!("\n{}", "Game modes:".yellow());
    println!("  1. Quick match (auto-pair with waiting player)");
    println!("  2. Create private room");
    println!("  3. Join private room");
    println!("  4. Play against computer");

    let choice = ask(&mut lines, "Choose mode (1/2/3/4) [1]: ")?;
    let mode = match choice.as_str() {
        "" | "1" => GameMode::Quick,
        "2" => {
            let key = ask(&mut lines, "Enter room key (leave empty for random): ")?;
            GameMode::Create(if key.is_empty() { None } else { Some(key) })
        }
        "3" => {
            let key = ask(&mut lines, "Enter room key: ")?;
            if key.is_empty() {
                bail!("room key required");
            }
            GameMode::Join(key)
        }
        "4" => GameMode::Computer,
        other => bail!("unknown mode: {}", other),
    };

    Ok((name, mode))
}

/// 打印提示并读取一行（去掉首尾空白）
fn ask(lines: &mut impl BufRead, prompt: &str) -> Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    let mut buf = String::new();
    lines.read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_commands_quick() {
        assert_eq!(
            opening_commands("Alice", &GameMode::Quick),
            vec![ClientCommand::Name("Alice".into()), ClientCommand::Find]
        );
    }

    #[test]
    fn test_opening_commands_rooms() {
        assert_eq!(
            opening_commands("Bob", &GameMode::Create(None)),
            vec![ClientCommand::Name("Bob".into()), ClientCommand::Create(None)]
        );
        assert_eq!(
            opening_commands("Bob", &GameMode::Create(Some("k42".into()))),
            vec![
                ClientCommand::Name("Bob".into()),
                ClientCommand::Create(Some("k42".into()))
            ]
        );
        assert_eq!(
            opening_commands("Bob", &GameMode::Join("k42".into())),
            vec![
                ClientCommand::Name("Bob".into()),
                ClientCommand::Join("k42".into())
            ]
        );
    }

    #[test]
    fn test_opening_commands_computer() {
        assert_eq!(
            opening_commands("Eve", &GameMode::Computer),
            vec![ClientCommand::Name("Eve".into()), ClientCommand::Computer]
        );
    }
}
