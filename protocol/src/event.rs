//! 服务端入站事件解析
//!
//! 每行一条事件。解析永不失败：未识别的行归入 Other，由上层原样输出。

use crate::constants::BOARD_MARKER;
use crate::piece::PlayerColor;

/// 服务端发送给客户端的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// 棋盘帧标记行（后随 9 行快照）
    BoardFrame,
    /// 私人房间创建成功，附房间号
    RoomCreated(String),
    /// 排队等待对手
    Queued(String),
    /// 房间超时未使用
    RoomExpired(String),
    /// 房间被撤销
    Cancelled(String),
    /// 对局开始，分配颜色
    MatchStarted { color: PlayerColor, raw: String },
    /// 轮到本方走棋
    YourMove,
    /// 对手走法回显
    OpponentMove(String),
    /// 上一条命令被拒绝
    Error(String),
    /// 对局结束（会话保持打开）
    MatchEnded(String),
    /// 未识别的行
    Other(String),
}

impl ServerEvent {
    /// 解析一行服务端文本
    pub fn parse(line: &str) -> Self {
        if line == BOARD_MARKER {
            return ServerEvent::BoardFrame;
        }
        if line == "YOURMOVE" {
            return ServerEvent::YourMove;
        }
        if let Some(key) = line.strip_prefix("ROOM_EXPIRED ") {
            return ServerEvent::RoomExpired(key.to_string());
        }
        if let Some(key) = line.strip_prefix("ROOM ") {
            return ServerEvent::RoomCreated(key.to_string());
        }
        if let Some(text) = line.strip_prefix("QUEUE ") {
            return ServerEvent::Queued(text.to_string());
        }
        if let Some(key) = line.strip_prefix("CANCELLED ") {
            return ServerEvent::Cancelled(key.to_string());
        }
        if line.starts_with("START ") {
            // START <COLOR> <对手信息>，整行保留用于展示
            let color = line
                .split_whitespace()
                .nth(1)
                .map(PlayerColor::parse)
                .unwrap_or(PlayerColor::Unknown);
            return ServerEvent::MatchStarted {
                color,
                raw: line.to_string(),
            };
        }
        if let Some(text) = line.strip_prefix("OPPONENT_MOVE ") {
            return ServerEvent::OpponentMove(text.to_string());
        }
        if let Some(text) = line.strip_prefix("ERROR ") {
            return ServerEvent::Error(text.to_string());
        }
        if let Some(text) = line.strip_prefix("END ") {
            return ServerEvent::MatchEnded(text.to_string());
        }
        ServerEvent::Other(line.to_string())
    }
}
