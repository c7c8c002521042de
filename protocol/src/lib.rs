//! 国际象棋终端客户端共享协议库
//!
//! 包含:
//! - 棋子代码、Unicode 棋子符号、玩家颜色
//! - 棋盘快照 (BoardSnapshot)
//! - 出站命令编码 (ClientCommand)
//! - 入站事件解析 (ServerEvent)
//! - 走法记号归一化 (代数记号 -> 坐标记号)
//! - 行文本传输层 (LineReader / LineWriter)

mod board;
mod command;
mod constants;
mod error;
mod event;
mod notation;
mod piece;
mod transport;

pub use board::BoardSnapshot;
pub use command::ClientCommand;
pub use constants::*;
pub use error::{ProtocolError, Result};
pub use event::ServerEvent;
pub use notation::{looks_like_move, normalize_move};
pub use piece::{unicode_glyph, PlayerColor, EMPTY_SQUARE};
pub use transport::{connect, LineReader, LineWriter};
