//! 协议常量定义

use std::time::Duration;

/// 棋盘帧起始标记行
pub const BOARD_MARKER: &str = "BOARD";

/// 棋盘帧行数（8 行棋子 + 1 行列标注）
pub const BOARD_FRAME_LINES: usize = 9;

/// 每行棋子行的 token 数（行号 + 8 个棋子格）
pub const RANK_ROW_TOKENS: usize = 9;

/// 默认列标注行（服务端未提供时使用）
pub const DEFAULT_FILE_LABELS: &str = "  a b c d e f g h";

/// 翻转视角下的列标注行
pub const FLIPPED_FILE_LABELS: &str = "  h g f e d c b a";

/// 单行最大长度（防止畸形输入占满内存）
pub const MAX_LINE_LEN: usize = 1024;

/// 默认服务器地址
pub const DEFAULT_HOST: &str = "localhost";

/// 默认服务器端口
pub const DEFAULT_PORT: u16 = 5000;

/// 连接超时（秒）
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// 连接超时 Duration
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(CONNECT_TIMEOUT_SECS);
