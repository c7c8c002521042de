//! 会话共享状态
//!
//! 读取任务写入执棋颜色和最近一次渲染的棋盘；交互循环切换显示模式
//! 并读取棋盘用于 redraw。所有访问都经过同一把锁，锁不对外暴露。

use std::sync::{Arc, Mutex};

use protocol::{BoardSnapshot, PlayerColor};

/// 棋盘显示模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Unicode 棋子符号 + 彩色方格
    #[default]
    UnicodeColor,
    /// 纯 ASCII，无任何控制序列
    PlainAscii,
}

/// 会话状态
#[derive(Debug, Default)]
struct SessionState {
    /// 本方执棋颜色（START 事件分配）
    player_color: PlayerColor,
    /// 最近一次渲染好的棋盘文本
    last_board: Option<String>,
    /// 最近一帧的原始快照（切换显示模式后重绘用）
    last_snapshot: Option<BoardSnapshot>,
    /// 当前显示模式
    display_mode: DisplayMode,
}

/// 会话状态句柄（可克隆，跨任务共享）
#[derive(Clone, Default)]
pub struct Session {
    state: Arc<Mutex<SessionState>>,
}

impl Session {
    /// 创建新会话，可指定初始显示模式
    pub fn new(display_mode: DisplayMode) -> Self {
        let session = Self::default();
        session.set_display_mode(display_mode);
        session
    }

    pub fn player_color(&self) -> PlayerColor {
        self.state.lock().expect("session lock poisoned").player_color
    }

    pub fn set_player_color(&self, color: PlayerColor) {
        self.state.lock().expect("session lock poisoned").player_color = color;
    }

    pub fn last_board(&self) -> Option<String> {
        self.state
            .lock()
            .expect("session lock poisoned")
            .last_board
            .clone()
    }

    pub fn set_last_board(&self, rendered: String) {
        self.state.lock().expect("session lock poisoned").last_board = Some(rendered);
    }

    pub fn last_snapshot(&self) -> Option<BoardSnapshot> {
        self.state
            .lock()
            .expect("session lock poisoned")
            .last_snapshot
            .clone()
    }

    pub fn set_last_snapshot(&self, snapshot: BoardSnapshot) {
        self.state.lock().expect("session lock poisoned").last_snapshot = Some(snapshot);
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.state.lock().expect("session lock poisoned").display_mode
    }

    pub fn set_display_mode(&self, mode: DisplayMode) {
        self.state.lock().expect("session lock poisoned").display_mode = mode;
    }

    /// 渲染视角是否需要翻转（本方执黑时为真）
    pub fn flip(&self) -> bool {
        self.player_color() == PlayerColor::Black
    }
}
