//! 棋盘快照
//!
//! 服务端在 BOARD 标记行之后推送 9 行文本：8 行棋子行（行号 + 8 个棋子格，
//! 空格为 `.`）加 1 行列标注。快照只保留原始文本，渲染时才逐行解析，
//! 畸形行留给渲染层做原样回退。

use crate::constants::{BOARD_FRAME_LINES, DEFAULT_FILE_LABELS};

/// 一帧完整（或截断）的棋盘快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    lines: Vec<String>,
}

impl BoardSnapshot {
    /// 从实际收到的行构造快照
    ///
    /// 流提前结束时行数可能不足 9，此时快照标记为不完整。
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// 是否收到了完整的 9 行
    pub fn is_complete(&self) -> bool {
        self.lines.len() == BOARD_FRAME_LINES
    }

    /// 收到的行数
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// 是否一行都没收到
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 棋子行（完整快照取前 8 行，截断快照取全部）
    pub fn rank_rows(&self) -> &[String] {
        if self.is_complete() {
            &self.lines[..BOARD_FRAME_LINES - 1]
        } else {
            &self.lines
        }
    }

    /// 列标注行（完整快照取最后一行，否则用默认标注）
    pub fn file_labels(&self) -> &str {
        if self.is_complete() {
            let labels = &self.lines[BOARD_FRAME_LINES - 1];
            if labels.trim().is_empty() {
                DEFAULT_FILE_LABELS
            } else {
                labels
            }
        } else {
            DEFAULT_FILE_LABELS
        }
    }

    /// 原始行（截断快照诊断用）
    pub fn raw_lines(&self) -> &[String] {
        &self.lines
    }
}
