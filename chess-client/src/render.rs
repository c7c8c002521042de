//! 棋盘渲染
//!
//! 把服务端推送的文本快照变成可打印的多行字符串：Unicode 棋子符号、
//! 深浅交替的方格底色、黑方视角翻转。任何畸形行都原样输出，
//! 渲染路径永不失败。

use colored::Colorize;

use protocol::{unicode_glyph, BoardSnapshot, EMPTY_SQUARE, FLIPPED_FILE_LABELS, RANK_ROW_TOKENS};

/// 渲染风格
#[derive(Debug, Clone, Copy)]
pub struct RenderStyle {
    /// 使用 Unicode 棋子符号
    pub unicode: bool,
    /// 使用彩色方格和棋子着色
    pub colorize: bool,
    /// 从黑方视角渲染（1 行在上）
    pub flip: bool,
}

impl RenderStyle {
    /// 彩色 Unicode 风格
    pub fn unicode_color(flip: bool) -> Self {
        Self {
            unicode: true,
            colorize: true,
            flip,
        }
    }

    /// 纯 ASCII 风格（不输出任何控制序列）
    pub fn plain_ascii(flip: bool) -> Self {
        Self {
            unicode: false,
            colorize: false,
            flip,
        }
    }
}

/// 方格是否为深色
///
/// 以真实棋盘坐标计算：a1（列 0，行 1）为深色。
fn is_dark(file: usize, rank: u32) -> bool {
    (file as u32 + rank) % 2 == 1
}

/// 显示位置对应的真实列索引
///
/// 翻转视角下显示顺序颠倒，方格颜色必须仍按真实坐标计算。
fn true_file_index(display_index: usize, flip: bool) -> usize {
    if flip {
        7 - display_index
    } else {
        display_index
    }
}

/// 渲染一帧棋盘快照
pub fn render_board(snapshot: &BoardSnapshot, style: RenderStyle) -> String {
    let mut rows: Vec<&String> = snapshot.rank_rows().iter().collect();
    if style.flip {
        rows.reverse();
    }

    let mut out_lines = Vec::with_capacity(rows.len() + 1);
    for raw in rows {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.len() < RANK_ROW_TOKENS {
            // 畸形行：原样回退，不中断整帧渲染
            out_lines.push(raw.clone());
            continue;
        }

        let rank_label = tokens[0];
        let rank_num: u32 = rank_label.parse().unwrap_or(0);

        let mut pieces: Vec<&str> = tokens[1..RANK_ROW_TOKENS].to_vec();
        if style.flip {
            pieces.reverse();
        }

        let mut row = String::from(rank_label);
        row.push(' ');
        for (display_index, token) in pieces.iter().enumerate() {
            let code = token.chars().next().unwrap_or(EMPTY_SQUARE);
            row.push_str(&render_cell(code, display_index, rank_num, style));
        }
        out_lines.push(row);
    }

    if style.flip {
        out_lines.push(FLIPPED_FILE_LABELS.to_string());
    } else {
        out_lines.push(snapshot.file_labels().to_string());
    }

    out_lines.join("\n")
}

/// 渲染单个方格
fn render_cell(code: char, display_index: usize, rank_num: u32, style: RenderStyle) -> String {
    let symbol = if style.unicode {
        match unicode_glyph(code) {
            Some(glyph) => glyph,
            // 未知代码和空格在 Unicode 模式下都渲染为空白
            None => ' ',
        }
    } else {
        code
    };

    let text = format!(" {} ", symbol);
    if !style.colorize {
        return text;
    }

    let dark = is_dark(true_file_index(display_index, style.flip), rank_num);
    let cell = if dark {
        text.as_str().on_blue()
    } else {
        text.as_str().on_white()
    };
    let cell = if code.is_ascii_lowercase() {
        cell.yellow()
    } else if code != EMPTY_SQUARE {
        cell.black()
    } else {
        cell.green()
    };
    cell.to_string()
}
