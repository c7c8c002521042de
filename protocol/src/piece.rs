//! 棋子代码与玩家颜色
//!
//! 线路协议用单个字母表示棋子：大写为白方（PRNBQK），小写为黑方（prnbqk），
//! `.` 表示空格。

/// 空格代码
pub const EMPTY_SQUARE: char = '.';

/// 将棋子字母映射为 Unicode 棋子符号
///
/// 对 12 种棋子代码全部有定义，其它字符（含 `.`）返回 None。
pub fn unicode_glyph(code: char) -> Option<char> {
    let glyph = match code {
        'P' => '♙',
        'R' => '♖',
        'N' => '♘',
        'B' => '♗',
        'Q' => '♕',
        'K' => '♔',
        'p' => '♟',
        'r' => '♜',
        'n' => '♞',
        'b' => '♝',
        'q' => '♛',
        'k' => '♚',
        _ => return None,
    };
    Some(glyph)
}

/// 本方执棋颜色
///
/// 在收到 START 事件之前为 Unknown。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerColor {
    /// 白方
    White,
    /// 黑方
    Black,
    /// 尚未分配
    #[default]
    Unknown,
}

impl PlayerColor {
    /// 解析 START 事件中的颜色字段（不区分大小写）
    pub fn parse(text: &str) -> Self {
        match text.to_ascii_uppercase().as_str() {
            "WHITE" => PlayerColor::White,
            "BLACK" => PlayerColor::Black,
            _ => PlayerColor::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_total_over_piece_codes() {
        // 12 种棋子代码都有符号，且互不与空格渲染混淆
        for code in "PRNBQKprnbqk".chars() {
            let glyph = unicode_glyph(code).unwrap();
            assert_ne!(glyph, ' ');
            assert_ne!(glyph, EMPTY_SQUARE);
        }
    }

    #[test]
    fn test_glyph_unknown_codes() {
        assert_eq!(unicode_glyph('.'), None);
        assert_eq!(unicode_glyph('x'), None);
        assert_eq!(unicode_glyph(' '), None);
    }

    #[test]
    fn test_player_color_parse() {
        assert_eq!(PlayerColor::parse("WHITE"), PlayerColor::White);
        assert_eq!(PlayerColor::parse("black"), PlayerColor::Black);
        assert_eq!(PlayerColor::parse("purple"), PlayerColor::Unknown);
        assert_eq!(PlayerColor::parse(""), PlayerColor::Unknown);
    }
}
