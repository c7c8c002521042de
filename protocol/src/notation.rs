//! 走法记号归一化
//!
//! 将用户输入的代数记号（Nc3、exd5、e4 等）尽力转换为服务端要求的
//! 坐标记号（e2e4）。客户端不持有棋盘状态，无法补全部分消歧义的记号
//! （如 Nbd7），这类输入返回 None，由服务端用 ERROR 拒绝兜底。

/// 是否为列字母 a-h
fn is_file(c: char) -> bool {
    ('a'..='h').contains(&c)
}

/// 是否为行数字 1-8
fn is_rank(c: char) -> bool {
    ('1'..='8').contains(&c)
}

/// 归一化一条走法输入
///
/// 返回坐标记号字符串，无法确定时返回 None。纯函数，不做规则校验。
pub fn normalize_move(input: &str) -> Option<String> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }

    // 已经是坐标记号（e2e4、e7e8=Q 等）：原样通过
    let chars: Vec<char> = text.chars().collect();
    if chars.len() >= 4 && is_file(chars[0]) && is_rank(chars[1]) && is_file(chars[2]) {
        return Some(text.to_string());
    }

    // 去掉吃子、将军/将死标记和升变后缀
    let stripped = text
        .replace('x', "")
        .replace('+', "")
        .replace('#', "")
        .replace("=Q", "")
        .replace("=R", "")
        .replace("=B", "")
        .replace("=N", "");
    let chars: Vec<char> = stripped.chars().collect();

    // 兵的目标格（e4）：按启发式补出起始行
    if chars.len() == 2 && is_file(chars[0]) && is_rank(chars[1]) {
        let file = chars[0];
        let dest_rank = chars[1];
        let start_rank = match dest_rank {
            '3' | '4' => '2',
            '5' | '6' => '7',
            _ => '2',
        };
        return Some(format!("{}{}{}{}", file, start_rank, file, dest_rank));
    }

    // 棋子走法（Nc3、Nbd7、Nb1d7）
    let first = *chars.first()?;
    if matches!(first.to_ascii_uppercase(), 'K' | 'Q' | 'R' | 'B' | 'N') {
        let rest = &chars[1..];
        if rest.len() >= 2 && is_file(rest[rest.len() - 2]) && is_rank(rest[rest.len() - 1]) {
            let dest: String = rest[rest.len() - 2..].iter().collect();
            let disambig = &rest[..rest.len() - 2];

            // 完整源格消歧义（Nb1d7）：直接拼接源格和目标格
            if disambig.len() == 2 && is_file(disambig[0]) && is_rank(disambig[1]) {
                let source: String = disambig.iter().collect();
                return Some(format!("{}{}", source, dest));
            }

            // 无消歧义或只有半个消歧义：没有棋盘状态无法确定源格
            return None;
        }
    }

    None
}

/// 是否看起来像一次走棋尝试（含任何列字母或行数字）
///
/// 用于决定无法归一化的输入是否仍转发给服务端。
pub fn looks_like_move(input: &str) -> bool {
    input
        .to_lowercase()
        .chars()
        .any(|c| is_file(c) || is_rank(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_passthrough() {
        assert_eq!(normalize_move("e2e4").as_deref(), Some("e2e4"));
        assert_eq!(normalize_move("a1h8").as_deref(), Some("a1h8"));
        assert_eq!(normalize_move("b7b8=Q").as_deref(), Some("b7b8=Q"));
    }

    #[test]
    fn test_pawn_destination_heuristic() {
        assert_eq!(normalize_move("e4").as_deref(), Some("e2e4"));
        assert_eq!(normalize_move("e3").as_deref(), Some("e2e3"));
        assert_eq!(normalize_move("e5").as_deref(), Some("e7e5"));
        assert_eq!(normalize_move("e6").as_deref(), Some("e7e6"));
        assert_eq!(normalize_move("d4").as_deref(), Some("d2d4"));
        // 1/2/7/8 行不在启发式覆盖范围内，默认起始行 2
        assert_eq!(normalize_move("e8").as_deref(), Some("e2e8"));
    }

    #[test]
    fn test_full_disambiguation() {
        assert_eq!(normalize_move("Nb1d7").as_deref(), Some("b1d7"));
        assert_eq!(normalize_move("Qd1h5").as_deref(), Some("d1h5"));
        assert_eq!(normalize_move("nb1d7").as_deref(), Some("b1d7"));
    }

    #[test]
    fn test_partial_disambiguation_unparseable() {
        // 没有棋盘状态，Nc3 / Nbc3 的源格无法确定
        assert_eq!(normalize_move("Nc3"), None);
        assert_eq!(normalize_move("Nbc3"), None);
        assert_eq!(normalize_move("N1c3"), None);
    }

    #[test]
    fn test_capture_and_check_marks_stripped() {
        // Qxe5+ 去掉标记后等价于 Qe5，仍受消歧义规则约束
        assert_eq!(normalize_move("Qxe5+"), normalize_move("Qe5"));
        assert_eq!(normalize_move("Qxe5+"), None);
        assert_eq!(normalize_move("Nb1xd7#").as_deref(), Some("b1d7"));
        // exd5 去掉 x 后是 3 个字符，既不是兵的目标格也不是棋子走法
        assert_eq!(normalize_move("exd5"), None);
    }

    #[test]
    fn test_promotion_suffix_stripped() {
        assert_eq!(normalize_move("e8=Q").as_deref(), Some("e2e8"));
    }

    #[test]
    fn test_unparseable_inputs() {
        assert_eq!(normalize_move(""), None);
        assert_eq!(normalize_move("   "), None);
        assert_eq!(normalize_move("hello world"), None);
        assert_eq!(normalize_move("O-O"), None);
        assert_eq!(normalize_move("Z9"), None);
    }

    #[test]
    fn test_looks_like_move() {
        assert!(looks_like_move("Nc3"));
        assert!(looks_like_move("e4"));
        assert!(looks_like_move("8"));
        // 按启发式，"resign" 里的 e/g 也算走棋尝试
        assert!(looks_like_move("resign"));
        assert!(!looks_like_move("wow"));
        assert!(!looks_like_move(""));
    }
}
