//! 客户端出站命令编码
//!
//! 线路协议为每行一条 ASCII 命令，见服务端协议文档。

/// 客户端发送给服务端的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// 注册玩家昵称
    Name(String),
    /// 进入快速匹配队列
    Find,
    /// 创建私人房间（可指定自定义房间号）
    Create(Option<String>),
    /// 加入私人房间
    Join(String),
    /// 人机对战
    Computer,
    /// 提交坐标记号走法
    Move(String),
    /// 认输
    Forfeit,
    /// 结束会话
    Quit,
}

impl ClientCommand {
    /// 编码为一行线路文本（不含换行符）
    pub fn to_line(&self) -> String {
        match self {
            ClientCommand::Name(name) => format!("NAME {}", name),
            ClientCommand::Find => "FIND".to_string(),
            ClientCommand::Create(None) => "CREATE".to_string(),
            ClientCommand::Create(Some(key)) => format!("CREATE {}", key),
            ClientCommand::Join(key) => format!("JOIN {}", key),
            ClientCommand::Computer => "COMPUTER".to_string(),
            ClientCommand::Move(coord) => format!("MOVE {}", coord),
            ClientCommand::Forfeit => "FF".to_string(),
            ClientCommand::Quit => "QUIT".to_string(),
        }
    }
}
