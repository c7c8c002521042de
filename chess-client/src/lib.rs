//! 国际象棋终端客户端
//!
//! 通过行文本协议连接对战服务器：注册昵称、发起匹配（快速匹配 /
//! 私人房间 / 人机），渲染服务端推送的棋盘帧，并把用户输入翻译为
//! 协议命令。规则校验和对局状态全部由服务端负责。

pub mod input;
pub mod menu;
pub mod reader;
pub mod render;
pub mod session;
pub mod settings;
pub mod shutdown;
