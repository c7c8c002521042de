//! 行文本传输层
//!
//! 协议为换行分隔的 UTF-8 文本，一行一条消息。读写端分离，
//! 读端由读取任务独占，写端由交互循环独占。

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::constants::{CONNECT_TIMEOUT, MAX_LINE_LEN};
use crate::error::{ProtocolError, Result};

/// 连接到服务端并拆分为行读取器和行写入器
pub async fn connect(
    host: &str,
    port: u16,
) -> Result<(LineReader<OwnedReadHalf>, LineWriter<OwnedWriteHalf>)> {
    let addr = format!("{}:{}", host, port);
    let stream = timeout(CONNECT_TIMEOUT, TcpStream::connect(&addr))
        .await
        .map_err(|_| ProtocolError::ConnectionTimeout)?
        .map_err(ProtocolError::Io)?;

    stream.set_nodelay(true)?;
    tracing::info!("connected to {}", addr);

    let (read_half, write_half) = stream.into_split();
    Ok((LineReader::new(read_half), LineWriter::new(write_half)))
}

/// 行读取器
pub struct LineReader<R> {
    reader: BufReader<R>,
    buf: String,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    /// 创建新的行读取器
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
            buf: String::new(),
        }
    }

    /// 读取下一行（去掉行尾的 \r\n）
    ///
    /// 流结束时返回 Ok(None)。读取上限为 MAX_LINE_LEN，没有换行符的
    /// 畸形流不会无限占用内存。
    pub async fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        let mut limited = (&mut self.reader).take(MAX_LINE_LEN as u64 + 1);
        let n = limited.read_line(&mut self.buf).await?;
        if n == 0 {
            return Ok(None);
        }
        if n > MAX_LINE_LEN {
            return Err(ProtocolError::LineTooLong {
                len: n,
                max: MAX_LINE_LEN,
            });
        }
        Ok(Some(self.buf.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// 行写入器
pub struct LineWriter<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin> LineWriter<W> {
    /// 创建新的行写入器
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// 写入一行并立即刷新
    ///
    /// 对端已关闭时返回 ConnectionClosed。
    pub async fn send_line(&mut self, line: &str) -> Result<()> {
        self.writer
            .write_all(line.as_bytes())
            .await
            .map_err(map_send_error)?;
        self.writer.write_all(b"\n").await.map_err(map_send_error)?;
        self.writer.flush().await.map_err(map_send_error)?;
        Ok(())
    }

    /// 关闭写端（通知对端不再有数据）
    pub async fn shutdown(&mut self) -> Result<()> {
        self.writer.shutdown().await?;
        Ok(())
    }
}

/// 把对端断开类的 IO 错误归一为 ConnectionClosed
fn map_send_error(e: std::io::Error) -> ProtocolError {
    use std::io::ErrorKind;
    match e.kind() {
        ErrorKind::BrokenPipe | ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted => {
            ProtocolError::ConnectionClosed
        }
        _ => ProtocolError::Io(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_line_round_trip() {
        let (client, server) = tokio::io::duplex(256);
        let mut writer = LineWriter::new(client);
        let mut reader = LineReader::new(server);

        writer.send_line("NAME Alice").await.unwrap();
        writer.send_line("FIND").await.unwrap();
        drop(writer);

        assert_eq!(reader.next_line().await.unwrap().as_deref(), Some("NAME Alice"));
        assert_eq!(reader.next_line().await.unwrap().as_deref(), Some("FIND"));
        // 写端关闭后读到流结束
        assert_eq!(reader.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_crlf_trimmed() {
        let (mut client, server) = tokio::io::duplex(64);
        client.write_all(b"YOURMOVE\r\n").await.unwrap();
        drop(client);

        let mut reader = LineReader::new(server);
        assert_eq!(reader.next_line().await.unwrap().as_deref(), Some("YOURMOVE"));
    }

    #[tokio::test]
    async fn test_line_too_long() {
        let (mut client, server) = tokio::io::duplex(4096);
        let long = "x".repeat(MAX_LINE_LEN + 1);
        client.write_all(long.as_bytes()).await.unwrap();
        client.write_all(b"\n").await.unwrap();
        drop(client);

        let mut reader = LineReader::new(server);
        match reader.next_line().await {
            Err(ProtocolError::LineTooLong { max, .. }) => assert_eq!(max, MAX_LINE_LEN),
            other => panic!("Unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_newline_free_stream_bounded() {
        // 流一直不给换行符：读到上限立即报错，不等待后续数据
        let (mut client, server) = tokio::io::duplex(8192);
        let junk = "y".repeat(MAX_LINE_LEN * 2);
        client.write_all(junk.as_bytes()).await.unwrap();
        // 写端保持打开

        let mut reader = LineReader::new(server);
        match reader.next_line().await {
            Err(ProtocolError::LineTooLong { max, .. }) => assert_eq!(max, MAX_LINE_LEN),
            other => panic!("Unexpected result: {:?}", other.map(|_| ())),
        }
        drop(client);
    }

    #[tokio::test]
    async fn test_send_to_closed_peer() {
        let (client, server) = tokio::io::duplex(64);
        drop(server);

        let mut writer = LineWriter::new(client);
        match writer.send_line("MOVE e2e4").await {
            Err(ProtocolError::ConnectionClosed) => {}
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_tcp_connect() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let client_handle = tokio::spawn(async move {
            let (mut reader, mut writer) = connect("127.0.0.1", addr.port()).await.unwrap();
            writer.send_line("NAME test").await.unwrap();
            assert_eq!(
                reader.next_line().await.unwrap().as_deref(),
                Some("QUEUE waiting")
            );
        });

        let (stream, _) = listener.accept().await.unwrap();
        let (read_half, write_half) = stream.into_split();
        let mut reader = LineReader::new(read_half);
        let mut writer = LineWriter::new(write_half);

        assert_eq!(reader.next_line().await.unwrap().as_deref(), Some("NAME test"));
        writer.send_line("QUEUE waiting").await.unwrap();

        client_handle.await.unwrap();
    }
}
