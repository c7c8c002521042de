//! 协同停机信号
//!
//! 读取任务在流关闭或读错误时触发；交互循环在用户退出时触发。
//! 双方都在 select 中等待该信号，触发后不再进行任何读写。

use tokio::sync::watch;

/// 停机令牌（可克隆，任意持有者都可触发）
#[derive(Clone)]
pub struct Shutdown {
    tx: watch::Sender<bool>,
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    /// 创建未触发的令牌
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx, rx }
    }

    /// 触发停机（幂等）
    pub fn trigger(&self) {
        let _ = self.tx.send(true);
    }

    /// 是否已触发
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// 等待停机信号
    pub async fn wait(&mut self) {
        // 已触发则立即返回
        if *self.rx.borrow() {
            return;
        }
        // 发送端不会先于所有克隆体消失，changed 只在触发时返回
        let _ = self.rx.changed().await;
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_wakes_waiters() {
        let shutdown = Shutdown::new();
        assert!(!shutdown.is_triggered());

        let mut waiter = shutdown.clone();
        let handle = tokio::spawn(async move {
            waiter.wait().await;
        });

        shutdown.trigger();
        handle.await.unwrap();
        assert!(shutdown.is_triggered());
    }

    #[tokio::test]
    async fn test_wait_after_trigger_returns_immediately() {
        let mut shutdown = Shutdown::new();
        shutdown.trigger();
        shutdown.wait().await;
        assert!(shutdown.is_triggered());
    }
}
