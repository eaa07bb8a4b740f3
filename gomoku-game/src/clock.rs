//! 对局计时
//!
//! 只用于界面显示，不参与任何规则判断。

use std::time::{Duration, Instant};

/// 对局用时时钟
#[derive(Debug)]
pub struct SessionClock {
    /// 暂停前累计的用时（毫秒）
    accumulated_ms: u64,
    /// 当前计时段开始时间
    segment_start: Option<Instant>,
    /// 是否已停止（对局结束）
    stopped: bool,
}

impl SessionClock {
    /// 创建并立即开始计时
    pub fn start() -> Self {
        Self {
            accumulated_ms: 0,
            segment_start: Some(Instant::now()),
            stopped: false,
        }
    }

    /// 已用时间（毫秒）
    pub fn elapsed_ms(&self) -> u64 {
        let running = self
            .segment_start
            .map(|start| start.elapsed().as_millis() as u64)
            .unwrap_or(0);
        self.accumulated_ms + running
    }

    /// 已用时间
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms())
    }

    /// 暂停计时
    pub fn pause(&mut self) {
        if let Some(start) = self.segment_start.take() {
            self.accumulated_ms += start.elapsed().as_millis() as u64;
        }
    }

    /// 恢复计时（已停止的时钟不会恢复）
    pub fn resume(&mut self) {
        if !self.stopped && self.segment_start.is_none() {
            self.segment_start = Some(Instant::now());
        }
    }

    /// 停止计时
    pub fn stop(&mut self) {
        self.pause();
        self.stopped = true;
    }

    /// 是否正在计时
    pub fn is_running(&self) -> bool {
        self.segment_start.is_some()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// 格式化为 mm:ss
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_ms())
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::start()
    }
}

/// 将毫秒格式化为 mm:ss（超过 99 分钟时分钟位自然变宽）
pub fn format_elapsed(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
