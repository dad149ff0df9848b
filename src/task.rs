//! 周期任务
//!
//! 用标准线程模拟内核任务: 每个任务一个线程，执行一次任务函数后睡眠一个周期，
//! 睡眠期间让出CPU

use std::{
    io,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use log::debug;

/// 任务参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskConfig {
    /// 任务名称
    pub name: &'static str,
    /// 任务栈大小(字节)
    pub stack_size: usize,
    /// 任务优先级，仅做记录，标准线程无法设置
    pub priority: u8,
    /// 执行周期
    pub period: Duration,
}

/// 正在运行的周期任务
pub struct PeriodicTask {
    name: &'static str,
    running: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl PeriodicTask {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 通知任务退出并等待线程结束，最多等待一个周期
    pub fn stop(self) -> thread::Result<()> {
        self.running.store(false, Ordering::Release);
        self.handle.join()
    }
}

/// 创建周期任务
pub fn spawn_periodic<F>(config: TaskConfig, mut entry: F) -> io::Result<PeriodicTask>
where
    F: FnMut() + Send + 'static,
{
    let running = Arc::new(AtomicBool::new(true));
    let flag = running.clone();

    let handle = thread::Builder::new()
        .name(config.name.to_string())
        .stack_size(config.stack_size)
        .spawn(move || {
            debug!(
                "任务 {} 启动, 优先级: {}, 周期: {:?}",
                config.name, config.priority, config.period
            );
            while flag.load(Ordering::Acquire) {
                entry();
                thread::sleep(config.period);
            }
            debug!("任务 {} 退出", config.name);
        })?;

    // OK
    Ok(PeriodicTask {
        name: config.name,
        running,
        handle,
    })
}

/// 当前任务睡眠指定的毫秒数
pub fn sleep_ms(ms: u64) {
    thread::sleep(Duration::from_millis(ms));
}
