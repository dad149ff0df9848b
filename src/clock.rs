//! BH1750转换窗口计时
//!
//! BH1750启动单次测量后要经过180ms转换才能读数。驱动在`start_measurement`时记下时刻，
//! `read`时只睡眠窗口里还没走完的部分，两次调用之间流逝的时间从等待中扣除

use std::time::{Duration, Instant};

use embedded_timers::clock::Clock;

/// 进程内单调时钟，实际运行时交给BH1750使用
#[derive(Debug, Default, Clone, Copy)]
pub struct StdClock;

impl StdClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed(&self, started_at: Instant) -> Duration {
        started_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mock::{Event, FakeBus, FakeDelay, Journal},
        sensor::bh1750::{BH1750, CONVERSION_TIME, DEFAULT_ADDR},
    };

    #[test]
    fn light_sensor_sleeps_at_most_the_conversion_window() {
        let clock = StdClock::new();
        let journal = Journal::default();
        let mut bus = FakeBus::new(&journal).reply(&[0x01, 0x90]);
        let mut delay = FakeDelay::new(&journal);
        let mut bh1750 = BH1750::new(&clock, DEFAULT_ADDR);

        bh1750.start_measurement(&mut bus).unwrap();
        bh1750.read(&mut bus, &mut delay).unwrap();

        let slept: Vec<u32> = journal
            .events()
            .into_iter()
            .filter_map(|event| match event {
                Event::DelayMs(ms) => Some(ms),
                _ => None,
            })
            .collect();
        let window = CONVERSION_TIME.as_millis() as u32;
        assert!(slept.iter().all(|ms| *ms > 0 && *ms <= window), "{:?}", slept);
    }

    #[test]
    fn elapsed_counts_time_since_start() {
        let clock = StdClock::new();
        let started_at = clock.now();
        std::thread::sleep(Duration::from_millis(5));

        assert!(clock.elapsed(started_at) >= Duration::from_millis(5));
    }
}
