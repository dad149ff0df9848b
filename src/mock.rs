//! 测试用的HAL替身: 按脚本应答的I2C总线、记录电平的GPIO、记录时长的延时和可控时钟
//!
//! 总线和延时共用同一份`Journal`，用来断言读写与等待之间的先后顺序

use std::{
    cell::{Cell, RefCell},
    collections::{HashSet, VecDeque},
    rc::Rc,
    time::Duration,
};

use embedded_hal::{
    delay::DelayNs,
    digital::{self, OutputPin, PinState},
    i2c::{self, ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation},
};
use embedded_timers::clock::Clock;

/// 总线或延时上发生的一次事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Write(u8, Vec<u8>),
    Read(u8, usize),
    DelayMs(u32),
}

/// 共享事件日志
#[derive(Debug, Default, Clone)]
pub struct Journal(Rc<RefCell<Vec<Event>>>);

impl Journal {
    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn writes(&self) -> Vec<(u8, Vec<u8>)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Write(addr, bytes) => Some((*addr, bytes.clone())),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    fn len(&self) -> usize {
        self.0.borrow().len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

impl i2c::Error for BusFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
    }
}

/// 按脚本应答的I2C总线
pub struct FakeBus {
    journal: Journal,
    replies: VecDeque<Vec<u8>>,
    failing: HashSet<usize>,
}

impl FakeBus {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            replies: VecDeque::new(),
            failing: HashSet::new(),
        }
    }

    /// 追加一次读操作的应答数据
    pub fn reply(mut self, data: &[u8]) -> Self {
        self.replies.push_back(data.to_vec());
        self
    }

    /// 让日志中第`index`个事件(从0开始)对应的传输失败
    pub fn fail_at(mut self, index: usize) -> Self {
        self.failing.insert(index);
        self
    }
}

impl ErrorType for FakeBus {
    type Error = BusFault;
}

impl I2c for FakeBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations {
            let index = self.journal.len();
            let fails = self.failing.contains(&index);
            match operation {
                Operation::Write(bytes) => {
                    self.journal.push(Event::Write(address, bytes.to_vec()));
                }
                Operation::Read(buffer) => {
                    self.journal.push(Event::Read(address, buffer.len()));
                    if !fails {
                        let reply = self.replies.pop_front().unwrap_or_default();
                        for (dst, src) in buffer.iter_mut().zip(reply) {
                            *dst = src;
                        }
                    }
                }
            }
            if fails {
                return Err(BusFault);
            }
        }
        Ok(())
    }
}

/// 记录等待时长的延时
pub struct FakeDelay {
    journal: Journal,
}

impl FakeDelay {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.journal.push(Event::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.journal.push(Event::DelayMs(ms));
    }
}

/// 可以手动设置流逝时间的时钟
#[derive(Debug, Default)]
pub struct FakeClock {
    elapsed: Cell<Duration>,
}

impl FakeClock {
    pub fn set_elapsed(&self, elapsed: Duration) {
        self.elapsed.set(elapsed);
    }
}

impl Clock for FakeClock {
    type Instant = std::time::Instant;

    fn now(&self) -> Self::Instant {
        std::time::Instant::now()
    }

    fn elapsed(&self, _instant: Self::Instant) -> Duration {
        self.elapsed.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

/// 记录每次输出电平的GPIO
#[derive(Debug, Default, Clone)]
pub struct FakePin {
    levels: Rc<RefCell<Vec<PinState>>>,
    broken: bool,
}

impl FakePin {
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn levels(&self) -> Vec<PinState> {
        self.levels.borrow().clone()
    }

    pub fn last(&self) -> Option<PinState> {
        self.levels.borrow().last().copied()
    }
}

impl digital::ErrorType for FakePin {
    type Error = PinFault;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_state(PinState::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_state(PinState::High)
    }

    fn set_state(&mut self, state: PinState) -> Result<(), Self::Error> {
        if self.broken {
            return Err(PinFault);
        }
        self.levels.borrow_mut().push(state);
        Ok(())
    }
}
