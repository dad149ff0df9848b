use embedded_hal::digital::{OutputPin, PinState};

use crate::error::Error;

/// 扩展板上的执行器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    /// 紫光灯(智慧农业板)
    Lamp,
    /// 电机(智慧农业板)
    Motor,
    /// LED1(智慧井盖板)
    Led1,
    /// LED2(智慧井盖板)
    Led2,
}

/// 开关状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    On,
    Off,
}

impl Device {
    /// 打开时的有效电平
    ///
    /// - 紫光灯、电机: 高电平打开
    /// - LED1、LED2: 低电平点亮
    pub const fn active_level(self) -> PinState {
        match self {
            Self::Lamp | Self::Motor => PinState::High,
            Self::Led1 | Self::Led2 => PinState::Low,
        }
    }

    /// 开关状态对应的输出电平
    pub const fn level(self, state: Switch) -> PinState {
        match (self.active_level(), state) {
            (level, Switch::On) => level,
            (PinState::High, Switch::Off) => PinState::Low,
            (PinState::Low, Switch::Off) => PinState::High,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Lamp => 0,
            Self::Motor => 1,
            Self::Led1 => 2,
            Self::Led2 => 3,
        }
    }
}

/// 执行器控制
///
/// 不保存开关状态，每次`set`都直接写GPIO电平，重复调用结果相同
pub struct Actuators<P> {
    pins: [Option<P>; 4],
}

impl<P: OutputPin> Actuators<P> {
    /// 创建一个没有接入任何执行器的实例
    pub fn new() -> Self {
        Self {
            pins: [None, None, None, None],
        }
    }

    /// 接入执行器(针脚需已设置为输出模式)
    pub fn with(mut self, device: Device, pin: P) -> Self {
        self.pins[device.index()] = Some(pin);
        self
    }

    /// 打开或关闭执行器
    pub fn set(&mut self, device: Device, state: Switch) -> Result<(), Error<P::Error>> {
        let pin = self.pins[device.index()]
            .as_mut()
            .ok_or(Error::NotWired(device))?;
        pin.set_state(device.level(state)).map_err(Error::Gpio)
    }
}

impl<P: OutputPin> Default for Actuators<P> {
    fn default() -> Self {
        Self::new()
    }
}
