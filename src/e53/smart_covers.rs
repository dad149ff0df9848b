//! 智慧井盖扩展板(E53_SC): MPU6050加速度、LED1、LED2

use embedded_hal::{delay::DelayNs, digital::OutputPin, i2c::I2c};
use log::info;

use crate::{
    board::SmartCoversConfig,
    error::Error,
    sensor::{
        actuator::{Actuators, Device, Switch},
        mpu6050::MPU6050,
    },
};

/// 初始化序列执行完后等待MPU6050稳定的时间
pub const INIT_SETTLE_MS: u32 = 1000;

/// 智慧井盖扩展板封装对象
pub struct SmartCovers<P> {
    mpu6050: MPU6050,
    actuators: Actuators<P>,
}

impl<P: OutputPin> SmartCovers<P> {
    /// 创建扩展板实例，LED针脚需已设置为输出模式
    pub fn new(config: &SmartCoversConfig, led1: P, led2: P) -> Self {
        Self {
            mpu6050: MPU6050::new(config.mpu6050_addr),
            actuators: Actuators::new()
                .with(Device::Led1, led1)
                .with(Device::Led2, led2),
        }
    }

    /// 初始化MPU6050并等待其稳定
    pub fn init<I2C: I2c, D: DelayNs>(
        &mut self,
        i2c: &mut I2C,
        delay: &mut D,
    ) -> Result<(), Error<I2C::Error>> {
        let result = self.mpu6050.init(i2c, delay);
        delay.delay_ms(INIT_SETTLE_MS);
        info!("智慧井盖扩展板初始化完成");
        result
    }

    /// 读取三轴加速度 [X, Y, Z]
    ///
    /// 每次读取前都先校验设备身份，校验不通过时返回`IdentityMismatch`且不读取加速度，
    /// 由调用方决定停止、重试还是上报
    pub fn read_data<I2C: I2c>(&mut self, i2c: &mut I2C) -> Result<[i16; 3], Error<I2C::Error>> {
        self.mpu6050.check_identity(i2c)?;
        self.mpu6050.read_acceleration(i2c)
    }

    /// LED1控制
    pub fn led1_set(&mut self, state: Switch) -> Result<(), Error<P::Error>> {
        self.actuators.set(Device::Led1, state)
    }

    /// LED2控制
    pub fn led2_set(&mut self, state: Switch) -> Result<(), Error<P::Error>> {
        self.actuators.set(Device::Led2, state)
    }
}
