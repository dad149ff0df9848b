//! 智慧农业扩展板(E53_IA): BH1750光照、SHT30温湿度、紫光灯、电机

use embedded_hal::{delay::DelayNs, digital::OutputPin, i2c::I2c};
use embedded_timers::clock::Clock;
use log::{info, warn};

use crate::{
    board::IntelligentAgricultureConfig,
    error::Error,
    sensor::{
        actuator::{Actuators, Device, Switch},
        bh1750::BH1750,
        sht30::{Measurement, SHT30},
    },
};

/// 扩展板采集到的环境数据
///
/// 由调用方持有，每次读取只覆盖校验通过的字段，校验失败的字段保留上一次的值
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnvironmentData {
    /// 光照强度(lux)
    pub luminance: f32,
    /// 温度(℃)
    pub temperature: f32,
    /// 相对湿度(%RH)
    pub humidity: f32,
}

impl EnvironmentData {
    /// 用SHT30的读取结果更新温湿度
    pub fn apply(&mut self, measurement: &Measurement) {
        if let Some(temperature) = measurement.temperature {
            self.temperature = temperature;
        }
        if let Some(humidity) = measurement.humidity {
            self.humidity = humidity;
        }
    }
}

/// 智慧农业扩展板封装对象
pub struct IntelligentAgriculture<'a, C: Clock, P> {
    bh1750: BH1750<'a, C>,
    sht30: SHT30,
    actuators: Actuators<P>,
}

impl<'a, C: Clock, P: OutputPin> IntelligentAgriculture<'a, C, P> {
    /// 创建扩展板实例，紫光灯和电机针脚需已设置为输出模式
    pub fn new(config: &IntelligentAgricultureConfig, clock: &'a C, lamp: P, motor: P) -> Self {
        Self {
            bh1750: BH1750::new(clock, config.bh1750_addr),
            sht30: SHT30::new(config.sht30_addr),
            actuators: Actuators::new()
                .with(Device::Lamp, lamp)
                .with(Device::Motor, motor),
        }
    }

    /// 初始化BH1750和SHT30
    ///
    /// 某个传感器初始化失败不影响另一个，全部执行后返回第一个错误
    pub fn init<I2C: I2c>(&mut self, i2c: &mut I2C) -> Result<(), Error<I2C::Error>> {
        let bh1750 = self.bh1750.init(i2c);
        let sht30 = self.sht30.init(i2c);
        info!("智慧农业扩展板初始化完成");
        bh1750.and(sht30)
    }

    /// 测量光照强度、温度、湿度
    ///
    /// - 光照: 启动测量 -> 等待180ms -> 读取
    /// - 温湿度: CRC校验失败的字段保留`data`中原来的值
    ///
    /// 两个传感器都会读取，某一个读取失败时只保留它对应字段原来的值，
    /// 最后返回第一个错误
    pub fn read_data<I2C: I2c, D: DelayNs>(
        &mut self,
        i2c: &mut I2C,
        delay: &mut D,
        data: &mut EnvironmentData,
    ) -> Result<(), Error<I2C::Error>> {
        let luminance = self.bh1750.measure(i2c, delay).map(|lux| {
            data.luminance = lux;
        });

        let humidity = self.sht30.read(i2c).map(|measurement| {
            if measurement.temperature.is_none() || measurement.humidity.is_none() {
                warn!("SHT30数据校验失败，保留上一次的值: {:?}", measurement);
            }
            data.apply(&measurement);
        });

        luminance.and(humidity)
    }

    /// 紫光灯控制
    pub fn light_set(&mut self, state: Switch) -> Result<(), Error<P::Error>> {
        self.actuators.set(Device::Lamp, state)
    }

    /// 电机控制
    pub fn motor_set_status(&mut self, state: Switch) -> Result<(), Error<P::Error>> {
        self.actuators.set(Device::Motor, state)
    }
}
