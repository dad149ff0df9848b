use std::time::Duration;

use embedded_hal::{delay::DelayNs, i2c::I2c};
use embedded_timers::clock::Clock;
use log::warn;

use crate::{convert, error::Error};

/// BH1750默认从设备地址(ADDR引脚接地)
pub const DEFAULT_ADDR: u8 = 0x23;

/// 单次高分辨率模式的转换时间，器件硬性要求，不可调整
pub const CONVERSION_TIME: Duration = Duration::from_millis(180);

/// 上电命令
const CMD_POWER_ON: u8 = 0x01;
/// 启动单次高分辨率测量命令
const CMD_ONE_TIME_H_RESOLUTION: u8 = 0x10;

/// BH1750光照强度传感器封装对象
///
/// 该传感器没有CRC校验，读到的两字节直接换算
pub struct BH1750<'a, C: Clock> {
    /// 用于记录启动测量的时刻
    clock: &'a C,
    /// I2C从设备地址
    /// - BH1750的地址通常为: 0x23
    i2c_addr: u8,
    /// 最近一次启动测量的时刻，读取后清空
    started_at: Option<C::Instant>,
}

/// 实现BH1750传感器操作
impl<'a, C: Clock> BH1750<'a, C> {
    /// 创建BH1750传感器实例
    pub fn new(clock: &'a C, i2c_addr: u8) -> Self {
        Self {
            clock,
            i2c_addr,
            started_at: None,
        }
    }

    /// 上电初始化
    pub fn init<I2C: I2c>(&mut self, i2c: &mut I2C) -> Result<(), Error<I2C::Error>> {
        i2c.write(self.i2c_addr, &[CMD_POWER_ON])
            .map_err(Error::Bus)
            .inspect_err(|err| warn!("BH1750上电失败: {}", err))
    }

    /// 启动一次单次高分辨率测量
    pub fn start_measurement<I2C: I2c>(&mut self, i2c: &mut I2C) -> Result<(), Error<I2C::Error>> {
        i2c.write(self.i2c_addr, &[CMD_ONE_TIME_H_RESOLUTION])
            .map_err(Error::Bus)?;
        self.started_at = Some(self.clock.now());
        Ok(())
    }

    /// 读取光照强度(lux)
    ///
    /// 必须先调用`start_measurement`，距离启动测量不足180ms时会让出CPU睡眠剩余的时间
    pub fn read<I2C: I2c, D: DelayNs>(
        &mut self,
        i2c: &mut I2C,
        delay: &mut D,
    ) -> Result<f32, Error<I2C::Error>> {
        let started_at = self.started_at.take().ok_or(Error::MeasurementNotStarted)?;

        // 等待测量完成
        let elapsed = self.clock.elapsed(started_at);
        if let Some(remaining) = CONVERSION_TIME.checked_sub(elapsed) {
            let remaining_ms = remaining.as_micros().div_ceil(1000) as u32;
            if remaining_ms > 0 {
                delay.delay_ms(remaining_ms);
            }
        }

        // 读取2字节数据: 高位 + 低位
        let mut data = [0u8; 2];
        i2c.read(self.i2c_addr, &mut data).map_err(Error::Bus)?;

        // OK
        Ok(convert::luminance_lux(data))
    }

    /// 启动测量并等待结果
    pub fn measure<I2C: I2c, D: DelayNs>(
        &mut self,
        i2c: &mut I2C,
        delay: &mut D,
    ) -> Result<f32, Error<I2C::Error>> {
        self.start_measurement(i2c)?;
        self.read(i2c, delay)
    }
}
