//! MPU6050 三轴加速度传感器
//!
//! 只使用加速度计和运动检测中断，陀螺仪保持上电默认配置。
//! 上电初始化是一张按顺序执行的寄存器表`INIT_SEQUENCE`，
//! 其中INT_PIN_CFG和INT_ENABLE各写两次(先关闭/逻辑电平模式，最后再配置锁存低电平并使能运动中断)，
//! 顺序不能调整，也不能合并。

pub mod registers;

use embedded_hal::{delay::DelayNs, i2c::I2c};
use log::{debug, warn};

use crate::error::Error;

/// 上电后到复位前的稳定等待时间
pub const POWER_ON_SETTLE_MS: u32 = 100;
/// 复位后等待设备重启完毕的时间
pub const RESET_SETTLE_MS: u32 = 20;

/// 寄存器初始化表中的一步
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// 向寄存器写入一个字节
    Write { reg: u8, value: u8 },
    /// 睡眠等待
    DelayMs(u32),
}

/// 上电初始化序列
pub const INIT_SEQUENCE: &[Step] = &[
    Step::DelayMs(POWER_ON_SETTLE_MS),
    // 复位
    Step::Write {
        reg: registers::PWR_MGMT_1,
        value: 0x80,
    },
    Step::DelayMs(RESET_SETTLE_MS),
    // 唤醒
    Step::Write {
        reg: registers::PWR_MGMT_1,
        value: 0x00,
    },
    // 关闭所有中断
    Step::Write {
        reg: registers::INT_ENABLE,
        value: 0x00,
    },
    // 关闭I2C主模式
    Step::Write {
        reg: registers::USER_CTRL,
        value: 0x00,
    },
    // 关闭FIFO
    Step::Write {
        reg: registers::FIFO_EN,
        value: 0x00,
    },
    // 中断的逻辑电平模式
    Step::Write {
        reg: registers::INT_PIN_CFG,
        value: 0x80,
    },
    // 运动中断: 阈值
    Step::Write {
        reg: registers::MOT_THR,
        value: 0x03,
    },
    // 运动中断: 检测时间20ms
    Step::Write {
        reg: registers::MOT_DUR,
        value: 0x14,
    },
    // 外部引脚采样和DLPF数字低通滤波器
    Step::Write {
        reg: registers::CONFIG,
        value: 0x04,
    },
    // 加速度量程和高通滤波器
    Step::Write {
        reg: registers::ACCEL_CONFIG,
        value: 0x1C,
    },
    // INT引脚低电平锁存
    Step::Write {
        reg: registers::INT_PIN_CFG,
        value: 0x1C,
    },
    // 使能运动中断
    Step::Write {
        reg: registers::INT_ENABLE,
        value: 0x40,
    },
];

/// 按顺序执行寄存器表
///
/// 某一步写入失败时记录日志并继续执行后面的步骤，全部执行完后返回第一个错误
pub fn apply<I2C: I2c, D: DelayNs>(
    i2c: &mut I2C,
    delay: &mut D,
    i2c_addr: u8,
    steps: &[Step],
) -> Result<(), Error<I2C::Error>> {
    let mut first_err = None;

    for step in steps {
        match *step {
            Step::Write { reg, value } => {
                if let Err(err) = i2c.write(i2c_addr, &[reg, value]) {
                    let err = Error::Bus(err);
                    warn!("写寄存器 {:#04x} = {:#04x} 失败: {}", reg, value, err);
                    first_err.get_or_insert(err);
                }
            }
            Step::DelayMs(ms) => delay.delay_ms(ms),
        }
    }

    match first_err {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// 把6字节加速度数据拼成X/Y/Z三轴有符号数值(高位在前)
pub fn parse_acceleration(data: [u8; 6]) -> [i16; 3] {
    let [x_h, x_l, y_h, y_l, z_h, z_l] = data;
    [
        i16::from_be_bytes([x_h, x_l]),
        i16::from_be_bytes([y_h, y_l]),
        i16::from_be_bytes([z_h, z_l]),
    ]
}

/// MPU6050加速度传感器封装对象
#[derive(Debug)]
pub struct MPU6050 {
    /// I2C从设备地址
    /// - MPU6050的地址通常为: 0x68
    i2c_addr: u8,
}

/// 实现MPU6050传感器操作
impl MPU6050 {
    /// 创建MPU6050传感器实例
    pub fn new(i2c_addr: u8) -> Self {
        Self { i2c_addr }
    }

    /// 执行上电初始化序列
    pub fn init<I2C: I2c, D: DelayNs>(
        &mut self,
        i2c: &mut I2C,
        delay: &mut D,
    ) -> Result<(), Error<I2C::Error>> {
        apply(i2c, delay, self.i2c_addr, INIT_SEQUENCE)
    }

    /// 从指定寄存器开始连续读取
    fn read_registers<I2C: I2c>(
        &mut self,
        i2c: &mut I2C,
        reg: u8,
        buf: &mut [u8],
    ) -> Result<(), Error<I2C::Error>> {
        i2c.write(self.i2c_addr, &[reg]).map_err(Error::Bus)?;
        i2c.read(self.i2c_addr, buf).map_err(Error::Bus)
    }

    /// 读取WHO_AM_I寄存器
    pub fn who_am_i<I2C: I2c>(&mut self, i2c: &mut I2C) -> Result<u8, Error<I2C::Error>> {
        let mut id = [0u8; 1];
        self.read_registers(i2c, registers::WHO_AM_I, &mut id)?;
        Ok(id[0])
    }

    /// 设备身份校验: WHO_AM_I应当等于设备自身的7位从设备地址
    ///
    /// 不一致时返回`IdentityMismatch`，携带读取到的数值
    pub fn check_identity<I2C: I2c>(&mut self, i2c: &mut I2C) -> Result<(), Error<I2C::Error>> {
        let found = self.who_am_i(i2c)?;
        if found != registers::SLAVE_ADDRESS {
            warn!("MPU6050身份校验失败, WHO_AM_I: {:#04x}", found);
            return Err(Error::IdentityMismatch {
                expected: registers::SLAVE_ADDRESS,
                found,
            });
        }
        Ok(())
    }

    /// 设备身份校验，身份不符时返回`false`
    pub fn identify<I2C: I2c>(&mut self, i2c: &mut I2C) -> Result<bool, Error<I2C::Error>> {
        match self.check_identity(i2c) {
            Ok(()) => Ok(true),
            Err(Error::IdentityMismatch { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// 读取三轴加速度原始值 [X, Y, Z]
    pub fn read_acceleration<I2C: I2c>(
        &mut self,
        i2c: &mut I2C,
    ) -> Result<[i16; 3], Error<I2C::Error>> {
        let mut data = [0u8; 6];
        self.read_registers(i2c, registers::ACCEL_XOUT_H, &mut data)?;
        debug!("MPU6050加速度原始数据: {:02x?}", data);

        // OK
        Ok(parse_acceleration(data))
    }
}
