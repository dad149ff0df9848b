//! 扩展板的总线、从设备地址以及GPIO针脚分配
//!
//! 每块扩展板一份不可变配置，在构造驱动时传入，多种板型可以同时存在

use crate::sensor::{bh1750, mpu6050, sht30};

/// I2C总线配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    /// I2C总线编号，树莓派上通常为1(/dev/i2c-1)
    pub bus: u8,
    /// 通信速率(Hz)
    pub rate_hz: u32,
}

/// 智慧农业扩展板(E53_IA)配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntelligentAgricultureConfig {
    pub i2c: BusConfig,
    /// BH1750光照传感器从设备地址
    pub bh1750_addr: u8,
    /// SHT30温湿度传感器从设备地址
    pub sht30_addr: u8,
    /// 紫光灯GPIO针脚(高电平点亮)
    pub lamp_pin: u8,
    /// 电机GPIO针脚(高电平转动)
    pub motor_pin: u8,
}

impl IntelligentAgricultureConfig {
    pub const DEFAULT: Self = Self {
        i2c: BusConfig {
            bus: 1,
            rate_hz: 100_000,
        },
        bh1750_addr: bh1750::DEFAULT_ADDR,
        sht30_addr: sht30::DEFAULT_ADDR,
        lamp_pin: 17,
        motor_pin: 27,
    };
}

impl Default for IntelligentAgricultureConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// 智慧井盖扩展板(E53_SC)配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmartCoversConfig {
    pub i2c: BusConfig,
    /// MPU6050从设备地址
    pub mpu6050_addr: u8,
    /// LED1 GPIO针脚(低电平点亮)
    pub led1_pin: u8,
    /// LED2 GPIO针脚(低电平点亮)
    pub led2_pin: u8,
}

impl SmartCoversConfig {
    pub const DEFAULT: Self = Self {
        i2c: BusConfig {
            bus: 1,
            rate_hz: 400_000,
        },
        mpu6050_addr: mpu6050::registers::SLAVE_ADDRESS,
        led1_pin: 5,
        led2_pin: 6,
    };
}

impl Default for SmartCoversConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
