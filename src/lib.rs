//! E53扩展板传感器采集库
//!
//! - 智慧农业板(E53_IA): BH1750光照传感器、SHT30温湿度传感器、紫光灯、电机
//! - 智慧井盖板(E53_SC): MPU6050加速度传感器、两个LED灯
//!
//! 所有驱动都基于embedded-hal 1.0的I2C/GPIO/延时接口实现，
//! I2C总线句柄由调用方持有，每次操作以`&mut`借用的方式传入，
//! 同一条总线上的多个传感器由调用方保证串行访问。

pub mod board;
pub mod clock;
pub mod convert;
pub mod crc;
pub mod e53;
pub mod error;
pub mod sensor;
pub mod task;

#[cfg(test)]
pub(crate) mod mock;

pub use error::Error;
