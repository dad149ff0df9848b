pub mod actuator;
pub mod bh1750;
pub mod mpu6050;
pub mod sht30;
