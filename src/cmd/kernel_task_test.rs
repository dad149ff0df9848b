use std::time::Duration;

use e53_sensor::task::{self, TaskConfig};

/// 任务的堆栈大小
const TASK_STACK_SIZE: usize = 2048 * 32;
/// 任务的优先级
const TASK_ONE_PRIO: u8 = 24;
const TASK_TWO_PRIO: u8 = 24;

/// 周期任务例程: 两个任务以不同周期交替打印
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let task_one = task::spawn_periodic(
        TaskConfig {
            name: "Task_One",
            stack_size: TASK_STACK_SIZE,
            priority: TASK_ONE_PRIO,
            period: Duration::from_millis(1000),
        },
        || println!("This is task_one"),
    )
    .map_err(|err| anyhow::anyhow!("创建Task_One失败: {}", err))?;

    let task_two = task::spawn_periodic(
        TaskConfig {
            name: "Task_Two",
            stack_size: TASK_STACK_SIZE,
            priority: TASK_TWO_PRIO,
            period: Duration::from_millis(2000),
        },
        || println!("This is task_two"),
    )
    .map_err(|err| anyhow::anyhow!("创建Task_Two失败: {}", err))?;

    println!("已创建任务: {}, {}", task_one.name(), task_two.name());

    // 防止程序退出
    loop {
        task::sleep_ms(1000);
    }
}
