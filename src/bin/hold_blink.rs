//! STM32 Blue Pill Button Hold-Time Blinker
//!
//! Two tasks share one classification cell:
//! 1. The classifier samples the button and sorts each hold into a band
//!    (short < 2 s, medium 2-4 s, long >= 4 s)
//! 2. The blink driver shows the last band on the LED
//!    (short: off, medium: 400 ms blink, long: 100 ms blink)
//!
//! Hardware Connections:
//!   - Onboard LED: PC13 (lit when driven low)
//!   - Button: PB1 (connect to ground when pressed, with pull-up enabled)
//!
//! The classifier runs on an interrupt executor so it preempts the driver,
//! which runs in thread mode.
//!
//! Build with `cargo run --release --features board --target thumbv7m-none-eabi`

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::{error, info};
use embassy_executor::{Executor, InterruptExecutor, SpawnError};
use embassy_stm32::{
    gpio::{Input, Level, Output, Pull, Speed},
    interrupt,
    interrupt::{InterruptExt, Priority},
};
use embassy_time::Delay;
use hold_blink::{
    BandCell, BlinkDriver, ButtonClassifier,
    config::TaskPriority,
    hardware::{gpio_button::GpioButton, gpio_led::GpioLed},
};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

type Classifier = ButtonClassifier<'static, GpioButton<Input<'static>>, Delay>;
type Driver = BlinkDriver<'static, GpioLed<Output<'static>>, Delay>;

/// Runs `TaskPriority::CLASSIFIER` tasks from the USART3 interrupt.
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
/// Runs `TaskPriority::DRIVER` tasks in thread mode.
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();
static BAND: StaticCell<BandCell> = StaticCell::new();

/// NVIC level of the interrupt executor. Anything above thread mode works.
const HIGH_EXECUTOR_NVIC: Priority = Priority::P6;

#[derive(defmt::Format)]
enum StartupError {
    /// The executor had no free slot for the task.
    Spawn(SpawnError),
}

impl From<SpawnError> for StartupError {
    fn from(cause: SpawnError) -> Self {
        StartupError::Spawn(cause)
    }
}

#[interrupt]
unsafe fn USART3() {
    unsafe { EXECUTOR_HIGH.on_interrupt() }
}

/// Button sampling task
#[embassy_executor::task]
async fn classifier_task(classifier: Classifier, priority: TaskPriority) {
    defmt::assert_eq!(priority, TaskPriority::CLASSIFIER);
    info!("classifier started at priority {}", priority);
    classifier.run().await;
}

/// LED pattern task
#[embassy_executor::task]
async fn driver_task(driver: Driver, priority: TaskPriority) {
    defmt::assert_eq!(priority, TaskPriority::DRIVER);
    info!("blink driver started at priority {}", priority);
    driver.run().await;
}

/// Startup could not complete. Nothing useful can run, so stay here.
fn halt(task: &'static str, err: StartupError) -> ! {
    error!("starting {} failed: {}", task, err);
    loop {
        cortex_m::asm::wfi();
    }
}

#[entry]
fn main() -> ! {
    let p = embassy_stm32::init(Default::default());
    info!("hold_blink starting");

    let band: &'static BandCell = BAND.init(BandCell::new());

    // Pressed pulls PB1 to ground
    let button = GpioButton::active_low(Input::new(p.PB1, Pull::Up));
    // Start dark, PC13 LED is lit when low
    let led = GpioLed::active_low(Output::new(p.PC13, Level::High, Speed::Low));

    let classifier = ButtonClassifier::new(button, Delay, band);
    let driver = BlinkDriver::new(led, Delay, band);

    interrupt::USART3.set_priority(HIGH_EXECUTOR_NVIC);
    let high = EXECUTOR_HIGH.start(interrupt::USART3);
    if let Err(err) = high
        .spawn(classifier_task(classifier, TaskPriority::CLASSIFIER))
        .map_err(StartupError::from)
    {
        halt("classifier", err);
    }

    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        if let Err(err) = spawner
            .spawn(driver_task(driver, TaskPriority::DRIVER))
            .map_err(StartupError::from)
        {
            halt("driver", err);
        }
    })
}
