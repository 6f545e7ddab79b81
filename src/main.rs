//! NTC thermistor fan controller for the STM32F103 ("blue pill").
//!
//! Thermistor divider on PA4 (ADC1), fan PWM on PA0 (TIM2 CH1), LED bar on
//! PB8..PB15 (active low).

#![no_main]
#![no_std]

use ntc_fan_firmware as _; // global logger + panicking behavior

#[rtic::app(device = stm32f1xx_hal::pac)]
mod app {
    use ntc_fan_firmware::{
        consts, controller::Controller, ports::ChannelId, FanBoard,
    };
    use stm32f1xx_hal::{adc::Adc, prelude::*, timer::Tim2NoRemap};

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        controller: Controller<FanBoard>,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut flash = cx.device.FLASH.constrain();
        let rcc = cx.device.RCC.constrain();

        let clocks = rcc
            .cfgr
            .use_hse(8.MHz())
            .sysclk(48.MHz())
            .pclk1(24.MHz())
            .adcclk(2.MHz())
            .freeze(&mut flash.acr);
        defmt::println!("adc freq: {}", clocks.adcclk().raw());

        let mut afio = cx.device.AFIO.constrain();
        let mut gpioa = cx.device.GPIOA.split();
        let mut gpiob = cx.device.GPIOB.split();

        let adc = Adc::adc1(cx.device.ADC1, clocks);
        let thermistor_pin = gpioa.pa4.into_analog(&mut gpioa.crl);

        let fan_pin = gpioa.pa0.into_alternate_push_pull(&mut gpioa.crl);
        let fan = cx
            .device
            .TIM2
            .pwm_hz::<Tim2NoRemap, _, _>(
                fan_pin,
                &mut afio.mapr,
                consts::PWM_FREQUENCY_KHZ.kHz(),
                &clocks,
            )
            .split();

        let leds = [
            gpiob.pb8.into_push_pull_output(&mut gpiob.crh).erase(),
            gpiob.pb9.into_push_pull_output(&mut gpiob.crh).erase(),
            gpiob.pb10.into_push_pull_output(&mut gpiob.crh).erase(),
            gpiob.pb11.into_push_pull_output(&mut gpiob.crh).erase(),
            gpiob.pb12.into_push_pull_output(&mut gpiob.crh).erase(),
            gpiob.pb13.into_push_pull_output(&mut gpiob.crh).erase(),
            gpiob.pb14.into_push_pull_output(&mut gpiob.crh).erase(),
            gpiob.pb15.into_push_pull_output(&mut gpiob.crh).erase(),
        ];

        let board = FanBoard::new(adc, thermistor_pin, fan, leds);
        let controller =
            Controller::new(board, ChannelId(consts::THERMISTOR_CHANNEL));

        defmt::info!("init done");

        (Shared {}, Local { controller }, init::Monotonics())
    }

    #[idle(local = [controller])]
    fn idle(cx: idle::Context) -> ! {
        cx.local.controller.run()
    }
}
