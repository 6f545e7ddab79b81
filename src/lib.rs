#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod board;
pub mod consts;
pub mod controller;
pub mod fan;
pub mod indicator;
pub mod math;
pub mod ports;
pub mod thermistor;

#[cfg(feature = "firmware")]
mod firmware {
    use core::sync::atomic::{AtomicUsize, Ordering};

    // global logger
    use defmt_rtt as _;
    use panic_probe as _;

    // same panicking *behavior* as `panic-probe` but doesn't print a panic message
    // this prevents the panic message being printed *twice* when `defmt::panic` is
    // invoked
    #[defmt::panic_handler]
    fn panic() -> ! {
        cortex_m::asm::udf()
    }

    static COUNT: AtomicUsize = AtomicUsize::new(0);
    defmt::timestamp!("{=usize}", {
        // NOTE(no-CAS) `timestamps` runs with interrupts disabled
        let n = COUNT.load(Ordering::Relaxed);
        COUNT.store(n + 1, Ordering::Relaxed);
        n
    });
}

/// Result type used by the fan controller.
pub type Result<T> = ::core::result::Result<T, Error>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// ADC conversion failed
    AdcRead,
    /// no thermistor wired to this ADC channel
    UnknownChannel(u8),
}

#[cfg(feature = "firmware")]
pub use self::stm32::*;

#[cfg(feature = "firmware")]
mod stm32 {
    use stm32f1xx_hal::{
        adc::Adc,
        gpio::{gpioa::PA4, Analog, ErasedPin, Output, PushPull},
        pac,
        timer::PwmChannel,
    };

    use crate::board::Board;

    pub type ThermistorPin = PA4<Analog>;

    /// TIM2 channel 1 on PA0
    pub type FanPwm = PwmChannel<pac::TIM2, 0>;

    pub type LedPin = ErasedPin<Output<PushPull>>;

    pub type FanBoard =
        Board<pac::ADC1, Adc<pac::ADC1>, ThermistorPin, FanPwm, LedPin>;
}
