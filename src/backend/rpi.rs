//! Raspberry Pi GPIO lines through `rppal`.

use rppal::gpio::{Gpio, InputPin, OutputPin};

use crate::line::{LineError, LineProvider, OutputLine};

pub struct RpiLines {
    gpio: Gpio,
}

impl RpiLines {
    pub fn new() -> Result<Self, LineError> {
        let gpio = Gpio::new().map_err(|error| LineError::Controller(Box::new(error)))?;
        Ok(Self { gpio })
    }
}

impl LineProvider for RpiLines {
    type Line = RpiLine;

    fn acquire_output(&mut self, offset: u8) -> Result<Self::Line, LineError> {
        let pin = self.gpio.get(offset).map_err(|error| LineError::Acquire {
            offset,
            source: Box::new(error),
        })?;

        // Direction is restored explicitly by `revert_to_input`.
        let mut pin = pin.into_output_low();
        pin.set_reset_on_drop(false);

        Ok(RpiLine {
            offset,
            pin: PinMode::Output(pin),
        })
    }
}

enum PinMode {
    Output(OutputPin),
    Input(InputPin),
    Detached,
}

pub struct RpiLine {
    offset: u8,
    pin: PinMode,
}

impl OutputLine for RpiLine {
    fn offset(&self) -> u8 {
        self.offset
    }

    fn set_level(&mut self, high: bool) -> Result<(), LineError> {
        let PinMode::Output(pin) = &mut self.pin else {
            return Err(LineError::Write {
                offset: self.offset,
                source: "line is not configured as output".into(),
            });
        };

        if high {
            pin.set_high();
        } else {
            pin.set_low();
        }
        Ok(())
    }

    fn revert_to_input(&mut self) -> Result<(), LineError> {
        self.pin = match core::mem::replace(&mut self.pin, PinMode::Detached) {
            PinMode::Output(pin) => {
                let mut pin = pin.into_input();
                pin.set_reset_on_drop(false);
                PinMode::Input(pin)
            }
            other => other,
        };

        match self.pin {
            PinMode::Input(_) => Ok(()),
            _ => Err(LineError::Revert {
                offset: self.offset,
                source: "line was already released".into(),
            }),
        }
    }

    fn release(self) {
        tracing::trace!(offset = self.offset, "Releasing GPIO pin");
        drop(self.pin);
    }
}
