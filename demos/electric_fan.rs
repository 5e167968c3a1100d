//! Electric Fan
//!
//! A four-gear fan: every button works in every gear, so the transition
//! table is fully connected.
//!
//! Key concepts:
//! - Declaring identifiers with `state_enum!` / `event_enum!`
//! - Explicit setup: construct the machine, then register handlers
//! - Handlers that perform a side effect and pick the next state
//!
//! Run with: RUST_LOG=lockstep=info cargo run --example electric_fan

use lockstep::{event_enum, state_enum, Fsm};
use tracing::info;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Gear {
        Off,
        First,
        Second,
        Third,
    }
}

event_enum! {
    enum Button {
        PressOff,
        PressFirst,
        PressSecond,
        PressThird,
    }
}

fn power_off() -> Gear {
    info!("fan stopped");
    Gear::Off
}

fn first_gear() -> Gear {
    info!("running in gear 1");
    Gear::First
}

fn second_gear() -> Gear {
    info!("running in gear 2");
    Gear::Second
}

fn third_gear() -> Gear {
    info!("running in gear 3");
    Gear::Third
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let mut fan = Fsm::new(Gear::Off);
    for gear in [Gear::Off, Gear::First, Gear::Second, Gear::Third] {
        fan.add_handler(gear, Button::PressOff, power_off)
            .add_handler(gear, Button::PressFirst, first_gear)
            .add_handler(gear, Button::PressSecond, second_gear)
            .add_handler(gear, Button::PressThird, third_gear);
    }

    for button in [
        Button::PressThird,
        Button::PressFirst,
        Button::PressOff,
        Button::PressSecond,
        Button::PressOff,
    ] {
        let gear = fan.call(button);
        println!("{button:?} -> {gear:?}");
    }

    Ok(())
}
