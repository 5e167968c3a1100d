//! Macros for declaring state and event identifiers.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// The generated enum derives `Clone, Copy, PartialEq, Eq, Hash, Debug`, and
/// `name()` returns the variant name.
///
/// # Example
///
/// ```
/// use lockstep::core::State;
/// use lockstep::state_enum;
///
/// state_enum! {
///     pub enum Gear {
///         Off,
///         First,
///         Second,
///     }
/// }
///
/// assert_eq!(Gear::Second.name(), "Second");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Declare a fieldless enum and implement [`Event`](crate::core::Event) for it.
///
/// # Example
///
/// ```
/// use lockstep::core::Event;
/// use lockstep::event_enum;
///
/// event_enum! {
///     pub enum Button {
///         PressOff,
///         PressFirst,
///     }
/// }
///
/// assert_eq!(Button::PressOff.name(), "PressOff");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};
    use crate::Fsm;

    state_enum! {
        enum Lamp {
            Dark,
            Lit,
        }
    }

    event_enum! {
        enum Switch {
            Flip,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Lamp::Dark.name(), "Dark");
        assert_eq!(Lamp::Lit.name(), "Lit");
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(Switch::Flip.name(), "Flip");
    }

    #[test]
    fn generated_enums_drive_a_machine() {
        let mut lamp = Fsm::new(Lamp::Dark);
        lamp.add_handler(Lamp::Dark, Switch::Flip, || Lamp::Lit)
            .add_handler(Lamp::Lit, Switch::Flip, || Lamp::Dark);

        assert_eq!(lamp.call(Switch::Flip), Lamp::Lit);
        assert_eq!(lamp.call(Switch::Flip), Lamp::Dark);
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            /// Documented and public.
            pub enum PublicState {
                A,
                #[allow(dead_code)]
                B,
            }
        }

        let _state = PublicState::A;
    }
}
