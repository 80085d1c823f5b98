//! Packed integer control codes.
//!
//! Bindings are persisted as a single integer so they fit a flat key-value
//! store. Each field owns one decimal digit ("slot"):
//!
//! | slot | weight | field | digits |
//! | --- | --- | --- | --- |
//! | 0 | 1 | axis | 1 pointer, 2 scroll |
//! | 1 | 10 | mouse button | 0 none, 1 L, 2 R, 3 M, 9 L+R |
//! | 2 | 100 | Command | 0/1 |
//! | 3 | 1 000 | Option | 0/1 |
//! | 4 | 10 000 | Shift | 0/1 |
//! | 5 | 100 000 | Control | 0/1 |
//! | 6 | 1 000 000 | invert X | 0/1 |
//! | 7 | 10 000 000 | invert Y | 0/1 |
//!
//! Encoding and decoding both go through [`Slot`], so the slot order cannot
//! drift between them. Everything outside this module works with the tagged
//! [`Binding`]/[`Gesture`] types instead.

use std::fmt;

use super::binding::{Axis, Binding, ButtonChord, Gesture, Inversion};
use super::modifiers::{Modifier, Modifiers};

/// Largest valid code: every slot at its maximum digit.
pub const MAX_CODE: i32 = 11_111_192;

/// Number of decimal slots in a code.
const SLOT_COUNT: u32 = 8;

/// One decimal slot of a packed code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Units digit.
    Axis,
    /// Tens digit.
    Button,
    /// Hundreds digit.
    Command,
    /// Thousands digit.
    Option,
    /// Ten-thousands digit.
    Shift,
    /// Hundred-thousands digit.
    Control,
    /// Millions digit.
    InvertX,
    /// Ten-millions digit.
    InvertY,
}

impl Slot {
    fn weight(self) -> i32 {
        match self {
            Self::Axis => 1,
            Self::Button => 10,
            Self::Command => 100,
            Self::Option => 1_000,
            Self::Shift => 10_000,
            Self::Control => 100_000,
            Self::InvertX => 1_000_000,
            Self::InvertY => 10_000_000,
        }
    }

    fn digit_of(self, code: i32) -> u8 {
        ((code / self.weight()) % 10) as u8
    }

    fn place(self, digit: u8) -> i32 {
        i32::from(digit) * self.weight()
    }

    fn for_modifier(modifier: Modifier) -> Self {
        match modifier {
            Modifier::Control => Self::Control,
            Modifier::Shift => Self::Shift,
            Modifier::Option => Self::Option,
            Modifier::Command => Self::Command,
        }
    }
}

/// Why a code failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    /// Negative, or wider than the eight defined slots.
    OutOfRange(i32),
    /// A slot holds a digit its field does not define.
    InvalidDigit {
        /// Offending slot.
        slot: Slot,
        /// Digit found there.
        digit: u8,
    },
    /// A live code carried inversion digits.
    UnexpectedInversion(i32),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(code) => {
                write!(f, "code {code} is outside 0..={MAX_CODE}")
            }
            Self::InvalidDigit { slot, digit } => {
                write!(f, "digit {digit} is not valid in the {slot:?} slot")
            }
            Self::UnexpectedInversion(code) => {
                write!(f, "live code {code} carries inversion digits")
            }
        }
    }
}

impl std::error::Error for CodeError {}

fn axis_digit(axis: Axis) -> u8 {
    match axis {
        Axis::Pointer => 1,
        Axis::Scroll => 2,
    }
}

fn button_digit(button: ButtonChord) -> u8 {
    match button {
        ButtonChord::None => 0,
        ButtonChord::Left => 1,
        ButtonChord::Right => 2,
        ButtonChord::Middle => 3,
        ButtonChord::LeftAndRight => 9,
    }
}

fn flag(code: i32, slot: Slot) -> Result<bool, CodeError> {
    match slot.digit_of(code) {
        0 => Ok(false),
        1 => Ok(true),
        digit => Err(CodeError::InvalidDigit { slot, digit }),
    }
}

/// Encode a gesture (no inversion digits). This is the live code.
#[must_use]
pub fn encode(gesture: &Gesture) -> i32 {
    let mut code = Slot::Axis.place(axis_digit(gesture.axis))
        + Slot::Button.place(button_digit(gesture.button));
    for modifier in gesture.modifiers.iter() {
        code += Slot::for_modifier(modifier).place(1);
    }
    code
}

/// Encode a binding including inversion digits. Inert bindings have no code.
#[must_use]
pub fn encode_binding(binding: &Binding) -> Option<i32> {
    let gesture = binding.trigger.as_ref()?;
    let mut code = encode(gesture);
    if binding.invert.x {
        code += Slot::InvertX.place(1);
    }
    if binding.invert.y {
        code += Slot::InvertY.place(1);
    }
    Some(code)
}

/// Decode a stored code into a binding.
///
/// # Errors
///
/// Returns [`CodeError`] when the code is out of range or any slot holds an
/// undefined digit.
pub fn decode(code: i32) -> Result<Binding, CodeError> {
    if !(0..10_i32.pow(SLOT_COUNT)).contains(&code) {
        return Err(CodeError::OutOfRange(code));
    }

    let axis = match Slot::Axis.digit_of(code) {
        1 => Axis::Pointer,
        2 => Axis::Scroll,
        digit => {
            return Err(CodeError::InvalidDigit {
                slot: Slot::Axis,
                digit,
            })
        }
    };
    let button = match Slot::Button.digit_of(code) {
        0 => ButtonChord::None,
        1 => ButtonChord::Left,
        2 => ButtonChord::Right,
        3 => ButtonChord::Middle,
        9 => ButtonChord::LeftAndRight,
        digit => {
            return Err(CodeError::InvalidDigit {
                slot: Slot::Button,
                digit,
            })
        }
    };

    let mut modifiers = Modifiers::NONE;
    for modifier in Modifier::ALL {
        modifiers.set(modifier, flag(code, Slot::for_modifier(modifier))?);
    }

    Ok(Binding {
        trigger: Some(Gesture {
            modifiers,
            button,
            axis,
        }),
        invert: Inversion {
            x: flag(code, Slot::InvertX)?,
            y: flag(code, Slot::InvertY)?,
        },
    })
}

/// Decode a live code, which must not carry inversion digits.
///
/// # Errors
///
/// As [`decode`], plus [`CodeError::UnexpectedInversion`].
pub fn decode_live(code: i32) -> Result<Gesture, CodeError> {
    let binding = decode(code)?;
    match binding.trigger {
        Some(gesture) if binding.invert == Inversion::NONE => Ok(gesture),
        _ => Err(CodeError::UnexpectedInversion(code)),
    }
}

/// Decode a stored code, degrading to [`Binding::INERT`] on failure so a
/// corrupted or hand-edited value disables the binding instead of failing.
#[must_use]
pub fn decode_or_inert(code: i32) -> Binding {
    decode(code).unwrap_or_else(|e| {
        log::warn!("ignoring control code {code}: {e}");
        Binding::INERT
    })
}

/// Whether a stored binding code (inversion stripped) equals a live code.
///
/// Fails closed: any undecodable input yields `false`.
#[must_use]
pub fn matches(binding_code: i32, live_code: i32) -> bool {
    match (decode(binding_code), decode_live(live_code)) {
        (Ok(binding), Ok(live)) => binding.matches(&live),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_gestures() -> Vec<Gesture> {
        let mut out = Vec::new();
        for bits in 0..16_u8 {
            let modifiers = Modifiers {
                control: bits & 1 != 0,
                shift: bits & 2 != 0,
                option: bits & 4 != 0,
                command: bits & 8 != 0,
            };
            for axis in [Axis::Pointer, Axis::Scroll] {
                for button in ButtonChord::ALL {
                    out.push(Gesture {
                        modifiers,
                        button,
                        axis,
                    });
                }
            }
        }
        out
    }

    #[test]
    fn every_gesture_survives_encode_decode() {
        let gestures = all_gestures();
        assert_eq!(gestures.len(), 160);
        for gesture in gestures {
            for (x, y) in [(false, false), (true, false), (false, true)] {
                let binding = Binding::new(gesture).inverted(x, y);
                let code = encode_binding(&binding).unwrap();
                assert_eq!(decode(code).unwrap(), binding, "code {code}");
            }
        }
    }

    #[test]
    fn every_valid_code_re_encodes_to_itself() {
        let mut valid = 0;
        for code in 0..=MAX_CODE {
            if let Ok(binding) = decode(code) {
                assert_eq!(encode_binding(&binding), Some(code));
                valid += 1;
            }
        }
        // 16 modifier sets * 5 buttons * 2 axes * 4 inversion pairs
        assert_eq!(valid, 640);
    }

    #[test]
    fn known_layout_values() {
        let rotate = Binding::new(Gesture::SCROLL).inverted(true, true);
        assert_eq!(encode_binding(&rotate), Some(11_000_002));

        let pan = Binding::new(
            Gesture::SCROLL.with_modifiers(Modifiers::only(Modifier::Shift)),
        )
        .inverted(false, true);
        assert_eq!(encode_binding(&pan), Some(10_010_002));

        let zoom = Gesture::SCROLL
            .with_modifiers(Modifiers::only(Modifier::Command));
        assert_eq!(encode(&zoom), 102);

        let chord = Gesture::new(Axis::Pointer)
            .with_modifiers(Modifiers::only(Modifier::Control))
            .with_button(ButtonChord::LeftAndRight);
        assert_eq!(encode(&chord), 100_091);
    }

    #[test]
    fn chord_digit_does_not_bleed_into_neighbours() {
        // 90 + 2: the chord must decode as one button, not Middle + 60.
        let binding = decode(92).unwrap();
        let gesture = binding.trigger.unwrap();
        assert_eq!(gesture.button, ButtonChord::LeftAndRight);
        assert_eq!(gesture.axis, Axis::Scroll);
        assert!(gesture.modifiers.is_empty());
    }

    #[test]
    fn malformed_codes_are_rejected() {
        assert_eq!(decode(-5), Err(CodeError::OutOfRange(-5)));
        assert_eq!(
            decode(100_000_000),
            Err(CodeError::OutOfRange(100_000_000))
        );
        assert!(matches!(
            decode(0),
            Err(CodeError::InvalidDigit {
                slot: Slot::Axis,
                ..
            })
        ));
        assert!(matches!(
            decode(42),
            Err(CodeError::InvalidDigit {
                slot: Slot::Button,
                ..
            })
        ));
        assert!(matches!(
            decode(202),
            Err(CodeError::InvalidDigit {
                slot: Slot::Command,
                ..
            })
        ));
        assert!(matches!(
            decode(i32::MAX),
            Err(CodeError::OutOfRange(_))
        ));
    }

    #[test]
    fn malformed_codes_degrade_to_inert() {
        assert_eq!(decode_or_inert(57), Binding::INERT);
        assert_eq!(decode_or_inert(-1), Binding::INERT);
        assert!(!decode_or_inert(102).is_inert());
    }

    #[test]
    fn integer_matching_strips_binding_inversion() {
        // Shift + Scroll with invert Y, against a live Shift + Scroll.
        assert!(matches(10_010_002, 10_002));
        assert!(matches(11_000_002, 2));
    }

    #[test]
    fn integer_matching_fails_on_any_differing_field() {
        let base = 10_002; // Shift + Scroll
        assert!(!matches(base, 10_001)); // axis
        assert!(!matches(base, 10_012)); // button
        assert!(!matches(base, 110_002)); // extra Control
        assert!(!matches(base, 2)); // missing Shift
    }

    #[test]
    fn integer_matching_fails_closed() {
        assert!(!matches(10_002, 1_010_002)); // live code with inversion
        assert!(!matches(10_002, 10_042)); // bad button digit
        assert!(!matches(-3, 2));
    }
}
