use super::binding::{Axis, ButtonChord, Gesture};
use crate::input::{EventKind, HeldButtons, InputSnapshot};

/// Resolve held buttons to the chord they form.
///
/// Fails closed (`None`) when more than two buttons are held or when any
/// button outside left/right/middle is held, so an unexpected button can never
/// alias a configured chord. With two buttons held, the left+right chord wins,
/// then middle, then right, then left.
#[must_use]
pub fn resolve_chord(held: HeldButtons) -> Option<ButtonChord> {
    if held.other() > 0 || held.count() > 2 {
        return None;
    }
    let chord = if held.left() && held.right() {
        ButtonChord::LeftAndRight
    } else if held.middle() {
        ButtonChord::Middle
    } else if held.right() {
        ButtonChord::Right
    } else if held.left() {
        ButtonChord::Left
    } else {
        ButtonChord::None
    };
    Some(chord)
}

/// Classify a live event into the gesture it performs.
///
/// Returns `None` for events that are neither pointer motion nor scroll, and
/// for button states [`resolve_chord`] rejects.
#[must_use]
pub fn classify(snapshot: &InputSnapshot) -> Option<Gesture> {
    let axis = match snapshot.kind {
        EventKind::PointerMove => Axis::Pointer,
        EventKind::Scroll => Axis::Scroll,
        EventKind::Other => return None,
    };
    let button = resolve_chord(snapshot.buttons)?;
    Some(Gesture {
        modifiers: snapshot.modifiers,
        button,
        axis,
    })
}
