//! Property tests for keycode decoding.

use proptest::prelude::*;

use git_switch_interactive::Command;

const KNOWN: [([u8; 3], Command); 10] = [
    ([27, 0, 0], Command::Quit),
    ([3, 0, 0], Command::Quit),
    ([113, 0, 0], Command::Quit),
    ([27, 91, 65], Command::MoveUp),
    ([107, 0, 0], Command::MoveUp),
    ([27, 91, 66], Command::MoveDown),
    ([106, 0, 0], Command::MoveDown),
    ([13, 0, 0], Command::Confirm),
    ([100, 0, 0], Command::ToggleMark),
    ([121, 0, 0], Command::ConfirmYes),
];

#[test]
fn every_listed_sequence_decodes_to_its_command() {
    for (frame, command) in KNOWN {
        assert_eq!(Command::decode(frame), command, "frame {frame:?}");
    }
}

proptest! {
    /// PROPERTY: Any frame outside the key table is unrecognized.
    #[test]
    fn property_unlisted_frames_are_unrecognized(frame in any::<[u8; 3]>()) {
        let expected = KNOWN
            .iter()
            .find(|(known, _)| *known == frame)
            .map(|(_, command)| *command)
            .unwrap_or(Command::Unrecognized);
        prop_assert_eq!(Command::decode(frame), expected);
    }

    /// PROPERTY: Decoding short reads never panics and pads with zeros.
    #[test]
    fn property_decode_bytes_pads_short_reads(bytes in proptest::collection::vec(any::<u8>(), 0..=3)) {
        let mut frame = [0u8; 3];
        frame[..bytes.len()].copy_from_slice(&bytes);
        prop_assert_eq!(Command::decode_bytes(&bytes), Command::decode(frame));
    }
}
