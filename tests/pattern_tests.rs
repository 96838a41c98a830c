//! Integration tests for the pattern generators

use std::time::Duration;

use led_toggle::config::{KNOCK_TABLE, TRI_COLOR_TABLE};
use led_toggle::{Mode, PatternSequence};

fn bits(mode: Mode) -> Vec<u16> {
    PatternSequence::new(mode)
        .map(|step| step.pattern.bits())
        .collect()
}

#[test]
fn right_shift_walks_down_and_wraps_after_reaching_zero() {
    let bits = bits(Mode::RightShift);
    assert_eq!(bits.len(), 65);

    assert_eq!(bits[0], 0x80);
    assert_eq!(bits[1], 0x40);
    assert_eq!(bits[7], 0x01);
    // The shifted value hit zero after step 7 and wraps before step 8 is emitted
    assert_eq!(bits[8], 0x80);
    assert_eq!(bits[15], 0x01);
    assert_eq!(bits[16], 0x80);
}

#[test]
fn right_shift_final_step_stays_at_zero() {
    let bits = bits(Mode::RightShift);
    assert_eq!(bits[63], 0x01);
    assert_eq!(bits[64], 0x00);
}

#[test]
fn right_shift_repeats_every_eight_steps() {
    let bits = bits(Mode::RightShift);
    let expected: Vec<u16> = (0..64).map(|j| 0x80 >> (j % 8)).collect();
    assert_eq!(&bits[..64], expected.as_slice());
}

#[test]
fn left_shift_walks_up_and_wraps_after_exceeding_top_bit() {
    let bits = bits(Mode::LeftShift);
    assert_eq!(bits.len(), 65);

    assert_eq!(bits[0], 0x01);
    assert_eq!(bits[1], 0x02);
    assert_eq!(bits[7], 0x80);
    assert_eq!(bits[8], 0x01);
    assert_eq!(bits[15], 0x80);
    assert_eq!(bits[16], 0x01);
}

#[test]
fn left_shift_final_step_is_forced_to_zero() {
    let bits = bits(Mode::LeftShift);
    assert_eq!(bits[63], 0x80);
    assert_eq!(bits[64], 0x00);

    let expected: Vec<u16> = (0..64).map(|j| 0x01 << (j % 8)).collect();
    assert_eq!(&bits[..64], expected.as_slice());
}

#[test]
fn counter_counts_through_a_byte_and_wraps_once() {
    let bits = bits(Mode::Counter);
    assert_eq!(bits.len(), 257);

    for (index, value) in bits.iter().take(256).enumerate() {
        assert_eq!(*value as usize, index);
    }
    assert_eq!(bits[256], 0);
    assert_eq!(bits[256], bits[0]);
}

#[test]
fn knock_cycles_through_its_table() {
    let bits = bits(Mode::Knock);
    assert_eq!(bits.len(), 64);

    let twice: Vec<u16> = KNOCK_TABLE.iter().chain(KNOCK_TABLE.iter()).copied().collect();
    assert_eq!(&bits[..12], twice.as_slice());
}

#[test]
fn any_twelve_knock_steps_are_the_table_twice_from_the_current_position() {
    let bits = bits(Mode::Knock);

    for start in 0..=bits.len() - 12 {
        let expected: Vec<u16> = (0..12)
            .map(|offset| KNOCK_TABLE[(start + offset) % KNOCK_TABLE.len()])
            .collect();
        assert_eq!(&bits[start..start + 12], expected.as_slice(), "window at {start}");
    }
}

#[test]
fn tri_color_cycles_through_its_table() {
    let bits = bits(Mode::TriColor);
    assert_eq!(bits.len(), 64);

    for (index, value) in bits.iter().enumerate() {
        assert_eq!(*value, TRI_COLOR_TABLE[index % TRI_COLOR_TABLE.len()]);
    }
    assert_eq!(bits[7], 0x000);
    assert_eq!(bits[63], 0x000);
}

#[test]
fn tri_color_stays_within_eleven_lines() {
    assert!(bits(Mode::TriColor).iter().all(|&b| b < 1 << 11));
}

#[test]
fn intervals_follow_the_cadence() {
    let quarter = Duration::from_millis(250);
    for mode in [Mode::RightShift, Mode::LeftShift, Mode::Counter, Mode::Knock] {
        assert_eq!(PatternSequence::new(mode).interval(), quarter, "{mode}");
    }
    assert_eq!(PatternSequence::new(Mode::TriColor).interval(), Duration::from_secs(4));
}

#[test]
fn sequences_are_restartable() {
    for mode in Mode::ALL {
        let first = bits(mode);

        let mut sequence = PatternSequence::new(mode);
        sequence.by_ref().take(5).for_each(drop);
        sequence.restart();
        let again: Vec<u16> = sequence.map(|step| step.pattern.bits()).collect();

        assert_eq!(first, again, "{mode}");
    }
}

#[test]
fn reported_length_matches_yielded_steps() {
    for mode in Mode::ALL {
        let sequence = PatternSequence::new(mode);
        assert_eq!(sequence.len(), mode.steps() as usize);
        assert_eq!(sequence.count(), mode.steps() as usize);
    }
}
