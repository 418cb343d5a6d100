//! Integration tests driven by the scenario table: representative byte
//! sequences checked against every flag preset they distinguish between.

use utf8chk::{validate, ErrorKind, Flags, LengthMode, Missing};

fn explicit(bytes: &[u8]) -> LengthMode {
    LengthMode::Explicit(bytes.len())
}

#[test]
fn ascii_is_valid_under_every_preset() {
    let text = b"Hello, world!\n\t";
    for flags in [
        Flags::LAX,
        Flags::STRICT,
        Flags::UTF8,
        Flags::MUTF8,
        Flags::CESU8,
        Flags::WTF8,
    ] {
        assert!(validate(text, explicit(text), flags).is_ok());
    }
}

#[test]
fn four_byte_sequence_at_top_of_range_is_valid_utf8() {
    // U+10FFFF
    let bytes = [0xF4, 0x8F, 0xBF, 0xBF];
    assert!(validate(&bytes, explicit(&bytes), Flags::UTF8).is_ok());
}

#[test]
fn four_byte_sequence_above_top_of_range_is_rejected() {
    // Would decode to U+110000, one past the top of the Unicode range.
    let bytes = [0xF4, 0x90, 0x80, 0x80];
    let err = validate(&bytes, explicit(&bytes), Flags::LAX).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Range);
}

#[test]
fn overlong_two_byte_nul_is_rejected_under_utf8() {
    let bytes = [0xC0, 0x80];
    let err = validate(&bytes, explicit(&bytes), Flags::UTF8).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Overlong);
    assert_eq!(err.offset, 0);
}

#[test]
fn overlong_two_byte_nul_is_accepted_under_mutf8() {
    let bytes = [0xC0, 0x80];
    assert!(validate(&bytes, explicit(&bytes), Flags::MUTF8).is_ok());
}

#[test]
fn overlong_two_byte_nul_is_rejected_under_cesu8() {
    // CESU-8 bans overlong outright, unlike MUTF-8's narrow NUL exemption.
    let bytes = [0xC0, 0x80];
    let err = validate(&bytes, explicit(&bytes), Flags::CESU8).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Overlong);
}

#[test]
fn longer_overlong_encodings_of_null_are_never_exempt() {
    let three_byte_nul = [0xE0, 0x80, 0x80];
    let four_byte_nul = [0xF0, 0x80, 0x80, 0x80];
    for bytes in [&three_byte_nul[..], &four_byte_nul[..]] {
        let err = validate(bytes, explicit(bytes), Flags::MUTF8).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Overlong);
    }
}

#[test]
fn surrogate_pair_is_rejected_under_plain_utf8() {
    let cesu8_pair = [0xED, 0xA0, 0x81, 0xED, 0xB0, 0x80];
    let err = validate(&cesu8_pair, explicit(&cesu8_pair), Flags::UTF8).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Surrogate);
}

#[test]
fn well_formed_surrogate_pair_is_accepted_under_cesu8() {
    let cesu8_pair = [0xED, 0xA0, 0x81, 0xED, 0xB0, 0x80];
    assert!(validate(&cesu8_pair, explicit(&cesu8_pair), Flags::CESU8).is_ok());
}

#[test]
fn two_high_surrogates_in_a_row_is_rejected_under_check_surrogates() {
    let high_a = [0xED, 0xA0, 0x81];
    let high_b = [0xED, 0xA0, 0x82];
    let bytes = [high_a, high_b].concat();
    let err = validate(&bytes, explicit(&bytes), Flags::CESU8).unwrap_err();
    assert_eq!(err.kind, ErrorKind::SurrogateHigh);
    assert_eq!(err.offset, 3);
}

#[test]
fn ascii_between_an_orphaned_high_surrogate_and_its_low_does_not_break_the_pair() {
    // ASCII bytes can't themselves be surrogates, so they don't cancel
    // a pending high surrogate: a later low surrogate still completes it.
    let bytes = [0xED, 0xA0, 0x81, b'x', 0xED, 0xB0, 0x80];
    assert!(validate(&bytes, explicit(&bytes), Flags::CESU8).is_ok());
}

#[test]
fn unpaired_low_surrogate_is_rejected_under_check_surrogates() {
    let bytes = [0xED, 0xB0, 0x80];
    let err = validate(&bytes, explicit(&bytes), Flags::CESU8).unwrap_err();
    assert_eq!(err.kind, ErrorKind::SurrogateLow);
}

#[test]
fn unpaired_surrogates_are_accepted_under_wtf8() {
    let high = [0xED, 0xA0, 0x81];
    let low = [0xED, 0xB0, 0x80];
    assert!(validate(&high, explicit(&high), Flags::WTF8).is_ok());
    assert!(validate(&low, explicit(&low), Flags::WTF8).is_ok());
}

#[test]
fn truncated_three_byte_sequence_at_end_of_buffer() {
    let bytes = [0xE4, 0xB8];
    let err = validate(&bytes, explicit(&bytes), Flags::LAX).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Truncated(Missing::One));
    assert_eq!(err.offset, 0);
    assert_eq!(err.length, 2);
}

#[test]
fn orphaned_high_surrogate_at_end_of_buffer_reports_surrogate_truncated() {
    // Matches the scenario table row: ED A0 81 at true end of buffer
    // always reports the bare Missing::One variant, regardless of how
    // many bytes a hypothetical pairing low surrogate would still need.
    let bytes = [0xED, 0xA0, 0x81];
    let err = validate(&bytes, explicit(&bytes), Flags::CESU8).unwrap_err();
    assert_eq!(err.kind, ErrorKind::SurrogateTruncated(Missing::One));
    assert_eq!(err.offset, 0);
    assert_eq!(err.length, 3);
}

#[test]
fn expected_continuation_byte_reports_missing_count() {
    // Lead byte announces 3 continuation bytes and the buffer has all 3
    // slots available, but the second byte is plain ASCII rather than a
    // continuation byte.
    let bytes = [0xE4, 0x41, 0x42];
    let err = validate(&bytes, explicit(&bytes), Flags::LAX).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectedContinuation(Missing::Two));
    assert_eq!(err.offset, 0);
    assert_eq!(err.length, 1);
}

#[test]
fn noncharacter_is_rejected_only_when_banned() {
    // U+FDD0, the first noncharacter in the BMP noncharacter block.
    let bytes = [0xEF, 0xB7, 0x90];
    assert!(validate(&bytes, explicit(&bytes), Flags::UTF8).is_ok());
    let err = validate(
        &bytes,
        explicit(&bytes),
        Flags::UTF8.with_ban_noncharacters(),
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Noncharacter);
}

#[test]
fn plane_noncharacter_u_nfffe_is_rejected_when_banned() {
    // U+1FFFE
    let bytes = [0xF0, 0x9F, 0xBF, 0xBE];
    let err = validate(
        &bytes,
        explicit(&bytes),
        Flags::UTF8.with_ban_noncharacters(),
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Noncharacter);
}

#[test]
fn embedded_nul_is_only_an_error_under_explicit_length_with_ban_null_byte() {
    let bytes = [b'a', 0, b'b'];
    assert!(validate(&bytes, explicit(&bytes), Flags::LAX).is_ok());
    let err = validate(&bytes, explicit(&bytes), Flags::LAX.with_ban_null_byte()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NullByte);
    assert_eq!(err.offset, 1);
}

#[test]
fn until_nul_mode_stops_at_first_zero_byte_and_ignores_ban_null_byte() {
    let bytes = [b'a', b'b', 0, 0xFF];
    // 0xFF past the terminator is never scanned.
    let ok = validate(&bytes, LengthMode::UntilNul, Flags::LAX.with_ban_null_byte());
    assert!(ok.is_ok());
}

#[test]
fn until_nul_mode_treats_nul_mid_sequence_as_truncation_not_bad_continuation() {
    // Lead byte for a 3-byte sequence, one continuation byte, then a NUL
    // terminator before the sequence completes: sentinel mode reports
    // truncation rather than treating 0x00 as a bad continuation byte.
    let bytes = [0xE4, 0xB8, 0x00];
    let err = validate(&bytes, LengthMode::UntilNul, Flags::LAX).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Truncated(Missing::One));
}

#[test]
fn continuation_byte_without_lead_byte_is_unexpected_continuation() {
    let bytes = [0x80];
    let err = validate(&bytes, explicit(&bytes), Flags::LAX).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedContinuation);
    assert_eq!(err.offset, 0);
}

#[test]
fn byte_0xff_is_never_a_valid_start_byte() {
    let bytes = [0xFF];
    let err = validate(&bytes, explicit(&bytes), Flags::LAX).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidStartByte);
}

#[test]
fn explicit_length_longer_than_buffer_is_clamped() {
    let bytes = b"hi";
    let result = validate(bytes, LengthMode::Explicit(1000), Flags::UTF8).unwrap();
    assert_eq!(result.offset, bytes.len());
}

#[test]
fn empty_buffer_is_valid_under_every_preset() {
    for flags in [Flags::LAX, Flags::STRICT, Flags::UTF8, Flags::WTF8] {
        assert!(validate(&[], LengthMode::Explicit(0), flags).is_ok());
    }
}

#[test]
fn restarting_at_a_truncation_error_offset_succeeds() {
    let bytes = [b'h', b'i', 0xE4, 0xB8];
    let err = validate(&bytes, explicit(&bytes), Flags::LAX).unwrap_err();
    assert_eq!(err.offset, 2);
    let prefix = &bytes[..err.offset];
    assert!(validate(prefix, explicit(prefix), Flags::LAX).is_ok());
}

#[test]
fn restarting_at_a_surrogate_truncated_error_offset_succeeds() {
    let bytes = [b'h', b'i', 0xED, 0xA0, 0x81];
    let err = validate(&bytes, explicit(&bytes), Flags::CESU8).unwrap_err();
    assert_eq!(err.offset, 2);
    let prefix = &bytes[..err.offset];
    assert!(validate(prefix, explicit(prefix), Flags::CESU8).is_ok());
}

#[test]
fn overlong_takes_precedence_over_surrogate_for_the_same_sequence() {
    // A 4-byte (overlong) encoding of U+D800: range passes, but the
    // overlong check must fire before the surrogate check ever sees it,
    // even under a preset that bans both.
    let bytes = [0xF0, 0x8D, 0xA0, 0x80];
    let err = validate(&bytes, explicit(&bytes), Flags::STRICT).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Overlong);
}
