use std::io::{Cursor, Read};

use crate::error::Sd9Error;
use crate::headers::Sd9Header;
use crate::params::{ParamWarning, TrackParams, TrackParamsBuilder};
use crate::reader::Sd9Reader;
use crate::sound::Sd9Sound;
use crate::writer::{Sd9Writer, create_output};

fn sample_sound() -> Sd9Sound {
    let mut sound = Sd9Sound::new();
    sound.header.volume = 25;
    sound.header.unk3 = 0x11;
    sound.header.loop_start = 40;
    sound.header.loop_end = 80;
    sound.header.loop_enabled = 1;
    sound.header.unk4 = 0x22;
    sound.header.sound_index = 7;
    sound.import_audio(vec![0xDE, 0xAD, 0xBE, 0xEF]);
    sound
}

#[test]
fn header_roundtrip_preserves_all_fields() {
    let header = sample_sound().header;
    let mut buf = Vec::new();
    Sd9Writer::new(&mut buf).write_header(&header).unwrap();
    assert_eq!(buf.len(), Sd9Header::SIZE);

    let parsed = Sd9Header::parse(&buf).unwrap();
    assert_eq!(parsed, header);
}

#[test]
fn sound_roundtrip_is_byte_exact() {
    let sound = sample_sound();
    let bytes = sound.to_vec().unwrap();

    let reparsed = Sd9Sound::parse(&bytes).unwrap();
    assert_eq!(reparsed, sound);
    assert_eq!(reparsed.to_vec().unwrap(), bytes);
}

#[test]
fn default_header_matches_documented_bytes() {
    let mut buf = Vec::new();
    Sd9Writer::new(&mut buf)
        .write_header(&Sd9Header::default())
        .unwrap();

    let expected = [
        0x53, 0x44, 0x39, 0x00, // magic "SD9\0"
        0x20, 0x00, 0x00, 0x00, // header_size
        0x00, 0x00, 0x00, 0x00, // audio_size
        0x31, 0x32, 0x01, 0x00, // unk1
        0x40, 0x00, // unk2
        0x00, 0x00, // volume, unk3
        0x00, 0x00, 0x00, 0x00, // loop_start
        0x00, 0x00, 0x00, 0x00, // loop_end
        0x00, 0x00, // loop_enabled, unk4
        0x00, 0x00, // sound_index
    ];
    assert_eq!(buf, expected);
}

#[test]
fn parse_rejects_wrong_magic_regardless_of_tail() {
    let mut bytes = vec![0u8; Sd9Header::SIZE];
    bytes[..4].copy_from_slice(b"SD8\0");
    assert!(matches!(
        Sd9Header::parse(&bytes),
        Err(Sd9Error::BadMagic { found: [0x53, 0x44, 0x38, 0x00] })
    ));

    // Magic wins over the length check when both are wrong.
    assert!(matches!(
        Sd9Header::parse(b"XXXX"),
        Err(Sd9Error::BadMagic { .. })
    ));
}

#[test]
fn parse_rejects_short_header() {
    let mut bytes = Sd9Header::MAGIC.to_vec();
    bytes.extend_from_slice(&[0u8; 8]);
    assert!(matches!(
        Sd9Header::parse(&bytes),
        Err(Sd9Error::Truncated {
            needed: Sd9Header::SIZE,
            available: 12
        })
    ));
}

#[test]
fn decode_rejects_short_payload() {
    let mut sound = Sd9Sound::new();
    sound.import_audio(vec![9; 10]);
    let mut bytes = sound.to_vec().unwrap();
    bytes.truncate(Sd9Header::SIZE + 3);

    assert!(matches!(
        Sd9Sound::parse(&bytes),
        Err(Sd9Error::Truncated { .. })
    ));
    assert!(matches!(
        Sd9Sound::read_from(Cursor::new(bytes)),
        Err(Sd9Error::Truncated { .. })
    ));
}

#[test]
fn decode_ignores_trailing_bytes() {
    let sound = sample_sound();
    let mut bytes = sound.to_vec().unwrap();
    bytes.extend_from_slice(b"trailing junk");

    assert_eq!(Sd9Sound::parse(&bytes).unwrap(), sound);
}

#[test]
fn reader_stops_at_declared_payload_length() {
    let mut sound = Sd9Sound::new();
    sound.import_audio(vec![1, 2, 3]);
    let mut bytes = sound.to_vec().unwrap();
    bytes.extend_from_slice(b"trailing junk");

    let mut reader = Sd9Reader::open(Cursor::new(bytes)).unwrap();
    assert_eq!(reader.header().audio_size, 3);

    let mut audio = Vec::new();
    reader.audio_reader().read_to_end(&mut audio).unwrap();
    assert_eq!(audio, vec![1, 2, 3]);
}

#[test]
fn volume_is_stored_inverted() {
    let mut header = Sd9Header::default();

    let params = TrackParamsBuilder::default()
        .volume(0u32)
        .build()
        .unwrap();
    assert!(params.apply_to(&mut header).is_empty());
    assert_eq!(header.volume, 125);

    let params = TrackParamsBuilder::default()
        .volume(125u32)
        .build()
        .unwrap();
    assert!(params.apply_to(&mut header).is_empty());
    assert_eq!(header.volume, 0);
}

#[test]
fn volume_above_range_is_rejected_not_clamped() {
    let mut header = Sd9Header::default();
    header.volume = 25;

    let params = TrackParamsBuilder::default()
        .volume(126u32)
        .build()
        .unwrap();
    let warnings = params.apply_to(&mut header);

    assert_eq!(warnings, vec![ParamWarning::VolumeOutOfRange(126)]);
    assert_eq!(header.volume, 25);
}

#[test]
fn loop_points_are_quarter_sample_scaled() {
    let mut header = Sd9Header::default();
    let params = TrackParamsBuilder::default()
        .loop_start(10u32)
        .loop_end(20u32)
        .build()
        .unwrap();

    assert!(params.apply_to(&mut header).is_empty());
    assert_eq!(header.loop_start, 40);
    assert_eq!(header.loop_end, 80);
    assert_eq!(header.loop_start_samples(), 10);
    assert_eq!(header.loop_end_samples(), 20);
}

#[test]
fn loop_flag_only_turns_on() {
    let mut header = Sd9Header::default();
    header.loop_enabled = 1;

    // A falsy flag is a no-op, not a clear.
    assert!(TrackParams::default().apply_to(&mut header).is_empty());
    assert_eq!(header.loop_enabled, 1);

    let mut header = Sd9Header::default();
    let params = TrackParamsBuilder::default().loop_enabled(true).build().unwrap();
    params.apply_to(&mut header);
    assert_eq!(header.loop_enabled, 1);
}

#[test]
fn oversized_loop_points_are_rejected() {
    let mut header = Sd9Header::default();
    let params = TrackParamsBuilder::default()
        .loop_start(u32::MAX)
        .build()
        .unwrap();
    let warnings = params.apply_to(&mut header);

    assert_eq!(warnings, vec![ParamWarning::LoopStartOutOfRange(u32::MAX)]);
    assert_eq!(header.loop_start, 0);
}

#[test]
fn import_audio_recomputes_size() {
    let mut sound = Sd9Sound::new();
    sound.import_audio(vec![0xAB; 100]);

    assert_eq!(sound.header.audio_size, 100);
    let bytes = sound.to_vec().unwrap();
    assert_eq!(bytes.len(), Sd9Header::SIZE + 100);
    assert!(bytes[Sd9Header::SIZE..].iter().all(|&b| b == 0xAB));
}

#[test]
fn info_reports_domain_values() {
    let info = sample_sound().info();

    assert_eq!(info.sound_index, 7);
    assert_eq!(info.audio_size, 4);
    assert_eq!(info.volume, 100);
    assert!(info.loop_enabled);
    assert_eq!(info.loop_start, 10);
    assert_eq!(info.loop_end, 20);
}

#[test]
fn create_output_refuses_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audio.wav");
    std::fs::write(&path, b"original").unwrap();

    let err = create_output(&path, false).unwrap_err();
    assert!(matches!(err, Sd9Error::OutputExists(_)));
    assert_eq!(std::fs::read(&path).unwrap(), b"original");

    // With overwrite permission the same destination opens fine.
    create_output(&path, true).unwrap();
}
