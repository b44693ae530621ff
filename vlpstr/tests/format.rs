//! Integration tests for the encoded string format.

use commonware_vlpstr::{
    checked_rsize, data, import, import_bytes, len, prefix_size, rsize, Config, Decode, Encoder,
    EncodeSize, Error, Prefix, Vlpstr, VlpstrMut, Width, Write,
};
use std::ffi::CString;

/// Deterministic payload without zero bytes, so it can be imported as a terminated string.
fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 255) as u8 + 1).collect()
}

fn roundtrip(len: usize) {
    let src = CString::new(payload(len)).unwrap();
    let mut buf = vec![0xAA; rsize(len)];
    assert_eq!(import(&mut buf, &src).unwrap(), buf.len());

    assert_eq!(commonware_vlpstr::len(&buf).unwrap(), len as u64);
    let offset = data(&buf).unwrap();
    assert_eq!(offset, prefix_size(len as u64));
    assert_eq!(&buf[offset..offset + len], src.as_bytes());

    // The payload, read as a terminated string, reproduces the source including its terminator.
    assert_eq!(&buf[offset..], src.as_bytes_with_nul());
    let view = Vlpstr::new(&buf).unwrap();
    assert_eq!(view.as_cstr(), Some(src.as_c_str()));
    assert!(view.remainder() == b"\0");
}

#[test]
fn test_roundtrip_lengths() {
    for len in [0, 1, 50, 127, 128, 129, 255, 256, 65535, 65536] {
        roundtrip(len);
    }
}

#[test]
fn test_roundtrip_large_prefixes() {
    // Payloads of these lengths cannot be allocated, so only the prefix is exercised.
    for (n, width) in [(1u64 << 32, 5u8), (1 << 63, 8)] {
        let prefix = Prefix::minimal(n);
        assert_eq!(prefix.width(), width);
        assert_eq!(checked_rsize(n), Some(n + width as u64 + 2));

        let mut buf = Vec::new();
        prefix.write(&mut buf);
        assert_eq!(buf.len(), prefix.encode_size());
        assert_eq!(buf[0], 0x80 | width);
        assert_eq!(len(&buf).unwrap(), n);
        assert_eq!(data(&buf).unwrap(), 1 + width as usize);
        assert_eq!(Prefix::decode_cfg(&buf[..], &Config::default()).unwrap(), prefix);
    }
}

#[test]
fn test_boundary_127_128() {
    let mut buf = vec![0; rsize(127)];
    import(&mut buf, &CString::new(payload(127)).unwrap()).unwrap();
    assert_eq!(buf[0], 0x7F);
    assert_eq!(data(&buf).unwrap(), 1);

    let mut buf = vec![0; rsize(128)];
    import(&mut buf, &CString::new(payload(128)).unwrap()).unwrap();
    assert_eq!(&buf[..2], &[0x81, 0x80]);
    assert_eq!(data(&buf).unwrap(), 2);
}

#[test]
fn test_minimal_encoding() {
    // Smallest N such that 256^N > len, never larger.
    let cases: [(usize, usize); 6] = [
        (128, 1),
        (255, 1),
        (256, 2),
        (65535, 2),
        (65536, 3),
        ((1 << 24) - 1, 3),
    ];
    for (len, width) in cases {
        assert_eq!(rsize(len), len + width + 2);
        assert_eq!(prefix_size(len as u64), 1 + width);
    }
}

#[test]
fn test_overlong_acceptance() {
    let mut buf = vec![0x87, 10, 0, 0, 0, 0, 0, 0];
    buf.extend_from_slice(b"abcdefghij\0");
    assert_eq!(len(&buf).unwrap(), 10);
    assert_eq!(data(&buf).unwrap(), 8);

    let mut minimal = vec![0; rsize(10)];
    import(&mut minimal, c"abcdefghij").unwrap();
    assert_eq!(len(&minimal).unwrap(), 10);
    assert_eq!(
        Vlpstr::new(&buf).unwrap().as_bytes(),
        Vlpstr::new(&minimal).unwrap().as_bytes()
    );
}

#[test]
fn test_empty_string() {
    assert_eq!(rsize(0), 2);
    let mut buf = [0xFF; 2];
    import(&mut buf, c"").unwrap();
    assert_eq!(buf, [0x00, 0x00]);
    assert_eq!(len(&buf).unwrap(), 0);

    // Identical to an empty terminated string.
    let view = Vlpstr::new(&buf).unwrap();
    assert_eq!(view.as_cstr(), Some(c""));
}

#[test]
fn test_hello() {
    assert_eq!(rsize(6), 8);
    let mut buf = [0u8; 8];
    import_bytes(&mut buf, b"Hello!\0").unwrap();
    assert_eq!(buf[0], 0x06);
    assert_eq!(&buf[1..7], b"Hello!");
    assert_eq!(buf[7], 0x00);
    assert_eq!(len(&buf).unwrap(), 6);
    assert_eq!(data(&buf).unwrap(), 1);
}

#[test]
fn test_records_without_terminators() {
    // Encoded strings can be packed back to back when the terminator is dropped.
    let mut record = Vec::new();
    for word in [&b"alpha"[..], &[b'b'; 200][..], &b""[..]] {
        let mut buf = vec![0; rsize(word.len())];
        Encoder::default().write(&mut buf, word).unwrap();
        Vlpstr::new(&buf).unwrap().write(&mut record);
    }

    let first = Vlpstr::new(&record).unwrap();
    assert_eq!(first.as_bytes(), b"alpha");
    let second = Vlpstr::new(first.remainder()).unwrap();
    assert_eq!(second.len(), 200);
    assert_eq!(second.data_offset(), 2);
    let third = Vlpstr::new(second.remainder()).unwrap();
    assert!(third.is_empty());
    assert!(third.remainder().is_empty());
}

#[test]
fn test_truncate_packed_records() {
    let mut record = Vec::new();
    for word in [&b"ab"[..], b"cd"] {
        let mut buf = vec![0; rsize(word.len())];
        Encoder::default().write(&mut buf, word).unwrap();
        Vlpstr::new(&buf).unwrap().write(&mut record);
    }

    // Truncating to the current length leaves the following record intact.
    VlpstrMut::new(&mut record).unwrap().truncate(2).unwrap();
    let first = Vlpstr::new(&record).unwrap();
    assert_eq!(first.as_bytes(), b"ab");
    assert_eq!(Vlpstr::new(first.remainder()).unwrap().as_bytes(), b"cd");

    // Shrinking only writes within the old payload.
    VlpstrMut::new(&mut record).unwrap().truncate(0).unwrap();
    assert_eq!(record, b"\x00\0b\x02cd");
    assert_eq!(Vlpstr::new(&record[3..]).unwrap().as_bytes(), b"cd");
}

#[test]
fn test_fixed_width_truncation() {
    // A wide prefix leaves room to shrink without moving the payload.
    let encoder = Encoder::new(Width::Fixed(4));
    let src = payload(1000);
    let mut buf = vec![0; encoder.required_size(src.len()).unwrap()];
    encoder.write(&mut buf, &src).unwrap();
    assert_eq!(data(&buf).unwrap(), 5);

    let mut view = VlpstrMut::new(&mut buf).unwrap();
    view.truncate(3).unwrap();
    let view = view.as_view();
    assert_eq!(view.data_offset(), 5);
    assert_eq!(view.as_bytes(), &src[..3]);
    assert!(view.prefix().is_overlong());
    assert_eq!(len(&buf).unwrap(), 3);
}

#[test]
fn test_untrusted_lengths() {
    // Rejections are logged at debug.
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    let cfg = Config::default().with_len(..=64);
    let mut buf = vec![0; rsize(100)];
    Encoder::default().write(&mut buf, &payload(100)).unwrap();
    assert!(matches!(
        Vlpstr::new_cfg(&buf, &cfg),
        Err(Error::InvalidLength(100))
    ));
    assert!(Vlpstr::new(&buf).is_ok());
}
