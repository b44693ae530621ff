#![no_main]

use arbitrary::Arbitrary;
use commonware_vlpstr::{
    data, import_bytes, len, rsize, Encoder, Error, Prefix, Vlpstr, VlpstrMut, Width,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum FuzzInput<'a> {
    Import(&'a [u8]),
    Write { width: u8, payload: &'a [u8] },
    Truncate { payload: &'a [u8], new_len: usize },
    Prefix(u64),
}

fn roundtrip_import(src: &[u8]) {
    let mut buf = vec![0xAA; src.len() + 16];
    let Some(end) = src.iter().position(|&b| b == 0) else {
        assert!(matches!(
            import_bytes(&mut buf, src),
            Err(Error::MissingTerminator)
        ));
        return;
    };

    let written = import_bytes(&mut buf, src).expect("Failed to import a terminated input!");
    assert_eq!(written, rsize(end));
    assert_eq!(len(&buf).unwrap(), end as u64);
    let offset = data(&buf).unwrap();
    assert_eq!(&buf[offset..written], &src[..=end]);
    assert!(buf[written..].iter().all(|&b| b == 0xAA));
}

fn roundtrip_write(width: u8, payload: &[u8]) {
    let width = match width % 10 {
        0 => Width::Minimal,
        n => Width::Fixed(n),
    };
    let encoder = Encoder::new(width);
    let required = match encoder.required_size(payload.len()) {
        Ok(required) => required,
        Err(Error::InvalidWidth(_, _)) => return,
        Err(err) => panic!("unexpected error: {err}"),
    };

    let mut buf = vec![0; required];
    let written = encoder
        .write(&mut buf, payload)
        .expect("Failed to write into a buffer of the required size!");
    assert_eq!(written, required);

    let view = Vlpstr::new(&buf).expect("Failed to decode a successfully encoded input!");
    assert_eq!(view.as_bytes(), payload);
    assert!(view.has_terminator());
    if width == Width::Minimal {
        assert!(!view.prefix().is_overlong());
    }
}

fn roundtrip_truncate(payload: &[u8], new_len: usize) {
    // A trailing byte stands in for a following record and must survive truncation.
    let mut buf = vec![0xAA; rsize(payload.len()) + 1];
    Encoder::default().write(&mut buf, payload).unwrap();
    let encoded = buf.len() - 2;
    let mut view = VlpstrMut::new(&mut buf[..encoded]).unwrap();
    if new_len > payload.len() {
        assert!(matches!(view.truncate(new_len), Err(Error::InvalidLength(_))));
        return;
    }
    view.truncate(new_len).unwrap();
    let view = view.as_view();
    assert_eq!(view.as_bytes(), &payload[..new_len]);
    if new_len < payload.len() {
        assert!(view.has_terminator());
    }
    assert_eq!(buf[buf.len() - 1], 0xAA);
}

fn roundtrip_prefix(n: u64) {
    use commonware_vlpstr::{Decode, EncodeSize, Write};

    let prefix = Prefix::minimal(n);
    let mut buf = Vec::with_capacity(prefix.encode_size());
    prefix.write(&mut buf);
    assert_eq!(buf.len(), prefix.encode_size());
    let decoded = Prefix::decode_cfg(&buf[..], &Default::default()).unwrap();
    assert_eq!(decoded, prefix);
    assert_eq!(len(&buf).unwrap(), n);
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Import(src) => roundtrip_import(src),
        FuzzInput::Write { width, payload } => roundtrip_write(width, payload),
        FuzzInput::Truncate { payload, new_len } => roundtrip_truncate(payload, new_len),
        FuzzInput::Prefix(n) => roundtrip_prefix(n),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
