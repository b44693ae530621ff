#![no_main]

use commonware_vlpstr::{data, data_cfg, len, len_cfg, Config, Error, Prefix, Vlpstr, Write};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|buf: &[u8]| {
    // Decoding untrusted input never panics, and every accessor agrees.
    for cfg in [Config::default(), Config::permissive()] {
        let offset = data_cfg(buf, &cfg);
        let n = len_cfg(buf, &cfg);
        if let Err(Error::MalformedPrefix(..)) = offset {
            assert!(n.is_err(), "len accepted a prefix that data rejected");
        }

        let Ok(view) = Vlpstr::new_cfg(buf, &cfg) else {
            continue;
        };
        assert_eq!(view.data_offset(), *offset.as_ref().unwrap());
        assert_eq!(view.len() as u64, *n.as_ref().unwrap());
        assert_eq!(view.as_encoded().len(), view.data_offset() + view.len());

        // Re-encoding the decoded length with the same width reproduces the prefix (reserved bits
        // aside).
        let mut prefix = Vec::new();
        view.prefix().write(&mut prefix);
        assert_eq!(&prefix[1..], &buf[1..view.data_offset()]);
        assert_eq!(Prefix::minimal(view.len() as u64).len(), view.len() as u64);
    }

    // The default config is never more permissive than the permissive one.
    if let Ok(n) = len(buf) {
        assert_eq!(len_cfg(buf, &Config::permissive()).unwrap(), n);
    }
    if let Ok(offset) = data(buf) {
        assert_eq!(data_cfg(buf, &Config::permissive()).unwrap(), offset);
    }
});
