#![no_main]

use arbitrary::Arbitrary;
use fluentscan::Scanner;
use libfuzzer_sys::fuzz_target;

/// One step of a fluent chain. Mirrors the public surface so arbitrary
/// sequences exercise every operation, including everything after a failure.
#[derive(Arbitrary, Debug)]
enum Op {
    Then(String),
    MaybeThen(String),
    OneOf(Vec<String>),
    Until(String),
    One,
    Maybe,
    OneOrMany,
    Digit,
    Letter,
    Is(char),
    BindVar(String),
    ReplaceWith(String),
}

fuzz_target!(|input: (String, Vec<Op>)| {
    let (source, ops) = input;
    let mut scan = Scanner::new(&source);
    let mut was_failed = false;

    for op in &ops {
        scan = match op {
            Op::Then(p) => scan.then(p),
            Op::MaybeThen(p) => scan.maybe_then(p),
            Op::OneOf(alts) => {
                let alts: Vec<&str> = alts.iter().map(String::as_str).collect();
                scan.one_of(&alts)
            }
            Op::Until(p) => scan.until(p),
            Op::One => scan.one(),
            Op::Maybe => scan.maybe(),
            Op::OneOrMany => scan.one_or_many(),
            Op::Digit => scan.digit(),
            Op::Letter => scan.letter(),
            Op::Is(ch) => scan.is(*ch),
            Op::BindVar(label) => scan.bind_var(label),
            Op::ReplaceWith(value) => scan.replace_with(value),
        };

        // Cursor stays inside the source; slicing the derived last match
        // panics if mark/cursor ever disagree or split a scalar.
        assert!(scan.cursor() <= source.len());
        let _ = scan.last_match();
        let _ = scan.replaced_string();

        // The failure flag is monotonic.
        assert!(!was_failed || scan.failed());
        was_failed = scan.failed();
    }
});
