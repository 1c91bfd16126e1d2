//! Cross-cutting properties the pipeline must hold for any input.

use cssmin::{minify, minify_bytes, MinifyStats, Pipeline};

/// Inputs exercising every pass, plus hostile shapes: unterminated
/// comments, truncated color functions, hashes at end-of-buffer, NULs.
fn corpus() -> Vec<&'static [u8]> {
    vec![
        b"",
        b" ",
        b"a{color:red}",
        b"a   {  color : red  ;  }",
        b"a{color:red}/*x*/b{color:blue}",
        b"color: rgb(255,0,0);",
        b"margin:0.5em",
        b"a{color:red;;}b{}",
        b"/* unterminated",
        b"a{x:rgb(1,2",
        b"p{c:#",
        b"p{c:#ffee2",
        b"#ffffff",
        b"{}{}{}",
        b"\n\n\t  \n",
        b"a\0b{\0}",
        b"body { margin: 0; padding: 0.5em; background: rgb(300,0,0); }",
    ]
}

#[test]
fn pipeline_is_idempotent() {
    for input in corpus() {
        let once = minify_bytes(input);
        let twice = minify_bytes(&once);
        assert_eq!(once, twice, "not idempotent for {:?}", input);
    }
}

#[test]
fn output_never_exceeds_input_length() {
    for input in corpus() {
        let out = minify_bytes(input);
        assert!(
            out.len() <= input.len(),
            "output grew for {:?}: {} -> {}",
            input,
            input.len(),
            out.len()
        );
    }
}

#[test]
fn per_pass_lengths_never_grow() {
    for input in corpus() {
        let mut stats = MinifyStats::default();
        Pipeline::standard().run(input, &mut stats);
        for report in &stats.passes {
            assert!(
                report.bytes_after <= report.bytes_before,
                "pass {} grew on {:?}",
                report.name,
                input
            );
        }
    }
}

#[test]
fn nul_bytes_are_ordinary_content() {
    // No byte value is reserved as a deletion marker.
    assert_eq!(minify_bytes(b"a\0b"), b"a\0b");
    assert_eq!(minify_bytes(b"a{c:\0}"), b"a{c:\0}");
}

#[test]
fn minify_str_round_trips_utf8() {
    let out = minify("a{content:\"日本語 ← →\"}");
    assert_eq!(out, "a{content:\"日本語 ← →\"}");
}

#[test]
fn whitespace_only_input_minifies_to_nothing() {
    assert_eq!(minify(" \t\n \n\t "), "");
}
