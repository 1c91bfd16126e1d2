//! Full-pipeline behavior: the passes composing in their fixed order.

use cssmin::minify;

#[test]
fn comment_is_removed_and_survivors_untouched() {
    assert_eq!(
        minify("a{color:red}/*x*/b{color:blue}"),
        "a{color:red}b{color:blue}"
    );
}

#[test]
fn whitespace_collapses_but_space_before_colon_survives() {
    assert_eq!(minify("a   {  color : red  ;  }"), "a{color :red}");
}

#[test]
fn rgb_collapse_and_hex_shortening_compose() {
    // rgb-to-hex yields #ff0000, which hex-shorten then takes to #f00.
    assert_eq!(minify("color: rgb(255,0,0);"), "color:#f00;");
}

#[test]
fn leading_zero_is_trimmed() {
    assert_eq!(minify("margin:0.5em"), "margin:.5em");
}

#[test]
fn semicolon_runs_and_empty_blocks_clean_up() {
    assert_eq!(minify("a{color:red;;}b{}"), "a{color:red}");
}

#[test]
fn block_emptied_by_whitespace_collapse_is_removed() {
    // The newline between the braces is elided by pass 1, exposing {} to
    // the final pass.
    assert_eq!(minify("a{x:y}.unused {\n}\n"), "a{x:y}");
}

#[test]
fn rgb_inside_a_larger_sheet_rewrites_in_place() {
    assert_eq!(
        minify("a { background: rgb(171,205,239); }"),
        "a{background:#abcdef}"
    );
}

#[test]
fn pseudo_class_spacing_is_not_misjudged() {
    // `a :hover` selects differently than `a:hover`; the space stays.
    assert_eq!(minify("a :hover { color: blue; }"), "a :hover{color:blue}");
}

#[test]
fn unterminated_comment_swallows_the_tail() {
    assert_eq!(minify("a{color:red}/* trailing"), "a{color:red}");
}

#[test]
fn realistic_stylesheet_end_to_end() {
    let input = "/* header */\n\
                 body {\n\
                 \x20   margin: 0;\n\
                 \x20   padding: 0.5em;\n\
                 \x20   background: rgb(255,255,255);\n\
                 }\n\
                 \n\
                 a:hover { color : #ff0000; }\n\
                 \n\
                 .unused {\n\
                 }\n";
    insta::assert_snapshot!(
        minify(input),
        @"body{margin:0;padding:.5em;background:#fff}a:hover{color :#f00}"
    );
}
