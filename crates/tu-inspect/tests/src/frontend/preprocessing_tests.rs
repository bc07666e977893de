use super::*;

fn at(
    line: u32,
    col: u32,
) -> SourceLoc {
    SourceLoc {
        file: "/tmp/unit.c".into(),
        line,
        col,
    }
}

#[test]
fn tokenize_splits_on_whitespace_only() {
    assert_eq!(tokenize("a + b"), ["a", "+", "b"]);
    assert_eq!(tokenize("  x  "), ["x"]);
    assert_eq!(tokenize(""), Vec::<String>::new());
}

#[test]
fn tokenize_uses_maximal_munch_for_punctuators() {
    assert_eq!(tokenize("a<<=b"), ["a", "<<=", "b"]);
    assert_eq!(tokenize("x##y"), ["x", "##", "y"]);
    assert_eq!(tokenize("p->q"), ["p", "->", "q"]);
    assert_eq!(tokenize("#s"), ["#", "s"]);
}

#[test]
fn tokenize_keeps_quoted_interiors_verbatim() {
    assert_eq!(tokenize(r#""hello world" X"#), [r#""hello world""#, "X"]);
    assert_eq!(tokenize(r#""a \" b""#), [r#""a \" b""#]);
    assert_eq!(tokenize(r"'\''"), [r"'\''"]);
}

#[test]
fn tokenize_scans_pp_numbers_whole() {
    assert_eq!(tokenize("1.5e+3f"), ["1.5e+3f"]);
    assert_eq!(tokenize("0x1F+2"), ["0x1F", "+", "2"]);
    assert_eq!(tokenize(".5+x"), [".5", "+", "x"]);
}

#[test]
fn parse_define_object_like() {
    let (name, info) = parse_define("ZERO 0").expect("parses");
    assert_eq!(name, "ZERO");
    assert!(!info.is_function_like);
    assert!(info.params.is_empty());
    assert_eq!(info.body_tokens, ["0"]);
}

#[test]
fn parse_define_empty_body() {
    let (name, info) = parse_define("UNUSED").expect("parses");
    assert_eq!(name, "UNUSED");
    assert!(!info.is_function_like);
    assert!(info.body_tokens.is_empty());
}

#[test]
fn parse_define_function_like_preserves_parameter_order() {
    let (name, info) = parse_define("MAX(a, b) ((a)>(b)?(a):(b))").expect("parses");
    assert_eq!(name, "MAX");
    assert!(info.is_function_like);
    assert_eq!(info.params, ["a", "b"]);
}

#[test]
fn parse_define_zero_parameters_is_still_function_like() {
    let (_, info) = parse_define("NOW() time()").expect("parses");
    assert!(info.is_function_like);
    assert!(info.params.is_empty());
}

#[test]
fn parse_define_space_before_paren_is_object_like() {
    // `#define PTR (void *)0` has no parameter list.
    let (_, info) = parse_define("PTR (void *)0").expect("parses");
    assert!(!info.is_function_like);
    assert_eq!(info.body_tokens, ["(", "void", "*", ")", "0"]);
}

#[test]
fn record_entries_follow_directive_order() {
    let record = PreprocessingRecord::from_preprocessed(
        "# 1 \"/tmp/unit.c\"\n#define A 1\nint x;\n#define B 2\n",
    );
    let names: Vec<&str> = record
        .entries()
        .iter()
        .map(|entry| match entry {
            RecordEntry::MacroDefinition {
                name, ..
            } => name.as_str(),
            other => panic!("unexpected entry {other:?}"),
        })
        .collect();
    assert_eq!(names, ["A", "B"]);
}

#[test]
fn line_markers_set_the_presumed_position() {
    let record = PreprocessingRecord::from_preprocessed("# 10 \"/tmp/unit.c\"\n#define LATE 1\n");
    match &record.entries()[0] {
        RecordEntry::MacroDefinition {
            end_loc, ..
        } => {
            assert_eq!(end_loc.file, "/tmp/unit.c");
            assert_eq!(end_loc.line, 10);
        },
        other => panic!("unexpected entry {other:?}"),
    }
}

#[test]
fn lookup_between_undef_and_redefinition_is_none() {
    let record =
        PreprocessingRecord::from_preprocessed("# 1 \"/tmp/unit.c\"\n#define M 1\n#undef M\n#define M 2\n");
    // Line 2 col 5 sits after the #undef and before the redefinition.
    assert!(record.macro_info_at("M", &at(2, 5)).is_none());
}

#[test]
fn lookup_at_each_definition_site_sees_that_binding() {
    let record =
        PreprocessingRecord::from_preprocessed("# 1 \"/tmp/unit.c\"\n#define M 1\n#undef M\n#define M 2\n");
    let sites: Vec<SourceLoc> = record
        .entries()
        .iter()
        .map(|entry| match entry {
            RecordEntry::MacroDefinition {
                end_loc, ..
            } => end_loc.clone(),
            other => panic!("unexpected entry {other:?}"),
        })
        .collect();
    assert_eq!(record.macro_info_at("M", &sites[0]).expect("first binding").body_tokens, ["1"]);
    assert_eq!(record.macro_info_at("M", &sites[1]).expect("second binding").body_tokens, ["2"]);
}

#[test]
fn redefinition_without_undef_retires_the_old_binding() {
    let record = PreprocessingRecord::from_preprocessed("# 1 \"/tmp/unit.c\"\n#define M 1\n#define M 2\n");
    // Past both definitions the later body is the active one.
    assert_eq!(record.macro_info_at("M", &at(40, 1)).expect("active binding").body_tokens, ["2"]);
}

#[test]
fn lookup_of_unknown_name_is_none() {
    let record = PreprocessingRecord::from_preprocessed("# 1 \"/tmp/unit.c\"\n#define A 1\n");
    assert!(record.macro_info_at("B", &at(1, 1)).is_none());
}

#[test]
fn inclusion_markers_become_record_entries() {
    let record = PreprocessingRecord::from_preprocessed(
        "# 1 \"/tmp/unit.c\"\nint before;\n# 1 \"/tmp/header.h\" 1\n# 3 \"/tmp/unit.c\" 2\n",
    );
    match &record.entries()[0] {
        RecordEntry::Inclusion {
            file,
            loc,
        } => {
            assert_eq!(file, "/tmp/header.h");
            assert_eq!(loc.file, "/tmp/unit.c");
            assert_eq!(loc.line, 2);
        },
        other => panic!("unexpected entry {other:?}"),
    }
}

#[test]
fn pseudo_file_sections_are_skipped_entirely() {
    let record = PreprocessingRecord::from_preprocessed(
        "# 1 \"/tmp/unit.c\"\n# 1 \"<built-in>\" 1\n#define __STDC__ 1\n# 1 \"/tmp/unit.c\" 2\n",
    );
    assert!(record.entries().is_empty());
    assert!(record.macro_info_at("__STDC__", &at(1, 1)).is_none());
}
